use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use igscout::ExportFormat;

/// Instagram profile investigation (OSINT).
///
/// With both --username and --sessionid the investigation runs once;
/// otherwise an interactive menu starts.
#[derive(Parser, Debug)]
#[command(name = "igscout", version, about)]
pub struct Cli {
    /// Account to investigate (a leading @ is ignored)
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Value of the `sessionid` cookie of a logged-in browser session
    #[arg(short = 's', long = "sessionid")]
    pub session_id: Option<String>,

    /// Export to this file (the format extension is added when missing)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short = 'f', long, value_enum, default_value_t = FormatArg::Json)]
    pub format: FormatArg,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}
