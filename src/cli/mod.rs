//! Binary front end: one-shot mode and the interactive menu.

mod args;
pub mod logging;
pub mod output;
mod prompts;
mod theme;

pub use args::Cli;

use std::path::Path;
use std::process::ExitCode;

use chrono::Local;
use igscout::{
    Credentials, ExportFormat, IgClient, IgError, Investigator, Palette, Session, Stage, report,
};
use prompts::MenuChoice;

/// Exit code for arguments rejected before any network call.
const EXIT_INVALID_INPUT: u8 = 2;

fn show_stage(stage: Stage) {
    match stage {
        Stage::ResolvingId => output::progress("Resolving user id"),
        Stage::Resolved { user_id } => output::success(&format!("ID found: {user_id}")),
        Stage::FetchingDetails => output::progress("Collecting detailed information"),
        Stage::LookingUp => output::progress("Running advanced lookup"),
    }
}

/// Runs the pipeline with progress lines, then prints the report.
async fn investigate_and_show(
    session: &mut Session<IgClient>,
    creds: &Credentials,
) -> Result<(), IgError> {
    let record = session.investigate(creds, show_stage).await?;
    print!("{}", report::render(record, Palette::Ansi));
    println!("{}", report::render_footer(Local::now(), Palette::Ansi));
    Ok(())
}

/// Exports the last result; failures are reported, never fatal.
fn export_and_report(session: &Session<IgClient>, format: ExportFormat, filename: Option<&Path>) {
    match session.export_last(format, filename) {
        Ok(path) => output::success(&format!("Data exported to: {}", path.display())),
        Err(e) => output::error(&format!("Export failed: {e}")),
    }
}

fn new_session() -> Result<Session<IgClient>, IgError> {
    Ok(Session::new(Investigator::new(IgClient::builder().build()?)))
}

async fn one_shot(cli: Cli, username: &str, session_id: &str) -> anyhow::Result<ExitCode> {
    let creds = match Credentials::parse(username, session_id) {
        Ok(c) => c,
        Err(e) => {
            output::error(&e.to_string());
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };
    let format = ExportFormat::from(cli.format);
    let mut session = new_session()?;

    output::banner();
    if let Err(e) = investigate_and_show(&mut session, &creds).await {
        output::error(&format!("Investigation failed: {e}"));
        return Ok(ExitCode::FAILURE);
    }

    if let Some(out) = cli.output.as_deref() {
        export_and_report(&session, format, Some(out));
    } else if prompts::confirm_export()? {
        export_and_report(&session, format, None);
    }
    Ok(ExitCode::SUCCESS)
}

async fn interactive() -> anyhow::Result<ExitCode> {
    let mut session = new_session()?;
    output::banner();

    loop {
        match prompts::menu_choice()? {
            MenuChoice::Investigate => {
                let creds = prompts::credentials()?;
                match investigate_and_show(&mut session, &creds).await {
                    Ok(()) => {
                        if prompts::confirm_export()? {
                            let format = prompts::export_format()?;
                            export_and_report(&session, format, None);
                        }
                    }
                    Err(e) => output::error(&format!("Investigation failed: {e}")),
                }
            }
            MenuChoice::Tutorial => output::tutorial(),
            MenuChoice::ExportLast => {
                if session.last().is_none() {
                    output::warning("No investigation performed yet!");
                    continue;
                }
                let format = prompts::export_format()?;
                export_and_report(&session, format, None);
            }
            MenuChoice::Quit => {
                output::farewell();
                return Ok(ExitCode::SUCCESS);
            }
        }
    }
}

/// Dispatches on the parsed arguments.
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match (cli.username.clone(), cli.session_id.clone()) {
        (Some(username), Some(session_id)) => one_shot(cli, &username, &session_id).await,
        _ => interactive().await,
    }
}
