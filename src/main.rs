mod cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::Cli::parse();
    cli::logging::init(args.verbose);

    match cli::run(args).await {
        Ok(code) => code,
        Err(e) => {
            cli::output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
