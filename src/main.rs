mod cli;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use console_dialogs::config::Config;
use console_dialogs::{ConsoleIo, MessageDialog, PassFailDialog, StreamContext};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "condialog=info,console_dialogs=info",
        1 => "condialog=debug,console_dialogs=debug",
        _ => "condialog=trace,console_dialogs=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config = Config::resolve(cli.config.as_deref())?;
    let ctx = StreamContext::stdio();
    let io = ConsoleIo::new(&ctx, config.console());
    let terminal = config.terminal();
    let message = cli.command.message();

    match cli.command {
        Command::Message { .. } => {
            MessageDialog::new(message).show(&io, &terminal)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::PassFail { .. } => {
            let passed = PassFailDialog::new(message).show(&io, &terminal)?;
            info!("{}", if passed { "Passed" } else { "Failed" });
            Ok(if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
