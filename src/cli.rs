use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "condialog",
    about = "Console dialogs that stay on the terminal when stdio is redirected"
)]
pub struct Cli {
    /// Override config file location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v = DEBUG, -vv = TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a message and wait for [Return]
    Message {
        /// Message text (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Ask whether something passed; exits 0 on pass, 1 on fail
    PassFail {
        /// Message text (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },
}

impl Command {
    /// The message text, words joined with single spaces.
    pub fn message(&self) -> String {
        match self {
            Command::Message { text } | Command::PassFail { text } => text.join(" "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pass_fail_with_words() {
        let cli = Cli::try_parse_from(["condialog", "pass-fail", "Is", "the", "LED", "on?"]).unwrap();
        assert!(matches!(cli.command, Command::PassFail { .. }));
        assert_eq!(cli.command.message(), "Is the LED on?");
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "condialog",
            "message",
            "hello",
            "-vv",
            "--config",
            "/tmp/c.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.command.message(), "hello");
    }

    #[test]
    fn text_required() {
        assert!(Cli::try_parse_from(["condialog", "message"]).is_err());
    }
}
