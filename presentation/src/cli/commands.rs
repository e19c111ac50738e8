//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot suggestions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored summary
    #[default]
    Text,
    /// JSON object matching the HTTP response body
    Json,
}

/// CLI arguments for ticket-triage
#[derive(Parser, Debug)]
#[command(name = "ticket-triage")]
#[command(author, version, about = "Suggest a support-ticket category with an LLM")]
#[command(long_about = r#"
ticket-triage asks an OpenAI-compatible chat-completions service to place a
support ticket into one of five categories:

  Billing, Technical Support, Login Issue, Feature Request, General Feedback

Free-text answers are mapped onto the closest category; the result says
whether that mapping was needed ("coerced").

Configuration files are loaded from (in priority order):
1. TRIAGE_* environment variables   (e.g. TRIAGE_OPENAI__MODEL=gpt-4o)
2. --config <path>                  Explicit config file
3. ./triage.toml or ./.triage.toml  Project-level config
4. ~/.config/ticket-triage/config.toml   Global config

Example:
  ticket-triage serve --bind 0.0.0.0:5080
  ticket-triage suggest --title "Charged twice" --description "Two invoices this month"
  ticket-triage suggest -o json --title "Can't log in" --description "Reset link expired"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API (POST /api/suggest, GET /health) until Ctrl-C
    Serve {
        /// Address to bind (overrides server.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Suggest a category for a single ticket and print it
    Suggest {
        /// Ticket title
        #[arg(long)]
        title: String,

        /// Ticket description
        #[arg(long)]
        description: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_bind() {
        let cli = Cli::try_parse_from(["ticket-triage", "-vv", "serve", "--bind", "0.0.0.0:9000"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Some(Command::Serve {
                bind: Some("0.0.0.0:9000".to_string())
            })
        );
    }

    #[test]
    fn test_parse_suggest_defaults_to_text() {
        let cli = Cli::try_parse_from([
            "ticket-triage",
            "suggest",
            "--title",
            "Charged twice",
            "--description",
            "Two invoices",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Suggest { title, output, .. }) => {
                assert_eq!(title, "Charged twice");
                assert_eq!(output, OutputFormat::Text);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ticket-triage",
            "suggest",
            "--title",
            "t",
            "--description",
            "d",
            "-o",
            "json",
            "--no-config",
            "-v",
        ])
        .unwrap();
        assert!(cli.no_config);
        assert_eq!(cli.verbose, 1);
        assert!(matches!(
            cli.command,
            Some(Command::Suggest {
                output: OutputFormat::Json,
                ..
            })
        ));
    }

    #[test]
    fn test_show_config_without_subcommand() {
        let cli = Cli::try_parse_from(["ticket-triage", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_suggest_requires_title() {
        assert!(Cli::try_parse_from(["ticket-triage", "suggest", "--description", "d"]).is_err());
    }
}
