//! Command-line interface for contactvault.
//!
//! This module provides the CLI structure and command handlers for the
//! `cvault` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, DeleteCommand, ExportCommand, ListCommand, MarkCommand,
    MarkStatusArg, StatsCommand, StatusArg,
};

/// cvault - Keep your contact-form submissions close
///
/// A local-first vault that validates contact submissions, stores them in
/// a local database, and lets you list, filter, and export them.
#[derive(Debug, Parser)]
#[command(name = "cvault")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a new contact
    Add(AddCommand),

    /// List stored contacts, optionally filtered
    List(ListCommand),

    /// Delete a contact by id
    Delete(DeleteCommand),

    /// Mark a contact as read or replied
    Mark(MarkCommand),

    /// Export all contacts to CSV
    Export(ExportCommand),

    /// Show collection statistics
    Stats(StatsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "cvault");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: Command::Stats(StatsCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        for (verbose, expected) in [
            (0, crate::logging::Verbosity::Normal),
            (1, crate::logging::Verbosity::Verbose),
            (2, crate::logging::Verbosity::Trace),
        ] {
            let cli = Cli {
                config: None,
                verbose,
                quiet: false,
                command: Command::Stats(StatsCommand { json: false }),
            };
            assert_eq!(cli.verbosity(), expected);
        }
    }

    #[test]
    fn test_parse_add() {
        let args = vec![
            "cvault",
            "add",
            "--first-name",
            "Jane",
            "--last-name",
            "Smith",
            "--email",
            "jane@example.com",
            "--subject",
            "consultation",
            "--message",
            "Hello",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Add(_)));
    }

    #[test]
    fn test_parse_list_with_filters() {
        let args = vec!["cvault", "list", "--search", "smith", "-t", "new"];
        let cli = Cli::try_parse_from(args).unwrap();
        if let Command::List(cmd) = cli.command {
            assert_eq!(cmd.search, Some("smith".to_string()));
            assert_eq!(cmd.status, Some(StatusArg::New));
        } else {
            panic!("expected List command");
        }
    }

    #[test]
    fn test_parse_delete() {
        let args = vec!["cvault", "delete", "17"];
        let cli = Cli::try_parse_from(args).unwrap();
        if let Command::Delete(cmd) = cli.command {
            assert_eq!(cmd.id, 17);
        } else {
            panic!("expected Delete command");
        }
    }

    #[test]
    fn test_parse_mark() {
        let args = vec!["cvault", "mark", "3", "replied"];
        let cli = Cli::try_parse_from(args).unwrap();
        if let Command::Mark(cmd) = cli.command {
            assert_eq!(cmd.id, 3);
            assert_eq!(cmd.status, MarkStatusArg::Replied);
        } else {
            panic!("expected Mark command");
        }
    }

    #[test]
    fn test_parse_mark_rejects_new() {
        // The surface never offers a transition back to `new`
        let args = vec!["cvault", "mark", "3", "new"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_export() {
        let args = vec!["cvault", "export", "--output", "/tmp/out.csv"];
        let cli = Cli::try_parse_from(args).unwrap();
        if let Command::Export(cmd) = cli.command {
            assert_eq!(cmd.output, Some(PathBuf::from("/tmp/out.csv")));
        } else {
            panic!("expected Export command");
        }
    }

    #[test]
    fn test_parse_with_config() {
        let args = vec!["cvault", "-c", "/custom/config.toml", "stats"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let args = vec!["cvault", "-v", "stats"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_with_quiet() {
        let args = vec!["cvault", "-q", "stats"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.quiet);
    }
}
