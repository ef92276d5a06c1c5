//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::contact::{ContactStatus, Submission};

/// Add command arguments: one contact submission.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Submitter's first name
    #[arg(long)]
    pub first_name: String,

    /// Submitter's last name
    #[arg(long)]
    pub last_name: String,

    /// Contact email address
    #[arg(long)]
    pub email: String,

    /// Subject slug (e.g. web-development, consultation)
    #[arg(long)]
    pub subject: String,

    /// The message body
    #[arg(long)]
    pub message: String,

    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Company or organization
    #[arg(long)]
    pub company: Option<String>,
}

impl From<AddCommand> for Submission {
    fn from(cmd: AddCommand) -> Self {
        Self {
            first_name: cmd.first_name,
            last_name: cmd.last_name,
            email: cmd.email,
            phone: cmd.phone,
            company: cmd.company,
            subject: cmd.subject,
            message: cmd.message,
        }
    }
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Case-insensitive search over names, email, company, and message
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show contacts with this status
    #[arg(short = 't', long, value_enum)]
    pub status: Option<StatusArg>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Id of the contact to delete
    pub id: i64,
}

/// Mark command arguments.
#[derive(Debug, Args)]
pub struct MarkCommand {
    /// Id of the contact to update
    pub id: i64,

    /// The status to set
    #[arg(value_enum)]
    pub status: MarkStatusArg,
}

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Output file (defaults to portfolio_contacts_<date>.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Status argument for list filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Freshly submitted contacts
    New,
    /// Contacts marked as read
    Read,
    /// Contacts marked as replied
    Replied,
}

impl From<StatusArg> for ContactStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::New => Self::New,
            StatusArg::Read => Self::Read,
            StatusArg::Replied => Self::Replied,
        }
    }
}

/// Status argument for the mark command.
///
/// Deliberately narrower than [`StatusArg`]: the surface never offers a
/// transition back to `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkStatusArg {
    /// Mark the contact as read
    Read,
    /// Mark the contact as replied
    Replied,
}

impl From<MarkStatusArg> for ContactStatus {
    fn from(arg: MarkStatusArg) -> Self {
        match arg {
            MarkStatusArg::Read => Self::Read,
            MarkStatusArg::Replied => Self::Replied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_arg_conversion() {
        assert_eq!(ContactStatus::from(StatusArg::New), ContactStatus::New);
        assert_eq!(ContactStatus::from(StatusArg::Read), ContactStatus::Read);
        assert_eq!(
            ContactStatus::from(StatusArg::Replied),
            ContactStatus::Replied
        );
    }

    #[test]
    fn test_mark_status_arg_conversion() {
        assert_eq!(
            ContactStatus::from(MarkStatusArg::Read),
            ContactStatus::Read
        );
        assert_eq!(
            ContactStatus::from(MarkStatusArg::Replied),
            ContactStatus::Replied
        );
    }

    #[test]
    fn test_add_command_into_submission() {
        let cmd = AddCommand {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@example.com".to_string(),
            subject: "other".to_string(),
            message: "Hello".to_string(),
            phone: None,
            company: Some("Acme".to_string()),
        };

        let submission = Submission::from(cmd);
        assert_eq!(submission.first_name, "Jane");
        assert_eq!(submission.company, Some("Acme".to_string()));
        assert!(submission.phone.is_none());
    }

    #[test]
    fn test_list_command_debug() {
        let cmd = ListCommand {
            search: Some("smith".to_string()),
            status: Some(StatusArg::New),
            json: false,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("search"));
        assert!(debug_str.contains("smith"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
