//! Core contact record types.
//!
//! This module defines the fundamental data structures for representing
//! contact-form submissions and the records stored from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The lifecycle status of a stored contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    /// Freshly submitted, not yet looked at.
    New,
    /// Submission has been read.
    Read,
    /// Submission has been answered.
    Replied,
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Read => write!(f, "read"),
            Self::Replied => write!(f, "replied"),
        }
    }
}

/// One submission attempt, prior to validation.
///
/// Field values arrive as raw strings from the submitting surface; the
/// validator decides whether they form an acceptable record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    /// Submitter's first name (required).
    pub first_name: String,
    /// Submitter's last name (required).
    pub last_name: String,
    /// Contact email address (required).
    pub email: String,
    /// Contact phone number (optional).
    pub phone: Option<String>,
    /// Company or organization (optional).
    pub company: Option<String>,
    /// Subject slug (required), e.g. `web-development`.
    pub subject: String,
    /// The message body (required).
    pub message: String,
}

/// A stored contact submission.
///
/// Serialized field names match the JSON shape persisted in the storage
/// slot (`firstName`, `updatedAt`, ...), so the slot value round-trips
/// across load/save cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// Unique identifier, assigned at creation, immutable.
    pub id: i64,

    /// Submitter's first name.
    pub first_name: String,

    /// Submitter's last name.
    pub last_name: String,

    /// Contact email address.
    pub email: String,

    /// Contact phone number, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company or organization, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Subject slug chosen at submission time.
    pub subject: String,

    /// The message body.
    pub message: String,

    /// Lifecycle status; starts at [`ContactStatus::New`].
    pub status: ContactStatus,

    /// When the record was created, immutable.
    pub timestamp: DateTime<Utc>,

    /// When the status was last mutated; unset until the first mutation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContactRecord {
    /// Build a record from a validated submission.
    ///
    /// The record starts in [`ContactStatus::New`] with no `updated_at`.
    #[must_use]
    pub fn from_submission(id: i64, submission: Submission, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: submission.first_name,
            last_name: submission.last_name,
            email: submission.email,
            phone: submission.phone,
            company: submission.company,
            subject: submission.subject,
            message: submission.message,
            status: ContactStatus::New,
            timestamp: now,
            updated_at: None,
        }
    }

    /// Full display name of the submitter.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Map a subject slug to its display name.
///
/// Unknown slugs pass through unchanged.
#[must_use]
pub fn subject_display_name(subject: &str) -> &str {
    match subject {
        "web-development" => "Web Development Project",
        "consultation" => "Consultation",
        "collaboration" => "Collaboration",
        "other" => "Other",
        _ => subject,
    }
}
