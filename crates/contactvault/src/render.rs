//! Plain-text rendering of the contact collection.
//!
//! One rendering path serves both the full list and any filtered view:
//! callers describe what they want with a [`ContactFilter`] and every
//! record that matches is rendered the same way. An empty filter matches
//! everything.

use chrono::{DateTime, Utc};

use crate::contact::{subject_display_name, ContactRecord, ContactStatus};

/// Default number of message characters shown before truncation.
pub const DEFAULT_MESSAGE_PREVIEW_LEN: usize = 100;

/// Predicate over contact records for search and status filtering.
///
/// The search term matches case-insensitively as a substring of first
/// name, last name, email, company, or message. The status matches
/// exactly. When both are set a record must satisfy both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Case-insensitive substring to search for.
    pub search_term: Option<String>,
    /// Exact status to require.
    pub status: Option<ContactStatus>,
}

impl ContactFilter {
    /// A filter that matches every record.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Check whether a record satisfies this filter.
    #[must_use]
    pub fn matches(&self, record: &ContactRecord) -> bool {
        let term = self.normalized_term();
        self.matches_with(record, term.as_deref())
    }

    /// Apply the filter, preserving the input order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [ContactRecord]) -> Vec<&'a ContactRecord> {
        let term = self.normalized_term();
        records
            .iter()
            .filter(|r| self.matches_with(r, term.as_deref()))
            .collect()
    }

    /// The search term lowercased once, so filtering a collection doesn't
    /// re-normalize it per record.
    fn normalized_term(&self) -> Option<String> {
        self.search_term.as_deref().map(str::to_lowercase)
    }

    fn matches_with(&self, record: &ContactRecord, term: Option<&str>) -> bool {
        let matches_search = term.map_or(true, |term| {
            record.first_name.to_lowercase().contains(term)
                || record.last_name.to_lowercase().contains(term)
                || record.email.to_lowercase().contains(term)
                || record
                    .company
                    .as_deref()
                    .is_some_and(|company| company.to_lowercase().contains(term))
                || record.message.to_lowercase().contains(term)
        });

        let matches_status = self.status.map_or(true, |status| record.status == status);

        matches_search && matches_status
    }
}

/// Render every record matching the filter, in the collection's order
/// (newest first), truncating each message to `preview_len` characters.
#[must_use]
pub fn render(records: &[ContactRecord], filter: &ContactFilter, preview_len: usize) -> String {
    let mut out = String::new();
    for record in filter.apply(records) {
        if !out.is_empty() {
            out.push('\n');
        }
        render_record(&mut out, record, preview_len);
    }
    out
}

/// Placeholder text for an empty (post-filter) record set.
#[must_use]
pub fn render_empty(message: &str) -> String {
    format!("  {message}\n")
}

fn render_record(out: &mut String, record: &ContactRecord, preview_len: usize) {
    use std::fmt::Write;

    let _ = writeln!(
        out,
        "#{} {} [{}]",
        record.id,
        record.full_name(),
        record.status.to_string().to_uppercase()
    );
    let _ = writeln!(out, "  Email:    {}", record.email);
    if let Some(phone) = &record.phone {
        let _ = writeln!(out, "  Phone:    {phone}");
    }
    if let Some(company) = &record.company {
        let _ = writeln!(out, "  Company:  {company}");
    }
    let _ = writeln!(out, "  Subject:  {}", subject_display_name(&record.subject));
    let _ = writeln!(
        out,
        "  Message:  {}",
        truncate_message(&record.message, preview_len)
    );
    let _ = writeln!(out, "  Received: {}", format_timestamp(record.timestamp));
    if let Some(updated_at) = record.updated_at {
        let _ = writeln!(out, "  Updated:  {}", format_timestamp(updated_at));
    }
}

/// Truncate a message to its first `preview_len` characters, appending an
/// ellipsis when anything was cut.
#[must_use]
pub fn truncate_message(message: &str, preview_len: usize) -> String {
    if message.chars().count() > preview_len {
        let mut preview: String = message.chars().take(preview_len).collect();
        preview.push_str("...");
        preview
    } else {
        message.to_string()
    }
}

/// Format a timestamp for display.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}
