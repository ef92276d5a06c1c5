//! CSV export of the contact collection.
//!
//! Produces the download artifact the original offered: a UTF-8 CSV of
//! the full, unfiltered record set with a fixed ten-column header. Every
//! field is double-quoted and embedded quotes are doubled; absent
//! optional fields export as empty strings.

use std::path::Path;

use chrono::NaiveDate;

use crate::contact::{subject_display_name, ContactRecord};
use crate::error::Result;
use crate::render::format_timestamp;

/// The fixed CSV header row.
pub const CSV_HEADER: &str =
    "First Name,Last Name,Email,Phone,Company,Subject,Message,Status,Received,Updated";

/// Serialize the full record set to CSV text.
#[must_use]
pub fn export_csv(records: &[ContactRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for record in records {
        let row = [
            record.first_name.clone(),
            record.last_name.clone(),
            record.email.clone(),
            record.phone.clone().unwrap_or_default(),
            record.company.clone().unwrap_or_default(),
            subject_display_name(&record.subject).to_string(),
            record.message.clone(),
            record.status.to_string(),
            format_timestamp(record.timestamp),
            record.updated_at.map(format_timestamp).unwrap_or_default(),
        ];

        let quoted: Vec<String> = row.iter().map(|field| quote_field(field)).collect();
        out.push_str(&quoted.join(","));
        out.push('\n');
    }

    out
}

/// Name of the export artifact for the given date.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("portfolio_contacts_{}.csv", date.format("%Y-%m-%d"))
}

/// Write the CSV artifact to disk.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_csv(path: impl AsRef<Path>, records: &[ContactRecord]) -> Result<()> {
    std::fs::write(path, export_csv(records))?;
    Ok(())
}

/// Quote a field, doubling any embedded double quotes.
fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactStatus, Submission};
    use chrono::Utc;

    fn sample_record(id: i64) -> ContactRecord {
        let submission = Submission {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("+14155551234".to_string()),
            company: None,
            subject: "web-development".to_string(),
            message: "Hello there".to_string(),
        };
        ContactRecord::from_submission(id, submission, Utc::now())
    }

    #[test]
    fn test_header_row() {
        let csv = export_csv(&[]);
        assert_eq!(csv, format!("{CSV_HEADER}\n"));
        assert_eq!(CSV_HEADER.split(',').count(), 10);
    }

    #[test]
    fn test_all_fields_quoted() {
        let csv = export_csv(&[sample_record(1)]);
        let row = csv.lines().nth(1).unwrap();

        assert!(row.starts_with("\"Jane\",\"Smith\",\"jane@example.com\""));
        // Ten quoted fields per row
        assert_eq!(row.matches("\",\"").count(), 9);
    }

    #[test]
    fn test_absent_optionals_export_empty() {
        let mut record = sample_record(1);
        record.phone = None;
        let csv = export_csv(&[record]);
        let row = csv.lines().nth(1).unwrap();

        // Phone and Company columns are empty, Updated is empty
        assert!(row.contains("\"jane@example.com\",\"\",\"\","));
        assert!(row.ends_with(",\"\""));
    }

    #[test]
    fn test_embedded_quotes_doubled() {
        let mut record = sample_record(1);
        record.message = "She said \"hi\" twice".to_string();

        let csv = export_csv(&[record]);
        assert!(csv.contains("\"She said \"\"hi\"\" twice\""));
    }

    #[test]
    fn test_subject_exported_as_display_name() {
        let csv = export_csv(&[sample_record(1)]);
        assert!(csv.contains("\"Web Development Project\""));
        assert!(!csv.contains("web-development"));
    }

    #[test]
    fn test_status_and_updated_columns() {
        let mut record = sample_record(1);
        record.status = ContactStatus::Read;
        record.updated_at = Some(record.timestamp);

        let csv = export_csv(&[record.clone()]);
        let row = csv.lines().nth(1).unwrap();

        assert!(row.contains("\"read\""));
        assert!(row.ends_with(&format!("\"{}\"", format_timestamp(record.timestamp))));
    }

    #[test]
    fn test_one_row_per_record() {
        let records = vec![sample_record(1), sample_record(2), sample_record(3)];
        let csv = export_csv(&records);
        assert_eq!(csv.lines().count(), 4);
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert_eq!(export_file_name(date), "portfolio_contacts_2026-08-29.csv");
    }

    #[test]
    fn test_write_csv() {
        let path = std::env::temp_dir().join(format!(
            "contactvault_export_{}.csv",
            std::process::id()
        ));

        write_csv(&path, &[sample_record(1)]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(CSV_HEADER));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_quote_field() {
        assert_eq!(quote_field("plain"), "\"plain\"");
        assert_eq!(quote_field(""), "\"\"");
        assert_eq!(quote_field("a\"b"), "\"a\"\"b\"");
    }
}
