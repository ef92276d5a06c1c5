//! Submission validation.
//!
//! This module checks a raw [`Submission`] against the required-field and
//! format rules. All rules run in a fixed order and every violation is
//! collected, so the submitter sees the complete list at once instead of
//! fixing one field per attempt.

use regex::Regex;

use crate::contact::Submission;

/// Pattern for an acceptable email address: something before and after the
/// `@`, with at least one dot in the domain part, no whitespace anywhere.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Pattern for an acceptable phone number once separators are stripped:
/// optional leading `+`, a non-zero first digit, up to 15 more digits.
const PHONE_PATTERN: &str = r"^\+?[1-9]\d{0,15}$";

/// Validator for contact submissions.
///
/// Holds the compiled format regexes so repeated checks don't recompile.
#[derive(Debug)]
pub struct Validator {
    email_regex: Regex,
    phone_regex: Regex,
}

impl Validator {
    /// Create a validator with the built-in rules.
    ///
    /// # Panics
    ///
    /// Panics if the built-in patterns fail to compile, which would be a
    /// bug in this crate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(EMAIL_PATTERN).expect("invalid email pattern"),
            phone_regex: Regex::new(PHONE_PATTERN).expect("invalid phone pattern"),
        }
    }

    /// Check a submission and collect every rule violation.
    ///
    /// Returns the ordered list of human-readable error strings; an empty
    /// list means the submission is valid.
    #[must_use]
    pub fn check(&self, submission: &Submission) -> Vec<String> {
        let mut errors = Vec::new();

        if submission.first_name.trim().is_empty() {
            errors.push("First name is required".to_string());
        }
        if submission.last_name.trim().is_empty() {
            errors.push("Last name is required".to_string());
        }
        if submission.email.trim().is_empty() {
            errors.push("Email is required".to_string());
        }
        if submission.subject.trim().is_empty() {
            errors.push("Subject is required".to_string());
        }
        if submission.message.trim().is_empty() {
            errors.push("Message is required".to_string());
        }

        if !submission.email.is_empty() && !self.email_regex.is_match(&submission.email) {
            errors.push("Please enter a valid email address".to_string());
        }

        if let Some(phone) = &submission.phone {
            let stripped = strip_phone_separators(phone);
            if !stripped.is_empty() && !self.phone_regex.is_match(&stripped) {
                errors.push("Please enter a valid phone number".to_string());
            }
        }

        errors
    }

    /// Convenience check that a submission passes every rule.
    #[must_use]
    pub fn is_valid(&self, submission: &Submission) -> bool {
        self.check(submission).is_empty()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the separator characters tolerated in phone input.
fn strip_phone_separators(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}
