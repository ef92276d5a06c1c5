//! Simulated backend operations over the store.
//!
//! The original system fronted its storage with a fake remote API: every
//! operation suspends for a fixed latency, and record creation can fail
//! with a synthetic transient error. This module keeps that contract so
//! callers exercise the same retry/validation paths they would against a
//! real service, while all state stays local.
//!
//! Operations run one at a time per API instance (they take `&mut self`),
//! so there is no interleaving against the store. Once an operation's
//! delay has started it always completes; there is no cancellation.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, warn};

use crate::contact::{ContactRecord, ContactStatus, Submission};
use crate::error::{Error, Result};
use crate::store::Store;
use crate::validate::Validator;

/// Tuning for the simulated backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Simulated latency for record creation.
    pub create_delay: Duration,
    /// Simulated latency for delete and status updates.
    pub mutate_delay: Duration,
    /// Probability in `[0, 1]` that a create fails with
    /// [`Error::ServiceUnavailable`]. Zero disables the failure path
    /// entirely; one makes it deterministic, which tests rely on.
    pub failure_probability: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            create_delay: Duration::from_millis(1500),
            mutate_delay: Duration::from_millis(300),
            failure_probability: 0.10,
        }
    }
}

impl ApiConfig {
    /// A config with no delays and no synthetic failures, for tests.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            create_delay: Duration::ZERO,
            mutate_delay: Duration::ZERO,
            failure_probability: 0.0,
        }
    }
}

/// The simulated backend API.
///
/// Owns the [`Store`] and a [`Validator`]; every mutation of the contact
/// collection goes through here.
#[derive(Debug)]
pub struct ContactApi {
    store: Store,
    validator: Validator,
    config: ApiConfig,
}

impl ContactApi {
    /// Wrap a store with the default simulated-backend tuning.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    /// Wrap a store with explicit tuning.
    #[must_use]
    pub fn with_config(store: Store, config: ApiConfig) -> Self {
        Self {
            store,
            validator: Validator::new(),
            config,
        }
    }

    /// Read access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Validate a submission and create a contact record from it.
    ///
    /// Suspends for the configured create latency, then rolls the
    /// synthetic failure die. On the failure path no storage mutation
    /// happens at all, so the caller can simply resubmit.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] with every rule violation if the
    ///   submission is invalid (checked before the delay; nothing stored).
    /// - [`Error::ServiceUnavailable`] on the synthetic failure path.
    /// - A storage error if persisting fails; the record is still present
    ///   in memory in that case.
    pub async fn create(&mut self, submission: Submission) -> Result<ContactRecord> {
        let errors = self.validator.check(&submission);
        if !errors.is_empty() {
            debug!(count = errors.len(), "Submission rejected by validation");
            return Err(Error::validation(errors));
        }

        tokio::time::sleep(self.config.create_delay).await;

        if self.roll_failure() {
            warn!("Synthetic create failure triggered");
            return Err(Error::ServiceUnavailable);
        }

        let id = self.store.next_id();
        let record = ContactRecord::from_submission(id, submission, Utc::now());
        self.store.insert(record.clone())?;

        debug!(id, "Contact created");
        Ok(record)
    }

    /// Delete the record with the given id.
    ///
    /// Suspends for the configured mutation latency. Returns whether a
    /// record was actually removed; an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the collection fails.
    pub async fn delete(&mut self, id: i64) -> Result<bool> {
        tokio::time::sleep(self.config.mutate_delay).await;
        self.store.remove(id)
    }

    /// Set the status of the record with the given id.
    ///
    /// Suspends for the configured mutation latency and stamps
    /// `updated_at`. Returns whether a record was found; an unknown id is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the collection fails.
    pub async fn update_status(&mut self, id: i64, status: ContactStatus) -> Result<bool> {
        tokio::time::sleep(self.config.mutate_delay).await;
        self.store.update_status(id, status, Utc::now())
    }

    /// Draw against the configured failure probability.
    fn roll_failure(&self) -> bool {
        if self.config.failure_probability <= 0.0 {
            return false;
        }
        rand::thread_rng().gen::<f64>() < self.config.failure_probability
    }
}
