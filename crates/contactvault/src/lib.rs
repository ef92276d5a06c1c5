//! `contactvault` - local-first storage for contact-form submissions
//!
//! This library provides the core functionality for validating contact
//! submissions, persisting them to a local key-value slot, and rendering,
//! filtering, and exporting the saved records.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod api;
pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod export;
pub mod logging;
pub mod render;
pub mod store;
pub mod validate;

pub use api::{ApiConfig, ContactApi};
pub use config::Config;
pub use contact::{ContactRecord, ContactStatus, Submission};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use render::ContactFilter;
pub use store::{Store, StoreStats};
pub use validate::Validator;
