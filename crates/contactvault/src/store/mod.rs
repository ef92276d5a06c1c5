//! Storage layer for contactvault.
//!
//! The store owns the authoritative in-memory list of contact records and
//! mirrors it to a single key-value slot in a local `SQLite` database. The
//! slot is loaded once when the store opens; after that the in-memory
//! collection is the source of truth and every mutation rewrites the slot
//! in full.
//!
//! Mutations apply to the in-memory collection before persisting, so a
//! persistence failure leaves the process usable in degraded in-memory
//! mode; the caller decides whether to warn or bail.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info, warn};

use crate::contact::{ContactRecord, ContactStatus};
use crate::error::{Error, Result};

/// The fixed slot key under which the contact collection is persisted.
pub const CONTACTS_SLOT_KEY: &str = "portfolio_contacts";

/// Store for contact records.
///
/// Keeps the full collection in memory, most-recently-created-first, and
/// persists it wholesale to one slot after every mutation.
#[derive(Debug)]
pub struct Store {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
    /// The authoritative collection, newest first.
    records: Vec<ContactRecord>,
    /// Next id to hand out; seeded from the loaded collection.
    next_id: i64,
}

impl Store {
    /// Open or create a store database at the given path.
    ///
    /// Creates the parent directories and database file if they don't
    /// exist, initializes the schema, and loads the contact slot into
    /// memory. An absent or unparsable slot initializes an empty
    /// collection rather than failing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema
    /// initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;

        let records = load_slot(&conn)?;
        let next_id = seed_next_id(&records);

        info!(
            "Store opened at {} with {} contacts",
            path.display(),
            records.len()
        );
        Ok(Self {
            path,
            conn,
            records,
            next_id,
        })
    }

    /// Create an in-memory store instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
            records: Vec::new(),
            next_id: 1,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current in-memory collection, newest first.
    ///
    /// Mutations must go through [`insert`](Self::insert),
    /// [`remove`](Self::remove), or [`update_status`](Self::update_status)
    /// so the persisted slot stays in sync.
    #[must_use]
    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hand out the next record id.
    ///
    /// Monotonic within a store lifetime and across reopens, since the
    /// counter is seeded past every id present in the loaded collection.
    pub fn next_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Prepend a record to the collection and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the slot fails; the record stays in
    /// the in-memory collection regardless.
    pub fn insert(&mut self, record: ContactRecord) -> Result<()> {
        debug!(id = record.id, "Inserting contact");
        self.records.insert(0, record);
        self.persist()
    }

    /// Remove the record with the given id and persist.
    ///
    /// Returns whether a record was removed; an unknown id is a no-op,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the slot fails.
    pub fn remove(&mut self, id: i64) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);

        if self.records.len() == before {
            debug!(id, "Remove skipped, no contact with that id");
            return Ok(false);
        }

        debug!(id, "Removed contact");
        self.persist()?;
        Ok(true)
    }

    /// Set the status of the record with the given id and persist.
    ///
    /// Stamps `updated_at` with `now` on every call, including repeated
    /// transitions to the same status. Returns whether a record was
    /// found; an unknown id is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the slot fails.
    pub fn update_status(
        &mut self,
        id: i64,
        status: ContactStatus,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            debug!(id, "Status update skipped, no contact with that id");
            return Ok(false);
        };

        record.status = status;
        record.updated_at = Some(now);
        debug!(id, %status, "Updated contact status");

        self.persist()?;
        Ok(true)
    }

    /// Summary statistics over the collection.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        let mut stats = StoreStats {
            total: self.records.len(),
            ..StoreStats::default()
        };

        for record in &self.records {
            match record.status {
                ContactStatus::New => stats.new_count += 1,
                ContactStatus::Read => stats.read_count += 1,
                ContactStatus::Replied => stats.replied_count += 1,
            }
        }

        // Collection is newest-first
        stats.newest = self.records.first().map(|r| r.timestamp);
        stats.oldest = self.records.last().map(|r| r.timestamp);
        stats
    }

    /// Write the full collection to the slot.
    fn persist(&self) -> Result<()> {
        let value = serde_json::to_string(&self.records)?;
        self.conn.execute(
            r"
            INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            ",
            (CONTACTS_SLOT_KEY, value),
        )?;
        Ok(())
    }
}

/// Read and parse the contact slot; absent or unparsable yields empty.
fn load_slot(conn: &Connection) -> Result<Vec<ContactRecord>> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM slots WHERE key = ?1",
            [CONTACTS_SLOT_KEY],
            |row| row.get(0),
        )
        .optional()?;

    let Some(value) = value else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&value) {
        Ok(records) => Ok(records),
        Err(e) => {
            warn!("Contact slot is unparsable, starting empty: {e}");
            Ok(Vec::new())
        }
    }
}

/// Seed the id counter past every id in the loaded collection.
fn seed_next_id(records: &[ContactRecord]) -> i64 {
    records
        .iter()
        .map(|record| record.id)
        .max()
        .map_or(1, |max| max + 1)
}

/// Summary statistics over the stored collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct StoreStats {
    /// Total number of records.
    pub total: usize,
    /// Records still in `new`.
    pub new_count: usize,
    /// Records marked `read`.
    pub read_count: usize,
    /// Records marked `replied`.
    pub replied_count: usize,
    /// Creation time of the newest record.
    pub newest: Option<DateTime<Utc>>,
    /// Creation time of the oldest record.
    pub oldest: Option<DateTime<Utc>>,
}
