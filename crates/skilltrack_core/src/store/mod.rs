//! Persistent store for the user document.
//!
//! # Responsibility
//! - Durable, single-document storage with versioned load and explicit
//!   export/import.
//! - Map durable-medium failures and malformed inputs to the store error
//!   taxonomy.
//!
//! # Invariants
//! - `last_modified` is stamped here on every save, never by the engine.
//! - Import validates and migrates fully before any write; a failed
//!   import leaves the persisted document untouched.
//! - Writes are whole-document replacements under one well-known key.

use crate::db::DbError;
use crate::model::user_data::UserData;
use crate::repo::document_repo::DocumentRepository;
use chrono::{DateTime, Utc};
use log::{error, info};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod migrate;

pub use migrate::migrate;

/// Well-known key the single user document is stored under.
pub const USER_DATA_KEY: &str = "main";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error taxonomy.
#[derive(Debug)]
pub enum StoreError {
    /// Input text is not syntactically valid JSON.
    MalformedInput(String),
    /// Input parses but does not have the document shape.
    InvalidSchema(String),
    /// Document version is newer than this binary supports.
    UnsupportedVersion { found: u64, supported: u32 },
    /// The durable medium failed.
    StorageUnavailable(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput(message) => write!(f, "malformed document text: {message}"),
            Self::InvalidSchema(message) => write!(f, "invalid document schema: {message}"),
            Self::UnsupportedVersion { found, supported } => write!(
                f,
                "document version {found} is newer than supported {supported}"
            ),
            Self::StorageUnavailable(err) => write!(f, "storage unavailable: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageUnavailable(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::StorageUnavailable(value)
    }
}

/// Single-document store over a [`DocumentRepository`].
///
/// One store instance per open connection; callers must not interleave
/// saves built from two stale in-memory snapshots.
pub struct UserDataStore<R: DocumentRepository> {
    repo: R,
}

impl<R: DocumentRepository> UserDataStore<R> {
    /// Creates a store using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the persisted document, creating and persisting the
    /// default document when none exists yet.
    ///
    /// Absence is never an error; a missing document is normalized to
    /// defaults. Persisted documents from older versions are migrated in
    /// memory and adopted durably on the next save.
    pub fn load(&self, now: DateTime<Utc>) -> StoreResult<UserData> {
        match self.repo.get(USER_DATA_KEY)? {
            Some(body) => decode_document(&body),
            None => {
                let doc = UserData::default_document(now);
                let saved = self.save(doc, now)?;
                info!("event=store_load module=store status=ok created_default=true");
                Ok(saved)
            }
        }
    }

    /// Stamps `last_modified = now` and writes the full document,
    /// replacing any prior value. Last-writer-wins.
    pub fn save(&self, mut doc: UserData, now: DateTime<Utc>) -> StoreResult<UserData> {
        doc.last_modified = now;
        let body = encode_document(&doc)?;
        self.repo.put(USER_DATA_KEY, &body)?;
        Ok(doc)
    }

    /// Deletes the persisted document entirely. Reset/testing only.
    pub fn clear(&self) -> StoreResult<()> {
        self.repo.delete(USER_DATA_KEY)?;
        info!("event=store_clear module=store status=ok");
        Ok(())
    }

    /// Loads the current document, stamps `last_exported = now`, persists
    /// that stamp and returns the pretty-printed document text.
    ///
    /// The `last_exported` update happens even when the caller discards
    /// the returned text.
    pub fn export_as_text(&self, now: DateTime<Utc>) -> StoreResult<String> {
        let mut doc = self.load(now)?;
        doc.last_exported = Some(now);
        let saved = self.save(doc, now)?;
        let text = serde_json::to_string_pretty(&saved)
            .map_err(|err| StoreError::InvalidSchema(format!("document failed to serialize: {err}")))?;
        info!(
            "event=store_export module=store status=ok skills={} bytes={}",
            saved.skills.len(),
            text.len()
        );
        Ok(text)
    }

    /// Parses, validates and migrates `text`, then persists the result as
    /// the new document (full replace, not a merge) and returns it.
    ///
    /// # Errors
    /// - [`StoreError::MalformedInput`] when the text is not valid JSON.
    /// - [`StoreError::InvalidSchema`] when `version` is not a number,
    ///   `skills` is not a sequence, or the typed decode fails.
    /// - [`StoreError::UnsupportedVersion`] when the document comes from
    ///   a newer schema.
    ///
    /// No error path writes to storage.
    pub fn import_from_text(&self, text: &str, now: DateTime<Utc>) -> StoreResult<UserData> {
        let doc = match decode_document(text) {
            Ok(doc) => doc,
            Err(err) => {
                error!("event=store_import module=store status=error error={err}");
                return Err(err);
            }
        };
        let saved = self.save(doc, now)?;
        info!(
            "event=store_import module=store status=ok skills={} custom_topics={}",
            saved.skills.len(),
            saved.custom_topics.len()
        );
        Ok(saved)
    }
}

/// Parses document text into a typed, current-version [`UserData`].
///
/// Shared by load (persisted body) and import (user-provided text), so a
/// corrupt persisted body fails the same way a bad import does.
fn decode_document(text: &str) -> StoreResult<UserData> {
    let mut value: Value =
        serde_json::from_str(text).map_err(|err| StoreError::MalformedInput(err.to_string()))?;
    check_document_shape(&value)?;
    migrate::migrate_value(&mut value)?;
    serde_json::from_value(value).map_err(|err| StoreError::InvalidSchema(err.to_string()))
}

fn encode_document(doc: &UserData) -> StoreResult<String> {
    serde_json::to_string(doc)
        .map_err(|err| StoreError::InvalidSchema(format!("document failed to serialize: {err}")))
}

/// Structural pre-checks run before migration and typed decode.
fn check_document_shape(value: &Value) -> StoreResult<()> {
    let object = value
        .as_object()
        .ok_or_else(|| StoreError::InvalidSchema("document root must be an object".into()))?;

    match object.get("version") {
        Some(version) if version.is_u64() => {}
        Some(_) => {
            return Err(StoreError::InvalidSchema(
                "`version` must be a non-negative integer".into(),
            ))
        }
        None => return Err(StoreError::InvalidSchema("missing `version` field".into())),
    }

    match object.get("skills") {
        Some(skills) if skills.is_array() => {}
        Some(_) => {
            return Err(StoreError::InvalidSchema(
                "`skills` must be a sequence".into(),
            ))
        }
        None => return Err(StoreError::InvalidSchema("missing `skills` field".into())),
    }

    Ok(())
}

pub(crate) fn document_version(value: &Value) -> StoreResult<u64> {
    value
        .get("version")
        .and_then(Value::as_u64)
        .ok_or_else(|| StoreError::InvalidSchema("`version` must be a non-negative integer".into()))
}
