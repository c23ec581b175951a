//! Versioned document migration registry and executor.
//!
//! # Responsibility
//! - Register upward document transformations in strictly increasing
//!   version order.
//! - Bring older documents to the current shape before typed decode.
//!
//! # Invariants
//! - Migration is idempotent: an already-current document passes through
//!   unchanged.
//! - Documents newer than [`DOCUMENT_VERSION`] are rejected, never
//!   silently accepted.

use crate::model::user_data::{UserData, DOCUMENT_VERSION};
use crate::store::{document_version, StoreError, StoreResult};
use serde_json::{json, Value};

/// One upward document transformation.
///
/// `apply` receives the raw JSON value of a document at `version - 1` or
/// older and must reshape it to satisfy `version`. Transforms run at the
/// value level so they can reshape fields that no longer exist in the
/// typed model.
struct DocumentMigration {
    version: u32,
    apply: fn(&mut Value),
}

/// Registry of document migrations. Version 1 is the initial shape, so
/// the registry starts empty; future shape changes append here.
const MIGRATIONS: &[DocumentMigration] = &[];

/// Migrates a raw document value to the current version in place.
pub(crate) fn migrate_value(value: &mut Value) -> StoreResult<()> {
    let found = document_version(value)?;
    let supported = u64::from(DOCUMENT_VERSION);

    if found > supported {
        return Err(StoreError::UnsupportedVersion {
            found,
            supported: DOCUMENT_VERSION,
        });
    }

    if found == supported {
        return Ok(());
    }

    for migration in MIGRATIONS {
        if u64::from(migration.version) <= found {
            continue;
        }
        (migration.apply)(value);
        set_version(value, migration.version);
    }
    set_version(value, DOCUMENT_VERSION);

    Ok(())
}

/// Migrates a typed document to the current version.
///
/// A document already at the current version passes through unchanged;
/// `migrate(migrate(doc)) == migrate(doc)` holds for every document.
pub fn migrate(doc: UserData) -> StoreResult<UserData> {
    if doc.version == DOCUMENT_VERSION {
        return Ok(doc);
    }

    let mut value = serde_json::to_value(&doc)
        .map_err(|err| StoreError::InvalidSchema(format!("document failed to serialize: {err}")))?;
    migrate_value(&mut value)?;
    serde_json::from_value(value).map_err(|err| StoreError::InvalidSchema(err.to_string()))
}

fn set_version(value: &mut Value, version: u32) {
    if let Some(object) = value.as_object_mut() {
        object.insert("version".to_string(), json!(version));
    }
}

#[cfg(test)]
mod tests {
    use super::{migrate, migrate_value};
    use crate::model::user_data::{UserData, DOCUMENT_VERSION};
    use crate::store::StoreError;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn current_document_passes_through_unchanged() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 8, 0, 0).unwrap();
        let doc = UserData::default_document(now);
        let migrated = migrate(doc.clone()).unwrap();
        assert_eq!(migrated, doc);
    }

    #[test]
    fn migration_is_idempotent() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 8, 0, 0).unwrap();
        let doc = UserData::default_document(now);
        let once = migrate(doc).unwrap();
        let twice = migrate(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn older_value_is_stamped_to_current_version() {
        let mut value = json!({
            "version": 0,
            "skills": [],
            "customTopics": [],
            "settings": { "theme": "system", "exportReminderDays": 7 },
            "createdAt": "2026-02-01T08:00:00Z",
            "lastModified": "2026-02-01T08:00:00Z"
        });
        migrate_value(&mut value).unwrap();
        assert_eq!(value["version"], json!(DOCUMENT_VERSION));
    }

    #[test]
    fn newer_document_version_is_rejected() {
        let mut value = json!({ "version": 99, "skills": [] });
        let err = migrate_value(&mut value).unwrap_err();
        match err {
            StoreError::UnsupportedVersion { found, supported } => {
                assert_eq!(found, 99);
                assert_eq!(supported, DOCUMENT_VERSION);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
