use chrono::{Duration, TimeZone, Utc};
use rusqlite::Connection;
use skilltrack_core::db::{open_db, open_db_in_memory, DbError, DbResult};
use skilltrack_core::{
    add_skill, DocumentRepository, SkillLevel, SqliteDocumentRepository, StoreError,
    UserDataStore, DOCUMENT_VERSION,
};

fn store(conn: &Connection) -> UserDataStore<SqliteDocumentRepository<'_>> {
    UserDataStore::new(SqliteDocumentRepository::new(conn))
}

#[test]
fn first_load_creates_and_persists_the_default_document() {
    let conn = open_db_in_memory().unwrap();
    let store = store(&conn);
    let now = Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap();

    let doc = store.load(now).unwrap();
    assert_eq!(doc.version, DOCUMENT_VERSION);
    assert!(doc.skills.is_empty());
    assert_eq!(doc.created_at, now);
    assert_eq!(doc.last_modified, now);

    // The default document is persisted, not just returned: a later load
    // keeps the original creation stamp.
    let later = now + Duration::hours(3);
    let reloaded = store.load(later).unwrap();
    assert_eq!(reloaded.created_at, now);
}

#[test]
fn save_stamps_last_modified() {
    let conn = open_db_in_memory().unwrap();
    let store = store(&conn);
    let now = Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap();
    let later = now + Duration::minutes(30);

    let doc = store.load(now).unwrap();
    let saved = store.save(doc, later).unwrap();
    assert_eq!(saved.last_modified, later);

    let reloaded = store.load(later).unwrap();
    assert_eq!(reloaded.last_modified, later);
}

#[test]
fn clear_deletes_the_persisted_document() {
    let conn = open_db_in_memory().unwrap();
    let store = store(&conn);
    let now = Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap();

    let doc = store.load(now).unwrap();
    let doc = add_skill(&doc, "lang-rust", SkillLevel::Novice, now);
    store.save(doc, now).unwrap();
    store.clear().unwrap();

    let later = now + Duration::days(1);
    let fresh = store.load(later).unwrap();
    assert!(fresh.skills.is_empty());
    assert_eq!(fresh.created_at, later);
}

#[test]
fn export_stamps_last_exported_even_when_text_is_discarded() {
    let conn = open_db_in_memory().unwrap();
    let store = store(&conn);
    let now = Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap();
    let export_time = now + Duration::hours(1);

    store.load(now).unwrap();
    let _ = store.export_as_text(export_time).unwrap();

    let reloaded = store.load(export_time).unwrap();
    assert_eq!(reloaded.last_exported, Some(export_time));
    assert_eq!(reloaded.last_modified, export_time);
}

#[test]
fn documents_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skilltrack.db");
    let now = Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap();

    {
        let conn = open_db(&path).unwrap();
        let store = store(&conn);
        let doc = store.load(now).unwrap();
        let doc = add_skill(&doc, "lang-python", SkillLevel::Competent, now);
        store.save(doc, now).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = store(&conn);
    let doc = store.load(now + Duration::days(1)).unwrap();
    assert_eq!(doc.skills.len(), 1);
    assert_eq!(doc.skills[0].topic_id, "lang-python");
    assert_eq!(doc.skills[0].level, SkillLevel::Competent);
}

struct UnavailableRepo;

impl DocumentRepository for UnavailableRepo {
    fn get(&self, _key: &str) -> DbResult<Option<String>> {
        Err(DbError::Sqlite(rusqlite::Error::InvalidQuery))
    }

    fn put(&self, _key: &str, _body: &str) -> DbResult<()> {
        Err(DbError::Sqlite(rusqlite::Error::InvalidQuery))
    }

    fn delete(&self, _key: &str) -> DbResult<()> {
        Err(DbError::Sqlite(rusqlite::Error::InvalidQuery))
    }
}

#[test]
fn storage_failures_surface_as_storage_unavailable() {
    let store = UserDataStore::new(UnavailableRepo);
    let now = Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap();

    let err = store.load(now).unwrap_err();
    assert!(matches!(err, StoreError::StorageUnavailable(_)));

    let err = store.clear().unwrap_err();
    assert!(matches!(err, StoreError::StorageUnavailable(_)));
}
