//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `skilltrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::Utc;
use skilltrack_core::db::open_db_in_memory;
use skilltrack_core::{SqliteDocumentRepository, UserDataStore, TOPIC_LIBRARY};

fn main() {
    println!("skilltrack_core version={}", skilltrack_core::core_version());
    println!("builtin topics={}", TOPIC_LIBRARY.len());

    match open_db_in_memory() {
        Ok(conn) => {
            let store = UserDataStore::new(SqliteDocumentRepository::new(&conn));
            match store.load(Utc::now()) {
                Ok(doc) => println!(
                    "store ok document_version={} skills={}",
                    doc.version,
                    doc.skills.len()
                ),
                Err(err) => eprintln!("store load failed: {err}"),
            }
        }
        Err(err) => eprintln!("db open failed: {err}"),
    }
}
