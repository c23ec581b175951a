//! Core domain logic for the skill tracker.
//! This crate is the single source of truth for business invariants:
//! the persistent document store, the skill-update engine, the export
//! reminder policy and the topic catalog.

pub mod catalog;
pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod reminder;
pub mod repo;
pub mod stats;
pub mod store;

pub use catalog::{resolve, search, topics_by_category, CATEGORIES, TOPIC_LIBRARY};
pub use engine::{
    add_custom_topic, add_skill, record_level, remove_custom_topic, remove_skill, set_goal,
    update_notes, EngineError, EngineResult,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user_data::{
    SkillLevel, SkillUpdate, Theme, Topic, TopicCategory, TrackedSkill, UserData, UserSettings,
    DOCUMENT_VERSION,
};
pub use reminder::should_remind;
pub use repo::document_repo::{DocumentRepository, SqliteDocumentRepository};
pub use stats::{category_summary, daily_activity, total_minutes, CategorySummary, DayActivity};
pub use store::{migrate, StoreError, StoreResult, UserDataStore, USER_DATA_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
