//! User document model.
//!
//! # Responsibility
//! - Define `UserData` and every record shape nested inside it.
//! - Reproduce the export/import wire format exactly: camelCase field
//!   names, integer skill levels, ISO-8601 dates, optionals omitted when
//!   absent.
//!
//! # Invariants
//! - `topic_id` is unique across `UserData::skills`.
//! - A skill's `level` equals the level of its last history entry.
//! - `history` is append-only and chronological by insertion.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Current version of the persisted document shape.
pub const DOCUMENT_VERSION: u32 = 1;

/// Proficiency scale shared by levels, goals and history entries.
///
/// Serialized as the integer 1..=5; anything outside that range fails to
/// decode, so the range invariant holds for every document that parses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum SkillLevel {
    Novice = 1,
    Beginner = 2,
    Competent = 3,
    Proficient = 4,
    Expert = 5,
}

impl SkillLevel {
    /// All levels in ascending order.
    pub const ALL: [SkillLevel; 5] = [
        SkillLevel::Novice,
        SkillLevel::Beginner,
        SkillLevel::Competent,
        SkillLevel::Proficient,
        SkillLevel::Expert,
    ];

    /// Fixed display label for this level.
    pub fn label(self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Beginner => "Beginner",
            Self::Competent => "Competent",
            Self::Proficient => "Proficient",
            Self::Expert => "Expert",
        }
    }

    /// Numeric value in 1..=5.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Novice),
            2 => Ok(Self::Beginner),
            3 => Ok(Self::Competent),
            4 => Ok(Self::Proficient),
            5 => Ok(Self::Expert),
            other => Err(format!("skill level {other} is outside 1..=5")),
        }
    }
}

impl From<SkillLevel> for u8 {
    fn from(value: SkillLevel) -> Self {
        value as u8
    }
}

/// Topic grouping used by the catalog and by custom topics.
///
/// Wire labels keep the original spelling (`Cloud/Infra`, `Soft Skills`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopicCategory {
    Languages,
    Frontend,
    Backend,
    #[serde(rename = "Cloud/Infra")]
    CloudInfra,
    Data,
    Architecture,
    DevOps,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    Custom,
}

impl TopicCategory {
    /// Wire/display label for this category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::CloudInfra => "Cloud/Infra",
            Self::Data => "Data",
            Self::Architecture => "Architecture",
            Self::DevOps => "DevOps",
            Self::SoftSkills => "Soft Skills",
            Self::Custom => "Custom",
        }
    }
}

/// A named subject of learning, built-in or user-created.
///
/// Built-in topics live in the static catalog and are never persisted;
/// custom topics are persisted in `UserData::custom_topics` with a
/// generated `custom-` prefixed id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub category: TopicCategory,
    pub is_custom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One historical observation appended to a skill's history.
///
/// Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillUpdate {
    pub date: DateTime<Utc>,
    pub level: SkillLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent_minutes: Option<u32>,
}

/// A user's ongoing proficiency record for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedSkill {
    /// Foreign key into the built-in catalog or `UserData::custom_topics`.
    pub topic_id: String,
    pub level: SkillLevel,
    pub last_updated: DateTime<Utc>,
    /// Append-only, chronological by insertion.
    pub history: Vec<SkillUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_level: Option<SkillLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_date: Option<NaiveDate>,
}

impl TrackedSkill {
    /// Creates a tracked skill with its history seeded by one entry at
    /// the initial level.
    pub fn new(topic_id: impl Into<String>, level: SkillLevel, now: DateTime<Utc>) -> Self {
        Self {
            topic_id: topic_id.into(),
            level,
            last_updated: now,
            history: vec![SkillUpdate {
                date: now,
                level,
                time_spent_minutes: None,
            }],
            notes: None,
            goal_level: None,
            goal_date: None,
        }
    }
}

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

/// User-editable settings persisted inside the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub theme: Theme,
    /// Days between export reminders. Positive.
    pub export_reminder_days: u32,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            export_reminder_days: 7,
        }
    }
}

/// Root aggregate: the single unit of persistence.
///
/// Every mutation reads the whole document, produces a new whole document
/// and writes it back atomically. `last_modified` is stamped by the store
/// on save, never by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub version: u32,
    pub skills: Vec<TrackedSkill>,
    pub custom_topics: Vec<Topic>,
    pub settings: UserSettings,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_exported: Option<DateTime<Utc>>,
}

impl UserData {
    /// Default document written on first run.
    pub fn default_document(now: DateTime<Utc>) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            skills: Vec::new(),
            custom_topics: Vec::new(),
            settings: UserSettings::default(),
            created_at: now,
            last_modified: now,
            last_exported: None,
        }
    }

    /// Looks up the tracked skill for a topic, if any.
    pub fn skill(&self, topic_id: &str) -> Option<&TrackedSkill> {
        self.skills.iter().find(|skill| skill.topic_id == topic_id)
    }

    /// Mutable lookup used by engine transforms.
    pub(crate) fn skill_mut(&mut self, topic_id: &str) -> Option<&mut TrackedSkill> {
        self.skills
            .iter_mut()
            .find(|skill| skill.topic_id == topic_id)
    }

    /// Whether a topic is currently tracked.
    pub fn is_tracked(&self, topic_id: &str) -> bool {
        self.skill(topic_id).is_some()
    }
}
