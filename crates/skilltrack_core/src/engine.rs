//! Skill engine: pure document transforms for every user-facing mutation.
//!
//! # Responsibility
//! - Turn a `UserData` snapshot plus action parameters into a new
//!   snapshot, preserving document invariants.
//! - Leave persistence to the caller; nothing here touches storage.
//!
//! # Invariants
//! - At most one `TrackedSkill` per topic id.
//! - Skill history is append-only; prior entries are never edited.
//! - A skill's `level` always equals the level of its last history entry.
//! - Removing a custom topic cascades to any skill tracking it; no
//!   orphaned skill may remain.
//!
//! `now` is an explicit parameter wherever a timestamp is stamped, so
//! every transform is deterministic for a fixed input.

use crate::model::user_data::{SkillLevel, SkillUpdate, Topic, TopicCategory, TrackedSkill, UserData};
use chrono::{DateTime, NaiveDate, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-layer error for mutations targeting tracked skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Mutation targets a topic with no tracked skill.
    UnknownTopic(String),
    /// Goal level must be strictly greater than the current level.
    GoalNotAboveLevel {
        topic_id: String,
        goal: SkillLevel,
        level: SkillLevel,
    },
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTopic(topic_id) => write!(f, "no tracked skill for topic: {topic_id}"),
            Self::GoalNotAboveLevel {
                topic_id,
                goal,
                level,
            } => write!(
                f,
                "goal level {} must exceed current level {} for topic {topic_id}",
                goal.as_u8(),
                level.as_u8()
            ),
        }
    }
}

impl Error for EngineError {}

/// Starts tracking a topic with its history seeded at `initial_level`.
///
/// No-op returning an unchanged copy when the topic is already tracked.
pub fn add_skill(
    doc: &UserData,
    topic_id: &str,
    initial_level: SkillLevel,
    now: DateTime<Utc>,
) -> UserData {
    if doc.is_tracked(topic_id) {
        return doc.clone();
    }

    let mut next = doc.clone();
    next.skills.push(TrackedSkill::new(topic_id, initial_level, now));
    next
}

/// Stops tracking a topic. Its history is discarded, not archived.
///
/// No-op when the topic is not tracked.
pub fn remove_skill(doc: &UserData, topic_id: &str) -> UserData {
    let mut next = doc.clone();
    next.skills.retain(|skill| skill.topic_id != topic_id);
    next
}

/// Records a new proficiency observation for a tracked topic.
///
/// Sets `level` and `last_updated`, and appends one history entry.
///
/// # Errors
/// - [`EngineError::UnknownTopic`] when the topic is not tracked.
pub fn record_level(
    doc: &UserData,
    topic_id: &str,
    level: SkillLevel,
    time_spent_minutes: Option<u32>,
    now: DateTime<Utc>,
) -> EngineResult<UserData> {
    let mut next = doc.clone();
    let skill = next
        .skill_mut(topic_id)
        .ok_or_else(|| EngineError::UnknownTopic(topic_id.to_string()))?;

    skill.level = level;
    skill.last_updated = now;
    skill.history.push(SkillUpdate {
        date: now,
        level,
        time_spent_minutes,
    });

    Ok(next)
}

/// Sets or overwrites the goal on a tracked topic.
///
/// # Errors
/// - [`EngineError::UnknownTopic`] when the topic is not tracked.
/// - [`EngineError::GoalNotAboveLevel`] when `goal_level` does not exceed
///   the skill's current level.
pub fn set_goal(
    doc: &UserData,
    topic_id: &str,
    goal_level: SkillLevel,
    goal_date: Option<NaiveDate>,
) -> EngineResult<UserData> {
    let mut next = doc.clone();
    let skill = next
        .skill_mut(topic_id)
        .ok_or_else(|| EngineError::UnknownTopic(topic_id.to_string()))?;

    if goal_level <= skill.level {
        return Err(EngineError::GoalNotAboveLevel {
            topic_id: topic_id.to_string(),
            goal: goal_level,
            level: skill.level,
        });
    }

    skill.goal_level = Some(goal_level);
    skill.goal_date = goal_date;

    Ok(next)
}

/// Replaces the notes on a tracked topic verbatim. No length limit.
///
/// # Errors
/// - [`EngineError::UnknownTopic`] when the topic is not tracked.
pub fn update_notes(doc: &UserData, topic_id: &str, notes: impl Into<String>) -> EngineResult<UserData> {
    let mut next = doc.clone();
    let skill = next
        .skill_mut(topic_id)
        .ok_or_else(|| EngineError::UnknownTopic(topic_id.to_string()))?;

    skill.notes = Some(notes.into());

    Ok(next)
}

/// Creates a user-defined topic and appends it to the document.
///
/// Ids are `custom-` prefixed UUIDs; the prefix keeps the custom
/// namespace disjoint from built-in catalog ids.
///
/// Returns the new document together with the created topic.
pub fn add_custom_topic(
    doc: &UserData,
    name: impl Into<String>,
    category: TopicCategory,
    icon: Option<String>,
) -> (UserData, Topic) {
    let topic = Topic {
        id: format!("custom-{}", Uuid::new_v4()),
        name: name.into(),
        category,
        is_custom: true,
        icon,
    };

    let mut next = doc.clone();
    next.custom_topics.push(topic.clone());
    (next, topic)
}

/// Removes a user-defined topic and cascades to any skill tracking it.
///
/// The cascade is mandatory: a skill referencing a deleted topic would
/// violate the document's referential invariant. The skill's history is
/// lost with it.
pub fn remove_custom_topic(doc: &UserData, topic_id: &str) -> UserData {
    let mut next = doc.clone();
    next.custom_topics.retain(|topic| topic.id != topic_id);
    next.skills.retain(|skill| skill.topic_id != topic_id);
    next
}
