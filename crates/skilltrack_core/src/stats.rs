//! Derived statistics over a user document.
//!
//! # Responsibility
//! - Aggregate skill history into the rollups the UI charts from:
//!   per-day activity, per-category summary, total logged time.
//!
//! # Invariants
//! - Read-only; no mutation, no storage access, no rendering concerns.
//! - Output ordering is deterministic for a fixed document.

use crate::catalog;
use crate::model::user_data::{TopicCategory, UserData};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Activity recorded on one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayActivity {
    pub date: NaiveDate,
    /// Number of history entries recorded that day.
    pub updates: u32,
    /// Sum of logged minutes that day.
    pub total_minutes: u64,
    /// Topics touched that day, deduplicated, in first-touch order.
    pub topic_ids: Vec<String>,
}

/// Per-category rollup over tracked skills.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: TopicCategory,
    /// Number of tracked skills resolving to this category.
    pub tracked: u32,
    /// Mean current level across those skills.
    pub average_level: f64,
}

/// Rolls skill history up into per-day activity, sorted by day.
pub fn daily_activity(doc: &UserData) -> Vec<DayActivity> {
    let mut days: BTreeMap<NaiveDate, DayActivity> = BTreeMap::new();

    for skill in &doc.skills {
        for update in &skill.history {
            let date = update.date.date_naive();
            let day = days.entry(date).or_insert_with(|| DayActivity {
                date,
                updates: 0,
                total_minutes: 0,
                topic_ids: Vec::new(),
            });
            day.updates += 1;
            day.total_minutes += u64::from(update.time_spent_minutes.unwrap_or(0));
            if !day.topic_ids.iter().any(|id| id == &skill.topic_id) {
                day.topic_ids.push(skill.topic_id.clone());
            }
        }
    }

    days.into_values().collect()
}

/// Summarizes tracked skills per category, in catalog category order.
///
/// Skills whose topic cannot be resolved (neither built-in nor custom)
/// are excluded; categories with no tracked skills are omitted.
pub fn category_summary(doc: &UserData) -> Vec<CategorySummary> {
    let mut counts: BTreeMap<usize, (u32, u64)> = BTreeMap::new();
    let order: Vec<TopicCategory> = catalog::CATEGORIES
        .iter()
        .copied()
        .chain(std::iter::once(TopicCategory::Custom))
        .collect();

    for skill in &doc.skills {
        let Some(topic) = catalog::resolve(&skill.topic_id, &doc.custom_topics) else {
            continue;
        };
        let Some(position) = order.iter().position(|c| *c == topic.category) else {
            continue;
        };
        let entry = counts.entry(position).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(skill.level.as_u8());
    }

    counts
        .into_iter()
        .map(|(position, (tracked, level_sum))| CategorySummary {
            category: order[position],
            tracked,
            average_level: level_sum as f64 / f64::from(tracked),
        })
        .collect()
}

/// Total minutes logged across all skills and history entries.
pub fn total_minutes(doc: &UserData) -> u64 {
    doc.skills
        .iter()
        .flat_map(|skill| skill.history.iter())
        .map(|update| u64::from(update.time_spent_minutes.unwrap_or(0)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{category_summary, daily_activity, total_minutes};
    use crate::engine::{add_custom_topic, add_skill, record_level};
    use crate::model::user_data::{SkillLevel, TopicCategory, UserData};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn daily_activity_groups_by_utc_day() {
        let day_one = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();
        let day_two = day_one + Duration::days(1);

        let doc = UserData::default_document(day_one);
        let doc = add_skill(&doc, "lang-rust", SkillLevel::Novice, day_one);
        let doc = record_level(&doc, "lang-rust", SkillLevel::Beginner, Some(30), day_one).unwrap();
        let doc = record_level(&doc, "lang-rust", SkillLevel::Competent, Some(45), day_two).unwrap();

        let days = daily_activity(&doc);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, day_one.date_naive());
        assert_eq!(days[0].updates, 2);
        assert_eq!(days[0].total_minutes, 30);
        assert_eq!(days[0].topic_ids, ["lang-rust"]);
        assert_eq!(days[1].updates, 1);
        assert_eq!(days[1].total_minutes, 45);
    }

    #[test]
    fn category_summary_resolves_builtin_and_custom_topics() {
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();
        let doc = UserData::default_document(now);
        let doc = add_skill(&doc, "lang-rust", SkillLevel::Competent, now);
        let doc = add_skill(&doc, "lang-go", SkillLevel::Novice, now);
        let (doc, topic) = add_custom_topic(&doc, "Wood Carving", TopicCategory::Custom, None);
        let doc = add_skill(&doc, &topic.id, SkillLevel::Expert, now);

        let summary = category_summary(&doc);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].category, TopicCategory::Languages);
        assert_eq!(summary[0].tracked, 2);
        assert!((summary[0].average_level - 2.0).abs() < f64::EPSILON);
        assert_eq!(summary[1].category, TopicCategory::Custom);
        assert_eq!(summary[1].tracked, 1);
    }

    #[test]
    fn unresolvable_topics_are_excluded_from_summary() {
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();
        let doc = UserData::default_document(now);
        let doc = add_skill(&doc, "no-such-topic", SkillLevel::Novice, now);
        assert!(category_summary(&doc).is_empty());
    }

    #[test]
    fn total_minutes_sums_all_history() {
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();
        let doc = UserData::default_document(now);
        let doc = add_skill(&doc, "lang-rust", SkillLevel::Novice, now);
        let doc = record_level(&doc, "lang-rust", SkillLevel::Beginner, Some(25), now).unwrap();
        let doc = record_level(&doc, "lang-rust", SkillLevel::Competent, None, now).unwrap();
        assert_eq!(total_minutes(&doc), 25);
    }
}
