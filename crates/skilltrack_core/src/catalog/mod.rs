//! Topic catalog: built-in library plus user-defined topic lookup.
//!
//! # Responsibility
//! - Resolve topic ids against the built-in library and custom topics.
//! - Search the merged catalog by name or category.
//!
//! # Invariants
//! - Pure lookups; no mutation, no storage access.
//! - Built-ins take precedence on id collision (which the `custom-` id
//!   namespace makes structurally impossible).
//! - Result order is stable: catalog order, then custom insertion order.

use crate::model::user_data::{Topic, TopicCategory};

mod library;

pub use library::TOPIC_LIBRARY;

/// Built-in categories in display order. `Custom` is excluded; it only
/// appears on user-defined topics.
pub const CATEGORIES: [TopicCategory; 8] = [
    TopicCategory::Languages,
    TopicCategory::Frontend,
    TopicCategory::Backend,
    TopicCategory::CloudInfra,
    TopicCategory::Data,
    TopicCategory::Architecture,
    TopicCategory::DevOps,
    TopicCategory::SoftSkills,
];

/// Looks up a topic by id, built-ins first, then custom topics.
pub fn resolve(topic_id: &str, custom_topics: &[Topic]) -> Option<Topic> {
    TOPIC_LIBRARY
        .iter()
        .find(|topic| topic.id == topic_id)
        .or_else(|| custom_topics.iter().find(|topic| topic.id == topic_id))
        .cloned()
}

/// Case-insensitive substring search over topic name and category label,
/// across built-ins followed by custom topics.
///
/// An empty query matches everything.
pub fn search(query: &str, custom_topics: &[Topic]) -> Vec<Topic> {
    let needle = query.to_lowercase();
    TOPIC_LIBRARY
        .iter()
        .chain(custom_topics.iter())
        .filter(|topic| {
            topic.name.to_lowercase().contains(&needle)
                || topic.category.label().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Built-in topics for one category, in catalog order.
pub fn topics_by_category(category: TopicCategory) -> Vec<Topic> {
    TOPIC_LIBRARY
        .iter()
        .filter(|topic| topic.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{resolve, search, topics_by_category, CATEGORIES, TOPIC_LIBRARY};
    use crate::model::user_data::{Topic, TopicCategory};
    use std::collections::HashSet;

    fn custom(id: &str, name: &str) -> Topic {
        Topic {
            id: id.to_string(),
            name: name.to_string(),
            category: TopicCategory::Custom,
            is_custom: true,
            icon: None,
        }
    }

    #[test]
    fn library_ids_are_unique_and_never_custom() {
        let mut seen = HashSet::new();
        for topic in TOPIC_LIBRARY.iter() {
            assert!(seen.insert(topic.id.clone()), "duplicate id {}", topic.id);
            assert!(!topic.is_custom);
            assert!(!topic.id.starts_with("custom-"));
        }
        assert_eq!(TOPIC_LIBRARY.len(), 67);
    }

    #[test]
    fn every_library_category_is_listed() {
        for topic in TOPIC_LIBRARY.iter() {
            assert!(CATEGORIES.contains(&topic.category));
        }
    }

    #[test]
    fn resolve_finds_builtins_and_customs() {
        assert_eq!(resolve("lang-rust", &[]).unwrap().name, "Rust");

        let customs = vec![custom("custom-1", "Embedded Rust")];
        assert_eq!(resolve("custom-1", &customs).unwrap().name, "Embedded Rust");
        assert!(resolve("custom-2", &customs).is_none());
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let hits = search("rust", &[]);
        assert!(hits.iter().any(|t| t.id == "lang-rust"));

        let hits = search("RUST", &[]);
        assert!(hits.iter().any(|t| t.id == "lang-rust"));
    }

    #[test]
    fn search_matches_category_label() {
        let hits = search("soft skills", &[]);
        assert_eq!(hits.len(), 8);
        assert!(hits.iter().all(|t| t.category == TopicCategory::SoftSkills));
    }

    #[test]
    fn search_lists_builtins_before_customs_in_stable_order() {
        let customs = vec![
            custom("custom-a", "Rust Macros"),
            custom("custom-b", "Rusty Linker"),
        ];
        let hits = search("rust", &customs);
        let ids: Vec<&str> = hits.iter().map(|t| t.id.as_str()).collect();
        let builtin_pos = ids.iter().position(|id| *id == "lang-rust").unwrap();
        let custom_a_pos = ids.iter().position(|id| *id == "custom-a").unwrap();
        let custom_b_pos = ids.iter().position(|id| *id == "custom-b").unwrap();
        assert!(builtin_pos < custom_a_pos);
        assert!(custom_a_pos < custom_b_pos);
    }

    #[test]
    fn empty_query_returns_the_whole_merged_catalog() {
        let customs = vec![custom("custom-a", "Anything")];
        let hits = search("", &customs);
        assert_eq!(hits.len(), TOPIC_LIBRARY.len() + 1);
    }

    #[test]
    fn topics_by_category_preserves_catalog_order() {
        let languages = topics_by_category(TopicCategory::Languages);
        assert_eq!(languages.len(), 10);
        assert_eq!(languages[0].id, "lang-typescript");
        assert_eq!(languages[9].id, "lang-ruby");
    }
}
