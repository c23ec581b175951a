//! Domain model for the skill tracker.
//!
//! # Responsibility
//! - Define the canonical record shapes persisted in the user document.
//! - Keep serde attributes aligned with the persisted/export wire format.
//!
//! # Invariants
//! - `SkillLevel` values are always within 1..=5.
//! - `UserData` is the single root aggregate; every persisted byte is
//!   reachable from it.

pub mod user_data;
