//! Export reminder policy.
//!
//! # Responsibility
//! - Decide whether the user should be nudged to export a backup.
//!
//! # Invariants
//! - Pure function of the document and the provided time; no side
//!   effects, no wall-clock reads.

use crate::model::user_data::UserData;
use chrono::{DateTime, Utc};

/// Whether the user should be reminded to export their data.
///
/// A user who has never exported is reminded only once they track
/// something. Otherwise the reminder fires when the whole-day gap since
/// the last export reaches `settings.export_reminder_days`.
pub fn should_remind(doc: &UserData, now: DateTime<Utc>) -> bool {
    match doc.last_exported {
        None => !doc.skills.is_empty(),
        Some(last_exported) => {
            let elapsed_days = (now - last_exported).num_days();
            elapsed_days >= i64::from(doc.settings.export_reminder_days)
        }
    }
}
