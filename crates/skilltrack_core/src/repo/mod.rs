//! Persistence repositories.
//!
//! # Responsibility
//! - Keep raw storage access behind trait seams so the store layer stays
//!   medium-agnostic.

pub mod document_repo;
