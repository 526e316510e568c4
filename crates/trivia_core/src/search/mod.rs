//! Question text search.
//!
//! # Responsibility
//! - Match user search terms against question text.
//! - Keep matching rules independent from the record store.

pub mod substring;
