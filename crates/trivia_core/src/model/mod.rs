//! Trivia domain model.
//!
//! # Responsibility
//! - Define canonical question/category records used by core logic.
//! - Own draft validation for question creation.
//!
//! # Invariants
//! - Every stored record is identified by a store-assigned integer id.
//! - Questions reference categories by id only; the reference may dangle.

pub mod category;
pub mod question;
