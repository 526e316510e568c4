//! Record store abstraction and persistence implementation.
//!
//! # Responsibility
//! - Define the data access contract the catalog is built on.
//! - Isolate SQLite query details from catalog/use-case logic.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Repository APIs never cache rows across calls.

pub mod trivia_repo;
