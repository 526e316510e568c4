//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate record store calls into catalog-level APIs.
//! - Keep request/transport layers decoupled from storage details.

pub mod catalog_service;
pub mod pagination;
pub mod quiz;
