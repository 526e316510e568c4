//! Case-insensitive substring matching over question text.
//!
//! # Invariants
//! - Only `Question::question` is inspected, never answer or category.
//! - Case folding is Unicode-aware (`str::to_lowercase`), so matching does not
//!   depend on the store's collation.
//! - An empty term matches every question.
//! - Input order is preserved.

use crate::model::question::Question;

/// Prepared search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Prepares `term` for matching. The term is not trimmed.
    pub fn new(term: impl Into<String>) -> Self {
        let raw = term.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns whether `text` contains this term, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        self.folded.is_empty() || text.to_lowercase().contains(&self.folded)
    }
}

/// Keeps questions whose text contains `term`, ignoring case.
pub fn filter_matching(questions: Vec<Question>, term: &SearchTerm) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|question| term.matches(&question.question))
        .collect()
}
