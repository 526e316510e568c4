//! Core query/selection engine for the trivia service.
//! This crate owns pagination, search, category filtering and quiz selection
//! over an injected question/category record store.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{normalize_page_size, CatalogConfig, DEFAULT_PAGE_SIZE};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, CategoryId};
pub use model::question::{
    LooseInt, NewQuestion, Question, QuestionDraft, QuestionField, QuestionId,
    QuestionValidationError,
};
pub use repo::trivia_repo::{
    QuestionListQuery, RepoError, RepoResult, SqliteTriviaRepository, TriviaRepository,
};
pub use search::substring::SearchTerm;
pub use service::catalog_service::{
    CatalogError, CatalogResult, CategoryPage, CategoryQuestions, InputError, NotFoundReason,
    QuestionCatalog, QuestionListing, SearchResults,
};
pub use service::pagination::{paginate, Page, PaginationError};
pub use service::quiz::{
    QuizCategory, QuizCategorySelector, QuizOutcome, QuizRequest, QuizRequestError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
