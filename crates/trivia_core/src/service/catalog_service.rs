//! Question catalog use-case service.
//!
//! # Responsibility
//! - Provide list/search/filter/create/delete/quiz entry points for callers.
//! - Apply pagination and "not found" policy uniformly across listings.
//! - Delegate persistence to an injected `TriviaRepository`.
//!
//! # Invariants
//! - Every call re-reads the store; nothing is cached between calls.
//! - Listings are ascending by question id.
//! - Only an out-of-range page over a non-empty result is `NotFound`; search
//!   and the terminal category view additionally treat zero matches as
//!   `NotFound`.
//! - Quiz exhaustion is `QuizOutcome::Exhausted`, never an error.

use crate::config::CatalogConfig;
use crate::model::category::{Category, CategoryId};
use crate::model::question::{Question, QuestionDraft, QuestionId, QuestionValidationError};
use crate::repo::trivia_repo::{QuestionListQuery, RepoError, TriviaRepository};
use crate::search::substring::{filter_matching, SearchTerm};
use crate::service::pagination::{paginate, Page, PaginationError};
use crate::service::quiz::{draw_question, QuizCategory, QuizOutcome, QuizRequest, QuizRequestError};
use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// What was looked for when a `NotFound` is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    Question(QuestionId),
    PageOutOfRange { page: u32, total_items: usize },
    NoSearchResults { term: String },
    EmptyCategory(CategoryId),
}

/// Rejected caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Question(QuestionValidationError),
    Quiz(QuizRequestError),
    Page(PaginationError),
}

/// Catalog error kinds surfaced to the request layer.
#[derive(Debug)]
pub enum CatalogError {
    NotFound(NotFoundReason),
    InvalidInput(InputError),
    /// Record store failure unrelated to caller input.
    Store(RepoError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(NotFoundReason::Question(id)) => write!(f, "question not found: {id}"),
            Self::NotFound(NotFoundReason::PageOutOfRange { page, total_items }) => {
                write!(f, "page {page} not found: only {total_items} items")
            }
            Self::NotFound(NotFoundReason::NoSearchResults { term }) => {
                write!(f, "no questions match `{term}`")
            }
            Self::NotFound(NotFoundReason::EmptyCategory(id)) => {
                write!(f, "no questions in category {id}")
            }
            Self::InvalidInput(InputError::Question(err)) => write!(f, "invalid question: {err}"),
            Self::InvalidInput(InputError::Quiz(err)) => write!(f, "invalid quiz request: {err}"),
            Self::InvalidInput(InputError::Page(err)) => write!(f, "invalid page request: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(InputError::Question(err)) => Some(err),
            Self::InvalidInput(InputError::Quiz(err)) => Some(err),
            Self::InvalidInput(InputError::Page(err)) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(NotFoundReason::Question(id)),
            other => Self::Store(other),
        }
    }
}

impl From<PaginationError> for CatalogError {
    fn from(value: PaginationError) -> Self {
        match value {
            PaginationError::OutOfRange { page, total_items } => {
                Self::NotFound(NotFoundReason::PageOutOfRange { page, total_items })
            }
            other => Self::InvalidInput(InputError::Page(other)),
        }
    }
}

impl From<QuestionValidationError> for CatalogError {
    fn from(value: QuestionValidationError) -> Self {
        Self::InvalidInput(InputError::Question(value))
    }
}

impl From<QuizRequestError> for CatalogError {
    fn from(value: QuizRequestError) -> Self {
        Self::InvalidInput(InputError::Quiz(value))
    }
}

/// Paginated question listing with display context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionListing {
    pub questions: Page<Question>,
    pub categories: Vec<Category>,
}

impl QuestionListing {
    pub fn total_questions(&self) -> usize {
        self.questions.total_items
    }
}

/// Paginated search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub term: String,
    /// `total_items` is the number of matches before pagination.
    pub questions: Page<Question>,
}

/// Unpaginated category filter result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryQuestions {
    pub category_id: CategoryId,
    /// Resolved category record; `None` when the id has no stored category.
    pub category: Option<Category>,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl CategoryQuestions {
    /// Treats an empty result as `NotFound`.
    pub fn require_any(self) -> CatalogResult<Self> {
        if self.questions.is_empty() {
            return Err(CatalogError::NotFound(NotFoundReason::EmptyCategory(
                self.category_id,
            )));
        }
        Ok(self)
    }
}

/// Paginated category view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPage {
    pub category_id: CategoryId,
    pub category: Option<Category>,
    pub questions: Page<Question>,
}

/// Query/selection engine over an injected record store.
pub struct QuestionCatalog<R: TriviaRepository> {
    repo: R,
    config: CatalogConfig,
}

impl<R: TriviaRepository> QuestionCatalog<R> {
    /// Creates a catalog with default configuration.
    pub fn new(repo: R) -> Self {
        Self::with_config(repo, CatalogConfig::default())
    }

    /// Creates a catalog; `config` is normalized first.
    pub fn with_config(repo: R, config: CatalogConfig) -> Self {
        Self {
            repo,
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> CatalogConfig {
        self.config
    }

    /// Slices an id-ordered collection using the configured page size.
    pub fn paginate<T>(&self, items: Vec<T>, page: u32) -> CatalogResult<Page<T>> {
        paginate(items, page, self.config.page_size).map_err(|err| {
            debug!("event=paginate module=catalog status=rejected page={page} reason={err}");
            CatalogError::from(err)
        })
    }

    /// Lists all categories ascending by id.
    pub fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.repo.list_categories()?)
    }

    /// Lists one page of all questions plus every category.
    ///
    /// An empty store yields an empty first page.
    pub fn list_questions(&self, page: u32) -> CatalogResult<QuestionListing> {
        let all = self.repo.list_questions(&QuestionListQuery::all())?;
        let questions = self.paginate(all, page)?;
        let categories = self.repo.list_categories()?;
        Ok(QuestionListing {
            questions,
            categories,
        })
    }

    pub fn get_question(&self, id: QuestionId) -> CatalogResult<Question> {
        self.repo
            .get_question(id)?
            .ok_or(CatalogError::NotFound(NotFoundReason::Question(id)))
    }

    /// Validates and stores a new question, returning the stored record.
    ///
    /// The category reference is not checked against stored categories.
    pub fn create_question(&self, draft: &QuestionDraft) -> CatalogResult<Question> {
        let new_question = draft.validate().map_err(|err| {
            warn!("event=question_create module=catalog status=rejected reason={err}");
            CatalogError::from(err)
        })?;
        let id = self.repo.insert_question(&new_question)?;
        info!(
            "event=question_create module=catalog status=ok question_id={id} category={}",
            new_question.category()
        );
        Ok(new_question.into_question(id))
    }

    /// Deletes a question by id and returns the deleted id.
    pub fn delete_question(&self, id: QuestionId) -> CatalogResult<QuestionId> {
        self.repo.delete_question(id)?;
        info!("event=question_delete module=catalog status=ok question_id={id}");
        Ok(id)
    }

    /// Returns every question whose text contains `term`, ignoring case.
    ///
    /// An empty term matches all questions. Zero matches is `NotFound`.
    pub fn search(&self, term: &str) -> CatalogResult<Vec<Question>> {
        let term = SearchTerm::new(term);
        let all = self.repo.list_questions(&QuestionListQuery::all())?;
        let matches = filter_matching(all, &term);
        debug!(
            "event=search module=catalog status=ok term_chars={} matches={}",
            term.as_str().chars().count(),
            matches.len()
        );

        if matches.is_empty() {
            return Err(CatalogError::NotFound(NotFoundReason::NoSearchResults {
                term: term.as_str().to_string(),
            }));
        }
        Ok(matches)
    }

    /// Searches and returns one page of the matches.
    pub fn search_page(&self, term: &str, page: u32) -> CatalogResult<SearchResults> {
        let matches = self.search(term)?;
        let questions = self.paginate(matches, page)?;
        Ok(SearchResults {
            term: term.to_string(),
            questions,
        })
    }

    /// Returns all questions in `category_id`, ascending by id.
    ///
    /// Unknown ids yield an empty result rather than an error.
    pub fn filter_by_category(&self, category_id: CategoryId) -> CatalogResult<CategoryQuestions> {
        let questions = self
            .repo
            .list_questions(&QuestionListQuery::in_category(category_id))?;
        let category = self.repo.get_category(category_id)?;
        Ok(CategoryQuestions {
            category_id,
            category,
            total_questions: questions.len(),
            questions,
        })
    }

    /// Returns one page of a category; zero matches is `NotFound`.
    pub fn questions_in_category(
        &self,
        category_id: CategoryId,
        page: u32,
    ) -> CatalogResult<CategoryPage> {
        let filtered = self.filter_by_category(category_id)?.require_any()?;
        let questions = self.paginate(filtered.questions, page)?;
        Ok(CategoryPage {
            category_id,
            category: filtered.category,
            questions,
        })
    }

    /// Draws the next quiz question using the thread-local RNG.
    pub fn next_quiz_question(
        &self,
        category: QuizCategory,
        excluded: &HashSet<QuestionId>,
    ) -> CatalogResult<QuizOutcome> {
        self.next_quiz_question_with_rng(category, excluded, &mut rand::thread_rng())
    }

    /// Draws one question from `category` that is not in `excluded`.
    ///
    /// Returns `QuizOutcome::Exhausted` when no candidate remains.
    pub fn next_quiz_question_with_rng<G>(
        &self,
        category: QuizCategory,
        excluded: &HashSet<QuestionId>,
        rng: &mut G,
    ) -> CatalogResult<QuizOutcome>
    where
        G: Rng + ?Sized,
    {
        let query = QuestionListQuery {
            category: category.category_id(),
        };
        let pool = self.repo.list_questions(&query)?;
        let pool_size = pool.len();
        let outcome = draw_question(pool, excluded, rng);

        match &outcome {
            QuizOutcome::Next(question) => debug!(
                "event=quiz_next module=catalog status=ok category={category:?} pool={pool_size} excluded={} question_id={}",
                excluded.len(),
                question.id
            ),
            QuizOutcome::Exhausted => debug!(
                "event=quiz_next module=catalog status=exhausted category={category:?} pool={pool_size} excluded={}",
                excluded.len()
            ),
        }

        Ok(outcome)
    }

    /// Parses a quiz request body and draws the next question for it.
    pub fn next_quiz_question_for_request<G>(
        &self,
        request: &QuizRequest,
        rng: &mut G,
    ) -> CatalogResult<QuizOutcome>
    where
        G: Rng + ?Sized,
    {
        let (category, excluded) = request.parse()?;
        self.next_quiz_question_with_rng(category, &excluded, rng)
    }
}
