//! Quiz round selection.
//!
//! # Responsibility
//! - Parse quiz round requests (category selector + previously seen ids).
//! - Pick one unseen question uniformly at random from a candidate pool.
//!
//! # Invariants
//! - A selected question is never in the exclusion set.
//! - An empty candidate pool is `QuizOutcome::Exhausted`, not an error.
//! - Selection keeps no state between calls; callers own the exclusion set.

use crate::model::category::CategoryId;
use crate::model::question::{LooseInt, Question, QuestionId};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire id meaning "every category".
pub const ALL_CATEGORIES_ID: CategoryId = 0;

/// Category restriction for a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizCategory {
    All,
    Category(CategoryId),
}

impl QuizCategory {
    /// Maps a wire id to a selector; `0` means all categories.
    pub fn from_id(id: CategoryId) -> Self {
        if id == ALL_CATEGORIES_ID {
            Self::All
        } else {
            Self::Category(id)
        }
    }

    pub fn category_id(self) -> Option<CategoryId> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(id),
        }
    }
}

/// Result of one quiz draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Next(Question),
    /// Every candidate has already been asked.
    Exhausted,
}

impl QuizOutcome {
    pub fn into_question(self) -> Option<Question> {
        match self {
            Self::Next(question) => Some(question),
            Self::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Category selector as sent by clients: `{"id": 3, "type": "History"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategorySelector {
    pub id: LooseInt,
    /// Display name echoed by clients; ignored for selection.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Quiz round request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: Option<QuizCategorySelector>,
}

impl QuizRequest {
    /// Validates the request into a selector and exclusion set.
    pub fn parse(&self) -> Result<(QuizCategory, HashSet<QuestionId>), QuizRequestError> {
        let selector = self
            .quiz_category
            .as_ref()
            .ok_or(QuizRequestError::MissingCategory)?;
        let id = selector
            .id
            .as_i64()
            .ok_or_else(|| QuizRequestError::InvalidCategoryId(selector.id.clone()))?;

        let excluded = self.previous_questions.iter().copied().collect();
        Ok((QuizCategory::from_id(id), excluded))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizRequestError {
    MissingCategory,
    InvalidCategoryId(LooseInt),
}

impl Display for QuizRequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "quiz request is missing `quiz_category`"),
            Self::InvalidCategoryId(value) => {
                write!(f, "quiz category id must be an integer, got {value:?}")
            }
        }
    }
}

impl Error for QuizRequestError {}

/// Draws one question from `pool` that is not in `excluded`.
///
/// Every remaining candidate is equally likely.
pub fn draw_question<R>(
    pool: Vec<Question>,
    excluded: &HashSet<QuestionId>,
    rng: &mut R,
) -> QuizOutcome
where
    R: Rng + ?Sized,
{
    let candidates: Vec<Question> = pool
        .into_iter()
        .filter(|question| !excluded.contains(&question.id))
        .collect();

    match candidates.choose(rng) {
        Some(question) => QuizOutcome::Next(question.clone()),
        None => QuizOutcome::Exhausted,
    }
}
