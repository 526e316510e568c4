//! Question domain model.
//!
//! # Responsibility
//! - Define the stored trivia question record and its creation draft.
//! - Validate draft input before it reaches the record store.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused after deletion.
//! - `question` and `answer` are stored exactly as submitted and are never
//!   blank.
//! - `difficulty` stays within `MIN_DIFFICULTY..=MAX_DIFFICULTY`.

use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned question identifier.
pub type QuestionId = i64;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    /// Category reference. Not guaranteed to resolve to a stored category.
    pub category: CategoryId,
    pub difficulty: u8,
}

/// Validated question content ready for insertion.
///
/// Only constructed through [`QuestionDraft::validate`] or [`NewQuestion::new`],
/// so every instance satisfies the model invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: u8,
}

impl NewQuestion {
    /// Builds validated question content from typed values.
    pub fn new(
        question: impl AsRef<str>,
        answer: impl AsRef<str>,
        category: CategoryId,
        difficulty: u8,
    ) -> Result<Self, QuestionValidationError> {
        let question = require_text(question.as_ref(), QuestionField::Question)?;
        let answer = require_text(answer.as_ref(), QuestionField::Answer)?;
        validate_difficulty(i64::from(difficulty))?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Attaches the store-assigned id.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Integer field that may arrive either as a JSON number or a numeric string.
///
/// Form-driven clients submit select values as strings (`"5"`), API clients
/// send numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Number(i64),
    Text(String),
}

impl LooseInt {
    /// Parses the value, returning `None` for non-numeric text.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<i64> for LooseInt {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Unvalidated create-question input as received from callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<LooseInt>,
    pub difficulty: Option<LooseInt>,
}

impl QuestionDraft {
    /// Checks that every required field is present and well-formed.
    ///
    /// Fields are checked in declaration order; the first failure is reported.
    pub fn validate(&self) -> Result<NewQuestion, QuestionValidationError> {
        let question = self
            .question
            .as_deref()
            .ok_or(QuestionValidationError::Missing(QuestionField::Question))?;
        let answer = self
            .answer
            .as_deref()
            .ok_or(QuestionValidationError::Missing(QuestionField::Answer))?;
        let category = parse_int_field(self.category.as_ref(), QuestionField::Category)?;
        let difficulty = parse_int_field(self.difficulty.as_ref(), QuestionField::Difficulty)?;
        let difficulty = validate_difficulty(difficulty)?;

        NewQuestion::new(question, answer, category, difficulty)
    }
}

/// Draft field names used in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField {
    Question,
    Answer,
    Category,
    Difficulty,
}

impl QuestionField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
            Self::Category => "category",
            Self::Difficulty => "difficulty",
        }
    }
}

/// Validation failure for question drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    /// Required field was absent.
    Missing(QuestionField),
    /// Text field was empty or whitespace only.
    Empty(QuestionField),
    /// Numeric field could not be parsed.
    NotANumber(QuestionField),
    DifficultyOutOfRange(i64),
}

impl Display for QuestionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "missing required field `{}`", field.as_str()),
            Self::Empty(field) => write!(f, "field `{}` must not be blank", field.as_str()),
            Self::NotANumber(field) => write!(f, "field `{}` must be an integer", field.as_str()),
            Self::DifficultyOutOfRange(value) => write!(
                f,
                "difficulty {value} is outside {MIN_DIFFICULTY}..={MAX_DIFFICULTY}"
            ),
        }
    }
}

impl Error for QuestionValidationError {}

fn require_text(value: &str, field: QuestionField) -> Result<String, QuestionValidationError> {
    if value.trim().is_empty() {
        return Err(QuestionValidationError::Empty(field));
    }
    Ok(value.to_string())
}

fn parse_int_field(
    value: Option<&LooseInt>,
    field: QuestionField,
) -> Result<i64, QuestionValidationError> {
    value
        .ok_or(QuestionValidationError::Missing(field))?
        .as_i64()
        .ok_or(QuestionValidationError::NotANumber(field))
}

pub(crate) fn validate_difficulty(value: i64) -> Result<u8, QuestionValidationError> {
    u8::try_from(value)
        .ok()
        .filter(|difficulty| (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(difficulty))
        .ok_or(QuestionValidationError::DifficultyOutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::{LooseInt, NewQuestion, QuestionDraft, QuestionField, QuestionValidationError};

    fn full_draft() -> QuestionDraft {
        QuestionDraft {
            question: Some("  What is the heaviest   organ? ".to_string()),
            answer: Some("The liver".to_string()),
            category: Some(LooseInt::Number(1)),
            difficulty: Some(LooseInt::Text("4".to_string())),
        }
    }

    #[test]
    fn validate_keeps_text_verbatim_and_parses_string_numbers() {
        let new_question = full_draft().validate().expect("draft should validate");
        assert_eq!(new_question.question(), "  What is the heaviest   organ? ");
        assert_eq!(new_question.category(), 1);
        assert_eq!(new_question.difficulty(), 4);
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut draft = full_draft();
        draft.answer = None;
        draft.difficulty = None;
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionValidationError::Missing(QuestionField::Answer)
        );
    }

    #[test]
    fn validate_rejects_blank_text() {
        let mut draft = full_draft();
        draft.question = Some(" \n\t ".to_string());
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionValidationError::Empty(QuestionField::Question)
        );
    }

    #[test]
    fn validate_rejects_non_numeric_category() {
        let mut draft = full_draft();
        draft.category = Some(LooseInt::Text("science".to_string()));
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionValidationError::NotANumber(QuestionField::Category)
        );
    }

    #[test]
    fn difficulty_bounds_are_enforced() {
        let mut draft = full_draft();
        draft.difficulty = Some(LooseInt::Number(9));
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionValidationError::DifficultyOutOfRange(9)
        );
        assert!(NewQuestion::new("q", "a", 1, 0).is_err());
        assert!(NewQuestion::new("q", "a", 1, 5).is_ok());
    }
}
