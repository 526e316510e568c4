//! Trivia record store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/read/delete over questions and read access to categories.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every list API returns rows ascending by `id`.
//! - Insert paths only accept validated `NewQuestion` values.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::category::{Category, CategoryId};
use crate::model::question::{validate_difficulty, NewQuestion, Question, QuestionId};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const QUESTION_SELECT_SQL: &str = "SELECT
    id,
    question,
    answer,
    category,
    difficulty
FROM questions";

const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("categories", &["id", "type"]),
    (
        "questions",
        &["id", "question", "answer", "category", "difficulty"],
    ),
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Record store error for trivia persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Target question does not exist.
    NotFound(QuestionId),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted row cannot be converted to a valid model.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "question not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "trivia repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "trivia repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "trivia repository requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted trivia data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Predicate options for listing questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionListQuery {
    /// Exact category match. `None` lists every question.
    pub category: Option<CategoryId>,
}

impl QuestionListQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_category(category: CategoryId) -> Self {
        Self {
            category: Some(category),
        }
    }
}

/// Record store interface consumed by the question catalog.
pub trait TriviaRepository {
    /// Lists questions matching `query`, ascending by id.
    fn list_questions(&self, query: &QuestionListQuery) -> RepoResult<Vec<Question>>;
    fn get_question(&self, id: QuestionId) -> RepoResult<Option<Question>>;
    /// Inserts one question and returns the store-assigned id.
    fn insert_question(&self, question: &NewQuestion) -> RepoResult<QuestionId>;
    /// Hard-deletes one question. Returns `NotFound` when nothing was removed.
    fn delete_question(&self, id: QuestionId) -> RepoResult<()>;
    /// Lists all categories, ascending by id.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
}

/// SQLite-backed trivia repository.
pub struct SqliteTriviaRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTriviaRepository<'conn> {
    /// Creates a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` is not latest.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` on schema drift.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TriviaRepository for SqliteTriviaRepository<'_> {
    fn list_questions(&self, query: &QuestionListQuery) -> RepoResult<Vec<Question>> {
        let mut sql = format!("{QUESTION_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(category) = query.category {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Integer(category));
        }

        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut questions = Vec::new();
        while let Some(row) = rows.next()? {
            questions.push(parse_question_row(row)?);
        }

        Ok(questions)
    }

    fn get_question(&self, id: QuestionId) -> RepoResult<Option<Question>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{QUESTION_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_question_row(row)?));
        }

        Ok(None)
    }

    fn insert_question(&self, question: &NewQuestion) -> RepoResult<QuestionId> {
        self.conn.execute(
            "INSERT INTO questions (
                question,
                answer,
                category,
                difficulty
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                question.question(),
                question.answer(),
                question.category(),
                i64::from(question.difficulty()),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn delete_question(&self, id: QuestionId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }
        Ok(categories)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1;",
                [id],
                parse_category_row,
            )
            .optional()?;
        Ok(category)
    }
}

fn parse_question_row(row: &Row<'_>) -> RepoResult<Question> {
    let id: QuestionId = row.get("id")?;
    let raw_difficulty: i64 = row.get("difficulty")?;
    let difficulty = validate_difficulty(raw_difficulty).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid difficulty `{raw_difficulty}` in questions.difficulty for id {id}"
        ))
    })?;

    Ok(Question {
        id,
        question: row.get("question")?,
        answer: row.get("answer")?,
        category: row.get("category")?,
        difficulty,
    })
}

fn parse_category_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get("id")?,
        name: row.get("type")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for &(table, columns) in REQUIRED_COLUMNS {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
        for &column in columns {
            if !table_has_column(conn, table, column)? {
                return Err(RepoError::MissingRequiredColumn { table, column });
            }
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
