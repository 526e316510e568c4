use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rusqlite::Connection;
use std::collections::{HashMap, HashSet};
use trivia_core::db::open_db_in_memory;
use trivia_core::{
    CatalogError, InputError, NewQuestion, QuestionCatalog, QuizCategory, QuizOutcome,
    QuizRequest, QuizRequestError, SqliteTriviaRepository, TriviaRepository,
};

/// Seeds ids 1-4 in category 1, ids 5-9 in category 5 and ids 10-11 in
/// category 2.
fn seeded(conn: &Connection) -> QuestionCatalog<SqliteTriviaRepository<'_>> {
    let repo =
        SqliteTriviaRepository::try_new(conn).expect("migrated connection should be accepted");
    for (category, count) in [(1, 4), (5, 5), (2, 2)] {
        for n in 0..count {
            let question =
                NewQuestion::new(format!("Category {category} question {n}"), "answer", category, 1)
                    .expect("fixture question should validate");
            repo.insert_question(&question)
                .expect("fixture question should insert");
        }
    }
    QuestionCatalog::new(repo)
}

#[test]
fn draw_skips_excluded_questions_within_category() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let catalog = seeded(&conn);
    let excluded = HashSet::from([7, 8]);
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen: HashMap<i64, u32> = HashMap::new();

    for _ in 0..600 {
        let question = catalog
            .next_quiz_question_with_rng(QuizCategory::Category(5), &excluded, &mut rng)
            .expect("draw should read the store")
            .into_question()
            .expect("category 5 still has candidates");
        assert_eq!(question.category, 5);
        *seen.entry(question.id).or_default() += 1;
    }

    let ids: HashSet<i64> = seen.keys().copied().collect();
    assert_eq!(ids, HashSet::from([5, 6, 9]));
    assert!(seen.values().all(|&count| count > 100));
}

#[test]
fn fully_excluded_category_is_exhausted() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let catalog = seeded(&conn);
    let excluded = HashSet::from([5, 6, 7, 8, 9]);

    let outcome = catalog
        .next_quiz_question_with_rng(QuizCategory::Category(5), &excluded, &mut StepRng::new(0, 0))
        .expect("draw should read the store");
    assert_eq!(outcome, QuizOutcome::Exhausted);
}

#[test]
fn unknown_category_is_exhausted_not_an_error() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let catalog = seeded(&conn);

    let outcome = catalog
        .next_quiz_question(QuizCategory::Category(250), &HashSet::new())
        .expect("draw should read the store");
    assert!(outcome.is_exhausted());
}

#[test]
fn fixed_source_makes_draws_deterministic() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let catalog = seeded(&conn);
    let excluded = HashSet::from([5]);

    let outcome = catalog
        .next_quiz_question_with_rng(QuizCategory::Category(5), &excluded, &mut StepRng::new(0, 0))
        .expect("draw should read the store");
    assert_eq!(outcome.into_question().map(|q| q.id), Some(6));
}

#[test]
fn session_asks_every_question_once_then_exhausts() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let catalog = seeded(&conn);

    for (category, pool) in [
        (QuizCategory::Category(5), 5),
        (QuizCategory::Category(1), 4),
        (QuizCategory::All, 11),
    ] {
        let mut rng = StdRng::seed_from_u64(11);
        let mut asked = HashSet::new();
        let mut draws = 0;
        loop {
            match catalog
                .next_quiz_question_with_rng(category, &asked, &mut rng)
                .expect("draw should read the store")
            {
                QuizOutcome::Next(question) => {
                    assert!(asked.insert(question.id), "question {} repeated", question.id);
                    draws += 1;
                }
                QuizOutcome::Exhausted => break,
            }
        }
        assert_eq!(draws, pool, "category {category:?}");
    }
}

#[test]
fn all_mode_draws_across_categories() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let catalog = seeded(&conn);
    let mut rng = StdRng::seed_from_u64(3);
    let mut categories = HashSet::new();

    for _ in 0..200 {
        let question = catalog
            .next_quiz_question_with_rng(QuizCategory::All, &HashSet::new(), &mut rng)
            .expect("draw should read the store")
            .into_question()
            .expect("nothing is excluded");
        categories.insert(question.category);
    }

    assert_eq!(categories, HashSet::from([1, 2, 5]));
}

#[test]
fn request_body_drives_the_draw() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let catalog = seeded(&conn);

    let request: QuizRequest = serde_json::from_str(
        r#"{"previous_questions": [5, 6, 7, 8], "quiz_category": {"type": "Entertainment", "id": "5"}}"#,
    )
    .expect("request body should parse");
    let outcome = catalog
        .next_quiz_question_for_request(&request, &mut StdRng::seed_from_u64(5))
        .expect("request should be valid");
    assert_eq!(outcome.into_question().map(|q| q.id), Some(9));
}

#[test]
fn request_without_category_is_invalid_input() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let catalog = seeded(&conn);

    let request: QuizRequest = serde_json::from_str(r#"{"previous_questions": []}"#)
        .expect("request body should parse");
    let err = catalog
        .next_quiz_question_for_request(&request, &mut StdRng::seed_from_u64(5))
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidInput(InputError::Quiz(QuizRequestError::MissingCategory))
    ));
}
