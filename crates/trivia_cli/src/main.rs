//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `trivia_core` linkage and database bootstrap from a shell.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `trivia_cli [DB_PATH] [LOG_DIR]`. Without `DB_PATH` an in-memory
//! database is used; `LOG_DIR` must be absolute when given.

use log::info;
use std::process::ExitCode;
use trivia_core::db::{open_db, open_db_in_memory};
use trivia_core::{default_log_level, init_logging, QuestionCatalog, SqliteTriviaRepository};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("trivia_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let db_path = args.next();
    if let Some(log_dir) = args.next() {
        init_logging(default_log_level(), &log_dir)?;
    }

    println!("trivia_core ping={}", trivia_core::ping());
    println!("trivia_core version={}", trivia_core::core_version());

    let conn = match db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let catalog = QuestionCatalog::new(SqliteTriviaRepository::try_new(&conn)?);

    let categories = catalog.list_categories()?;
    let listing = catalog.list_questions(1)?;
    println!("categories={}", categories.len());
    println!("questions={}", listing.total_questions());
    info!(
        "event=cli_probe module=cli status=ok categories={} questions={}",
        categories.len(),
        listing.total_questions()
    );

    Ok(())
}
