//! The `tempotrain list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use tempotrain_content::quizzes::{filter_quizzes, quiz_catalog, themes};

pub fn execute(search: Option<String>, theme: Option<String>) -> Result<()> {
    let quizzes = quiz_catalog();
    let filtered = filter_quizzes(&quizzes, search.as_deref(), theme.as_deref());

    if filtered.is_empty() {
        println!("Aucun quiz ne correspond aux filtres.");
        println!("Thématiques : {}", themes(&quizzes).join(", "));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Id",
        "Titre",
        "Thématique",
        "Niveau",
        "Questions",
        "Durée",
        "Difficulté",
    ]);

    for quiz in &filtered {
        table.add_row(vec![
            Cell::new(quiz.id),
            Cell::new(&quiz.title),
            Cell::new(&quiz.theme),
            Cell::new(&quiz.level),
            Cell::new(quiz.question_count),
            Cell::new(format!("{} min", quiz.minutes)),
            Cell::new(quiz.difficulty),
        ]);
    }

    println!("{table}");
    println!(
        "{} quiz — lancez `tempotrain take --quiz <id>`",
        filtered.len()
    );

    Ok(())
}
