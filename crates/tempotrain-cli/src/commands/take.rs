//! The `tempotrain take` command.
//!
//! Untimed practice: each answer is confirmed, corrected, and explained
//! before moving on, like the original practice flow.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use tempotrain_content::quizzes::{find_quiz, practice_catalog, quiz_catalog};
use tempotrain_core::model::QuestionKind;
use tempotrain_core::parser;
use tempotrain_core::report::AssessmentReport;
use tempotrain_core::scorer::score;
use tempotrain_core::session::{Answer, AssessmentSession};

use super::{choice_letter, parse_answer};

const REVIEW_HINT: &str = "Nous vous conseillons de revoir le quiz \"CP fractionnement\" et de \
     consulter l'Agent CP pour approfondir vos connaissances.";

pub async fn execute(quiz: u32, catalog_path: Option<PathBuf>, format: String) -> Result<()> {
    let (catalog, title) = match catalog_path {
        Some(path) => {
            let catalog = parser::parse_catalog(&path)?;
            let title = catalog.title.clone();
            (catalog, title)
        }
        None => {
            let quizzes = quiz_catalog();
            let info = find_quiz(&quizzes, quiz).ok_or_else(|| {
                anyhow::anyhow!("unknown quiz id {quiz}; run `tempotrain list`")
            })?;
            (practice_catalog(), info.title.clone())
        }
    };

    for warning in parser::validate_catalog(&catalog) {
        tracing::warn!(
            question = warning.question_id.as_deref().unwrap_or("-"),
            "{}",
            warning.message
        );
    }

    let mut session = AssessmentSession::new(Arc::new(catalog))?;
    let total = session.catalog().len();
    println!("{title} — {total} questions\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    'questions: while let Some(question) = session.current_question().cloned() {
        println!("Question {}/{}", session.current_index() + 1, total);
        if let Some(context) = &question.context {
            println!("Contexte : {context}");
        }
        println!("{}", question.prompt);
        for (i, choice) in question.choices.iter().enumerate() {
            println!("  {}. {}", choice_letter(i), choice);
        }

        let answer = loop {
            match question.kind {
                QuestionKind::MultipleChoice => println!("Votre réponse (lettre, vide pour passer) :"),
                QuestionKind::OpenResponse => println!("Votre réponse (vide pour passer) :"),
            }
            let Some(line) = lines.next_line().await? else {
                println!("\nSession interrompue.");
                break 'questions;
            };
            match parse_answer(&question, &line) {
                Ok(answer) => break answer,
                Err(message) => println!("{message}"),
            }
        };

        if question.kind == QuestionKind::MultipleChoice {
            match (&answer, question.correct_choice) {
                (Answer::Choice(picked), Some(correct)) if *picked == correct => {
                    println!("✓ Bonne réponse !");
                }
                (Answer::Choice(_), Some(correct)) => {
                    println!(
                        "✗ Mauvaise réponse — la bonne réponse était {}. {}",
                        choice_letter(correct),
                        question.choices.get(correct).map(String::as_str).unwrap_or("")
                    );
                }
                _ => println!("Question passée."),
            }
        }
        if let Some(explanation) = &question.explanation {
            println!("Explication : {explanation}");
        }
        println!();

        session.submit_answer(answer);
    }

    if !session.is_complete() {
        return Ok(());
    }

    let summary = score(&session)?;
    let recommendations = if summary.mcq_correct < summary.mcq_total {
        vec![REVIEW_HINT.to_string()]
    } else {
        Vec::new()
    };
    let report = AssessmentReport::from_session(&session, title, recommendations)?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => {
            println!(
                "Vous avez obtenu {} bonne(s) réponse(s) sur {}\n",
                summary.mcq_correct, summary.mcq_total
            );
            println!("{}", report.to_markdown());
        }
    }

    Ok(())
}
