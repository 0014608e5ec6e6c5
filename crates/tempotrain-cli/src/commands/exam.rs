//! The `tempotrain exam` command.
//!
//! Timed assessment driven by the exam engine: the countdown runs on its own
//! task while answers are read from stdin.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use tempotrain_content::exam::{exam_catalog, exam_recommendations, is_level, LEVELS};
use tempotrain_core::engine::{ExamConfig, ExamEngine, ExamObserver};
use tempotrain_core::model::{Question, QuestionKind};
use tempotrain_core::report::AssessmentReport;
use tempotrain_core::scorer::score;
use tempotrain_core::session::{AssessmentSession, SubmitOutcome};

use super::{choice_letter, parse_answer};

/// Prints progress and remembers which question is under the cursor so the
/// input loop can parse answers against it.
struct ConsoleObserver {
    current: AtomicUsize,
}

impl ConsoleObserver {
    fn new() -> Self {
        Self {
            current: AtomicUsize::new(0),
        }
    }

    fn current_index(&self) -> usize {
        self.current.load(Ordering::Relaxed)
    }
}

impl ExamObserver for ConsoleObserver {
    fn on_question(&self, index: usize, total: usize, question: &Question, remaining_secs: u32) {
        self.current.store(index, Ordering::Relaxed);

        println!("\nQuestion {}/{} — {}s", index + 1, total, remaining_secs);
        if let Some(context) = &question.context {
            println!("Contexte : {context}");
        }
        println!("{}", question.prompt);
        for (i, choice) in question.choices.iter().enumerate() {
            println!("  {}. {}", choice_letter(i), choice);
        }
        match question.kind {
            QuestionKind::MultipleChoice => println!("Votre réponse (lettre, vide pour passer) :"),
            QuestionKind::OpenResponse => println!("Votre réponse (vide pour passer) :"),
        }
    }

    fn on_tick(&self, _index: usize, remaining_secs: u32) {
        if remaining_secs == 10 || remaining_secs == 5 {
            println!("⏱ {remaining_secs}s restantes");
        }
    }

    fn on_timeout(&self, index: usize) {
        println!("Temps écoulé pour la question {} !", index + 1);
    }

    fn on_completed(&self, _session: &AssessmentSession) {
        println!("\nExamen terminé !");
    }
}

pub async fn execute(level: String, seconds: u32, format: String) -> Result<()> {
    anyhow::ensure!(
        is_level(&level),
        "unknown level '{level}'; levels: {}",
        LEVELS.join(", ")
    );

    let catalog = Arc::new(exam_catalog());
    println!("Examen GTA — Niveau {level}");
    println!("{} questions · {seconds}s/question", catalog.len());

    let observer = Arc::new(ConsoleObserver::new());
    let engine = ExamEngine::start(
        Arc::clone(&catalog),
        ExamConfig {
            seconds_per_question: seconds,
        },
        Arc::clone(&observer) as Arc<dyn ExamObserver>,
    )?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut completed = false;

    while let Some(line) = lines.next_line().await? {
        let Some(question) = catalog.question(observer.current_index()) else {
            break;
        };

        let answer = match parse_answer(question, &line) {
            Ok(answer) => answer,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match engine.submit(answer).await {
            SubmitOutcome::Advanced { .. } => {}
            SubmitOutcome::Completed | SubmitOutcome::AlreadyCompleted => {
                completed = true;
                break;
            }
        }
    }

    let session = if completed {
        engine.finish().await?
    } else {
        // Input ended before the exam did; stop the countdown.
        engine.abandon().await?
    };

    if !session.is_complete() {
        println!("\nExamen interrompu.");
        return Ok(());
    }

    let summary = score(&session)?;
    let report = AssessmentReport::from_session(
        &session,
        format!("Examen GTA — Niveau {level}"),
        exam_recommendations(),
    )?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => {
            println!("\n{}", report.to_markdown());
            if summary.is_passing() {
                println!("🌟 Excellente performance ! Vous maîtrisez les fondamentaux.");
            } else {
                println!("💪 Bon effort ! Continuez à vous former.");
            }
        }
    }

    Ok(())
}
