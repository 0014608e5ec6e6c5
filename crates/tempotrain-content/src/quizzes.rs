//! The built-in quiz catalog and its practice questions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tempotrain_core::model::{Catalog, Question, QuestionKind};

/// Quiz difficulty, displayed with its French label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Facile"),
            Difficulty::Medium => write!(f, "Moyen"),
            Difficulty::Hard => write!(f, "Difficile"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" | "facile" => Ok(Difficulty::Easy),
            "medium" | "moyen" => Ok(Difficulty::Medium),
            "hard" | "difficile" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// One entry in the quiz listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizInfo {
    pub id: u32,
    pub title: String,
    pub theme: String,
    pub level: String,
    pub question_count: u32,
    pub minutes: u32,
    pub difficulty: Difficulty,
}

fn quiz(
    id: u32,
    title: &str,
    theme: &str,
    level: &str,
    question_count: u32,
    minutes: u32,
    difficulty: Difficulty,
) -> QuizInfo {
    QuizInfo {
        id,
        title: title.into(),
        theme: theme.into(),
        level: level.into(),
        question_count,
        minutes,
        difficulty,
    }
}

/// The built-in quiz listing.
pub fn quiz_catalog() -> Vec<QuizInfo> {
    vec![
        quiz(1, "Bases Congés Payés", "Congés Payés", "Niveau 1", 10, 10, Difficulty::Easy),
        quiz(2, "CP fractionnement", "Congés Payés", "Niveau 2", 8, 12, Difficulty::Medium),
        quiz(3, "CP cas complexes multi-contrats", "Congés Payés", "Niveau 3", 6, 15, Difficulty::Hard),
        quiz(4, "RTT cadre vs non cadre", "RTT", "Niveau 1", 8, 8, Difficulty::Easy),
        quiz(5, "RTT modulation annuelle", "RTT", "Niveau 2", 10, 12, Difficulty::Medium),
        quiz(6, "Calcul prorata RTT", "RTT", "Niveau 3", 6, 10, Difficulty::Hard),
        quiz(7, "Transfert de gestion paie", "TransGP", "Niveau 1", 8, 10, Difficulty::Medium),
        quiz(8, "Règles légales astreinte", "Astreinte", "Niveau 1", 10, 10, Difficulty::Easy),
        quiz(9, "Types de rapports GTA", "Création de rapports", "Niveau 1", 8, 8, Difficulty::Easy),
    ]
}

/// Filter the listing by case-insensitive title search and exact theme.
pub fn filter_quizzes<'a>(
    quizzes: &'a [QuizInfo],
    search: Option<&str>,
    theme: Option<&str>,
) -> Vec<&'a QuizInfo> {
    let search = search.map(str::to_lowercase);
    quizzes
        .iter()
        .filter(|q| theme.is_none_or(|t| q.theme == t))
        .filter(|q| {
            search
                .as_deref()
                .is_none_or(|s| q.title.to_lowercase().contains(s))
        })
        .collect()
}

/// Distinct themes in first-appearance order.
pub fn themes(quizzes: &[QuizInfo]) -> Vec<&str> {
    let mut seen = Vec::new();
    for quiz in quizzes {
        if !seen.contains(&quiz.theme.as_str()) {
            seen.push(quiz.theme.as_str());
        }
    }
    seen
}

/// The practice question catalog used by every quiz.
pub fn practice_catalog() -> Catalog {
    Catalog {
        id: "cp-pratique".into(),
        title: "Questions de pratique Congés Payés".into(),
        description: "Questions d'entraînement avec explications".into(),
        questions: vec![
            Question {
                id: "cp-acquisition".into(),
                kind: QuestionKind::MultipleChoice,
                prompt: "Combien de jours ouvrables de CP un salarié acquiert-il par mois de travail effectif ?".into(),
                context: None,
                choices: vec![
                    "2 jours".into(),
                    "2,08 jours".into(),
                    "2,5 jours".into(),
                    "3 jours".into(),
                ],
                correct_choice: Some(2),
                explanation: Some(
                    "Un salarié acquiert 2,5 jours ouvrables de congés payés par mois de travail \
                     effectif, soit 30 jours ouvrables pour une année complète."
                        .into(),
                ),
            },
            Question {
                id: "cp-periode".into(),
                kind: QuestionKind::MultipleChoice,
                prompt: "Quelle est la période légale de prise des congés payés ?".into(),
                context: None,
                choices: vec![
                    "1er janvier au 31 décembre".into(),
                    "1er mai au 31 octobre".into(),
                    "1er juin au 30 septembre".into(),
                    "1er mai au 31 décembre".into(),
                ],
                correct_choice: Some(1),
                explanation: Some(
                    "La période légale de prise du congé principal est fixée du 1er mai au 31 \
                     octobre, sauf accord collectif différent."
                        .into(),
                ),
            },
            Question {
                id: "cp-fractionnement".into(),
                kind: QuestionKind::MultipleChoice,
                prompt: "Le fractionnement des CP ouvre droit à des jours supplémentaires à partir de combien de jours pris hors période ?".into(),
                context: None,
                choices: vec![
                    "3 jours".into(),
                    "5 jours".into(),
                    "6 jours".into(),
                    "10 jours".into(),
                ],
                correct_choice: Some(0),
                explanation: Some(
                    "Dès 3 jours de CP pris en dehors de la période légale (hors 5e semaine), le \
                     salarié peut bénéficier de jours de fractionnement."
                        .into(),
                ),
            },
        ],
    }
}

/// Look up a quiz entry by id.
pub fn find_quiz(quizzes: &[QuizInfo], id: u32) -> Option<&QuizInfo> {
    quizzes.iter().find(|q| q.id == id)
}
