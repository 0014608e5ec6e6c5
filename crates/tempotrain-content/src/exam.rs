//! The built-in timed exam.

use tempotrain_core::model::{Catalog, Question, QuestionKind};

/// Exam levels, in increasing order of seniority.
pub const LEVELS: [&str; 4] = ["Junior", "Intermédiaire", "Senior", "Expert GTA"];

/// Countdown per exam question, in seconds.
pub const SECONDS_PER_QUESTION: u32 = 30;

/// Returns `true` if `name` is one of the exam levels (case-insensitive).
pub fn is_level(name: &str) -> bool {
    LEVELS.iter().any(|l| l.eq_ignore_ascii_case(name))
}

/// The exam question catalog.
pub fn exam_catalog() -> Catalog {
    Catalog {
        id: "examen-gta".into(),
        title: "Examen GTA".into(),
        description: "Examen chronométré, 30 secondes par question".into(),
        questions: vec![
            Question {
                id: "cdd-conges".into(),
                kind: QuestionKind::MultipleChoice,
                prompt: "Un salarié en CDD de 6 mois a-t-il droit aux congés payés dès son premier jour de travail ?".into(),
                context: None,
                choices: vec![
                    "Oui, dès le premier jour".into(),
                    "Non, après 1 mois".into(),
                    "Non, après 3 mois".into(),
                    "Seulement en CDI".into(),
                ],
                correct_choice: Some(0),
                explanation: None,
            },
            Question {
                id: "rtt-negatif".into(),
                kind: QuestionKind::OpenResponse,
                prompt: "Un client signale que le compteur RTT de son salarié affiche un solde négatif. Rédigez la réponse que vous lui enverriez.".into(),
                context: Some("Ticket client #4521 - Entreprise ACME SAS - Convention Syntec".into()),
                choices: vec![],
                correct_choice: None,
                explanation: None,
            },
            Question {
                id: "transgp-sync".into(),
                kind: QuestionKind::MultipleChoice,
                prompt: "Lors d'un TransGP, quel élément doit être synchronisé en priorité ?".into(),
                context: None,
                choices: vec![
                    "Les fiches de paie".into(),
                    "Les compteurs de temps (CP, RTT, CET)".into(),
                    "L'organigramme".into(),
                    "Les notes de frais".into(),
                ],
                correct_choice: Some(1),
                explanation: None,
            },
            Question {
                id: "hs-parametrage".into(),
                kind: QuestionKind::OpenResponse,
                prompt: "Expliquez la procédure de paramétrage d'un nouveau compteur d'heures supplémentaires dans l'outil GTA.".into(),
                context: Some("Contexte : Mise en place d'un accord d'entreprise sur les HS".into()),
                choices: vec![],
                correct_choice: None,
                explanation: None,
            },
            Question {
                id: "astreinte-duree".into(),
                kind: QuestionKind::MultipleChoice,
                prompt: "Quelle est la durée maximale légale d'une période d'astreinte hebdomadaire ?".into(),
                context: None,
                choices: vec![
                    "24 heures".into(),
                    "48 heures".into(),
                    "Pas de limite légale spécifique".into(),
                    "35 heures".into(),
                ],
                correct_choice: Some(2),
                explanation: None,
            },
        ],
    }
}

/// Follow-up suggestions shown on the exam result screen.
pub fn exam_recommendations() -> Vec<String> {
    vec![
        "Revoir le quiz \"TransGP\" pour renforcer vos connaissances".into(),
        "Consulter l'Agent Paramétrage GTA pour les compteurs".into(),
        "Pratiquer la rédaction de réponses client avec l'Agent Support".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempotrain_core::parser::validate_catalog;

    #[test]
    fn exam_has_five_questions() {
        let catalog = exam_catalog();
        assert_eq!(catalog.len(), 5);
        let mcq_corrects: Vec<usize> = catalog
            .questions
            .iter()
            .filter_map(|q| q.correct_choice)
            .collect();
        assert_eq!(mcq_corrects, vec![0, 1, 2]);
    }

    #[test]
    fn exam_catalog_is_valid() {
        assert!(validate_catalog(&exam_catalog()).is_empty());
    }

    #[test]
    fn open_questions_carry_context() {
        let catalog = exam_catalog();
        assert!(catalog
            .questions
            .iter()
            .filter(|q| q.kind == QuestionKind::OpenResponse)
            .all(|q| q.context.is_some()));
    }

    #[test]
    fn level_names_match_loosely() {
        assert!(is_level("Junior"));
        assert!(is_level("junior"));
        assert!(is_level("EXPERT GTA"));
        assert!(!is_level("Stagiaire"));
    }
}
