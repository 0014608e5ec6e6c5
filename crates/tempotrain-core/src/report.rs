//! Result report for a completed assessment.
//!
//! The report is an in-memory summary handed to a display collaborator (the
//! CLI renders it as markdown or JSON on stdout). Sessions are never
//! archived; nothing here touches the filesystem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;
use crate::scorer::{score, ScoreSummary, Verdict};
use crate::session::AssessmentSession;

/// Summary of one completed attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Catalog the session ran against.
    pub catalog_id: String,
    /// Display title (quiz title or exam level).
    pub title: String,
    /// Number of questions in the catalog.
    pub question_count: usize,
    /// The scored result.
    pub summary: ScoreSummary,
    /// Follow-up suggestions shown with the result.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl AssessmentReport {
    /// Build a report from a completed session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotCompleted`] if the session is still in
    /// progress.
    pub fn from_session(
        session: &AssessmentSession,
        title: impl Into<String>,
        recommendations: Vec<String>,
    ) -> Result<Self, SessionError> {
        let summary = score(session)?;
        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            catalog_id: session.catalog().id.clone(),
            title: title.into(),
            question_count: session.catalog().len(),
            summary,
            recommendations,
        })
    }

    /// Render the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.title));

        md.push_str("| Résultat | Score |\n");
        md.push_str("|----------|-------|\n");
        if self.summary.mcq_total > 0 {
            md.push_str(&format!(
                "| QCM | {}/{} |\n",
                self.summary.mcq_correct, self.summary.mcq_total
            ));
        }
        if self.summary.open_total > 0 {
            md.push_str(&format!(
                "| Questions ouvertes | {}/{} |\n",
                self.summary.open_answered, self.summary.open_total
            ));
        }
        if self.summary.timed_out > 0 {
            md.push_str(&format!("| Temps écoulé | {} |\n", self.summary.timed_out));
        }
        if self.summary.skipped > 0 {
            md.push_str(&format!("| Passées | {} |\n", self.summary.skipped));
        }
        md.push('\n');

        let verdict = match self.summary.verdict() {
            Verdict::Excellent => "Excellent ! Vous maîtrisez les fondamentaux.",
            Verdict::Solid => "Bien joué ! Continuez sur cette lancée.",
            Verdict::KeepPracticing => "Continuez vos efforts ! La pratique paie.",
        };
        md.push_str(&format!("**{verdict}**\n"));

        if !self.recommendations.is_empty() {
            md.push_str("\n### Recommandations\n\n");
            for rec in &self.recommendations {
                md.push_str(&format!("- {rec}\n"));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Catalog, Question, QuestionKind};
    use crate::session::Answer;
    use std::sync::Arc;

    fn completed_session() -> AssessmentSession {
        let catalog = Arc::new(Catalog {
            id: "cp-basics".into(),
            title: "Bases Congés Payés".into(),
            description: String::new(),
            questions: vec![
                Question {
                    id: "q1".into(),
                    kind: QuestionKind::MultipleChoice,
                    prompt: "Question".into(),
                    context: None,
                    choices: vec!["a".into(), "b".into()],
                    correct_choice: Some(0),
                    explanation: None,
                },
                Question {
                    id: "q2".into(),
                    kind: QuestionKind::OpenResponse,
                    prompt: "Expliquez".into(),
                    context: None,
                    choices: vec![],
                    correct_choice: None,
                    explanation: None,
                },
            ],
        });
        let mut session = AssessmentSession::new(catalog).unwrap();
        session.submit_answer(Answer::Choice(0));
        session.submit_answer(Answer::TimedOut);
        session
    }

    #[test]
    fn report_requires_completion() {
        let catalog = Arc::new(Catalog {
            id: "test".into(),
            title: "Test".into(),
            description: String::new(),
            questions: vec![Question {
                id: "q1".into(),
                kind: QuestionKind::MultipleChoice,
                prompt: "Question".into(),
                context: None,
                choices: vec!["a".into(), "b".into()],
                correct_choice: Some(0),
                explanation: None,
            }],
        });
        let session = AssessmentSession::new(catalog).unwrap();
        assert!(AssessmentReport::from_session(&session, "Test", vec![]).is_err());
    }

    #[test]
    fn markdown_contains_scores_and_verdict() {
        let session = completed_session();
        let report = AssessmentReport::from_session(
            &session,
            "Niveau Junior",
            vec!["Revoir le quiz TransGP".into()],
        )
        .unwrap();

        let md = report.to_markdown();
        assert!(md.contains("Niveau Junior"));
        assert!(md.contains("| QCM | 1/1 |"));
        assert!(md.contains("| Questions ouvertes | 0/1 |"));
        assert!(md.contains("Temps écoulé"));
        assert!(md.contains("Excellent"));
        assert!(md.contains("Revoir le quiz TransGP"));
    }

    #[test]
    fn report_serializes_to_json() {
        let session = completed_session();
        let report = AssessmentReport::from_session(&session, "Test", vec![]).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        let back: AssessmentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.catalog_id, "cp-basics");
        assert_eq!(back.summary.mcq_correct, 1);
    }
}
