//! Scoring for completed assessment sessions.
//!
//! Scoring is a pure function of the final answers and the catalog: no side
//! effects, deterministic, callable any number of times.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::model::QuestionKind;
use crate::session::{Answer, AssessmentSession};

/// Tunable scoring knobs.
#[derive(Debug, Clone, Copy)]
pub struct ScorerConfig {
    /// An open-response answer counts as "answered" only when it is longer
    /// than this many characters. Effort heuristic, not a correctness check.
    pub open_min_chars: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self { open_min_chars: 10 }
    }
}

/// Aggregate result for one completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Correctly answered multiple-choice questions.
    pub mcq_correct: u32,
    /// Multiple-choice questions in the catalog.
    pub mcq_total: u32,
    /// Open-response answers that cleared the effort threshold.
    pub open_answered: u32,
    /// Open-response questions in the catalog.
    pub open_total: u32,
    /// Questions lost to the countdown.
    pub timed_out: u32,
    /// Questions deliberately skipped.
    pub skipped: u32,
}

impl ScoreSummary {
    /// Fraction of multiple-choice questions answered correctly, in [0, 1].
    /// Zero when the catalog has no multiple-choice questions.
    pub fn mcq_ratio(&self) -> f64 {
        if self.mcq_total == 0 {
            0.0
        } else {
            f64::from(self.mcq_correct) / f64::from(self.mcq_total)
        }
    }

    /// Exam pass line: at least 80% of the multiple-choice questions right.
    pub fn is_passing(&self) -> bool {
        self.mcq_total > 0 && f64::from(self.mcq_correct) >= f64::from(self.mcq_total) * 0.8
    }

    /// Overall verdict, using the practice-result thresholds.
    pub fn verdict(&self) -> Verdict {
        if self.mcq_total > 0 && self.mcq_correct == self.mcq_total {
            Verdict::Excellent
        } else if self.mcq_correct * 2 >= self.mcq_total {
            Verdict::Solid
        } else {
            Verdict::KeepPracticing
        }
    }
}

/// Coarse performance bucket shown on result screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    Solid,
    KeepPracticing,
}

/// Score a completed session with the default configuration.
///
/// # Errors
///
/// Returns [`SessionError::NotCompleted`] if the session is still in
/// progress.
pub fn score(session: &AssessmentSession) -> Result<ScoreSummary, SessionError> {
    score_with(session, &ScorerConfig::default())
}

/// Score a completed session with an explicit configuration.
pub fn score_with(
    session: &AssessmentSession,
    config: &ScorerConfig,
) -> Result<ScoreSummary, SessionError> {
    if !session.is_complete() {
        return Err(SessionError::NotCompleted);
    }

    let mut summary = ScoreSummary {
        mcq_correct: 0,
        mcq_total: 0,
        open_answered: 0,
        open_total: 0,
        timed_out: 0,
        skipped: 0,
    };

    for (question, answer) in session.catalog().questions.iter().zip(session.answers()) {
        match question.kind {
            QuestionKind::MultipleChoice => summary.mcq_total += 1,
            QuestionKind::OpenResponse => summary.open_total += 1,
        }
        match answer {
            Answer::Choice(picked) => {
                if question.correct_choice == Some(*picked) {
                    summary.mcq_correct += 1;
                }
            }
            Answer::Text(text) => {
                if question.kind == QuestionKind::OpenResponse
                    && text.chars().count() > config.open_min_chars
                {
                    summary.open_answered += 1;
                }
            }
            Answer::TimedOut => summary.timed_out += 1,
            Answer::Skipped => summary.skipped += 1,
        }
    }

    Ok(summary)
}
