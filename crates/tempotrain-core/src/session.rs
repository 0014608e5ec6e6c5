//! The per-attempt assessment session state machine.
//!
//! A session is created from a catalog, mutated only through
//! [`AssessmentSession::submit_answer`] and [`AssessmentSession::tick`], and
//! discarded when the candidate exits or restarts. There is no cross-session
//! history.
//!
//! Two invariants hold at all times:
//! - `answers.len() <= current_index + 1` after every operation;
//! - once completed, the cursor and the answers are frozen and every
//!   mutating call is a no-op.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;
use crate::model::{Catalog, Question};

/// A recorded answer for one catalog position.
///
/// The two "no answer" cases are distinct on purpose: a deliberate skip and
/// a countdown expiry must not be conflated when counting results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// The candidate moved on without answering.
    Skipped,
    /// The per-question countdown expired before any answer was confirmed.
    TimedOut,
    /// A multiple-choice selection.
    Choice(usize),
    /// A free-text answer.
    Text(String),
}

impl Answer {
    /// Returns `true` for both unanswered markers.
    pub fn is_unanswered(&self) -> bool {
        matches!(self, Answer::Skipped | Answer::TimedOut)
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Completed,
}

/// Result of a submit call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answer was recorded and the cursor moved to `index`.
    Advanced { index: usize },
    /// The answer was recorded and it was the last question.
    Completed,
    /// The session was already completed; nothing was recorded.
    AlreadyCompleted,
}

/// Result of a tick call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Untimed session, or the session is already completed.
    Idle,
    /// The countdown advanced and time remains.
    Running { remaining_secs: u32 },
    /// The countdown hit zero and forced a submit.
    Expired(SubmitOutcome),
}

/// Per-question countdown for the exam variant.
#[derive(Debug, Clone, Copy)]
struct QuestionClock {
    limit_secs: u32,
    remaining_secs: u32,
}

/// One candidate's attempt at a catalog.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: Uuid,
    catalog: Arc<Catalog>,
    current: usize,
    answers: Vec<Answer>,
    staged: Option<Answer>,
    clock: Option<QuestionClock>,
    completed: bool,
}

impl AssessmentSession {
    /// Start an untimed (practice) session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyCatalog`] if the catalog has no
    /// questions.
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, SessionError> {
        if catalog.is_empty() {
            return Err(SessionError::EmptyCatalog(catalog.id.clone()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            catalog,
            current: 0,
            answers: Vec::new(),
            staged: None,
            clock: None,
            completed: false,
        })
    }

    /// Start a timed (exam) session with a per-question limit in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyCatalog`] for an empty catalog and
    /// [`SessionError::InvalidTimeLimit`] for a zero limit.
    pub fn with_timer(
        catalog: Arc<Catalog>,
        seconds_per_question: u32,
    ) -> Result<Self, SessionError> {
        if seconds_per_question == 0 {
            return Err(SessionError::InvalidTimeLimit(seconds_per_question));
        }
        let mut session = Self::new(catalog)?;
        session.clock = Some(QuestionClock {
            limit_secs: seconds_per_question,
            remaining_secs: seconds_per_question,
        });
        Ok(session)
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.completed {
            SessionState::Completed
        } else {
            SessionState::InProgress
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Zero-based index of the question the cursor is on. Frozen once the
    /// session completes.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Seconds left on the current question, or `None` for an untimed
    /// session.
    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.clock.map(|c| c.remaining_secs)
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The question under the cursor, or `None` once completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            None
        } else {
            self.catalog.question(self.current)
        }
    }

    /// Stage an answer without confirming it.
    ///
    /// The staged answer is what a countdown expiry records in place of
    /// [`Answer::TimedOut`]; it is cleared whenever the cursor advances.
    pub fn stage(&mut self, answer: Answer) {
        if !self.completed {
            self.staged = Some(answer);
        }
    }

    /// The currently staged answer, if any.
    #[must_use]
    pub fn staged(&self) -> Option<&Answer> {
        self.staged.as_ref()
    }

    /// Record `answer` for the current question and advance.
    ///
    /// On the last question the session transitions to completed and the
    /// cursor stays put. On an already-completed session this is a no-op
    /// that records nothing.
    pub fn submit_answer(&mut self, answer: Answer) -> SubmitOutcome {
        if self.completed {
            return SubmitOutcome::AlreadyCompleted;
        }

        self.staged = None;
        self.answers.push(answer);

        if self.current + 1 >= self.catalog.len() {
            self.completed = true;
            return SubmitOutcome::Completed;
        }

        self.current += 1;
        if let Some(clock) = &mut self.clock {
            clock.remaining_secs = clock.limit_secs;
        }
        SubmitOutcome::Advanced {
            index: self.current,
        }
    }

    /// Submit the staged answer, or [`Answer::Skipped`] if none is staged.
    pub fn submit_staged(&mut self) -> SubmitOutcome {
        let answer = self.staged.take().unwrap_or(Answer::Skipped);
        self.submit_answer(answer)
    }

    /// Advance the per-question countdown by one second.
    ///
    /// When the countdown reaches zero this behaves as a forced submit of
    /// the staged answer (or [`Answer::TimedOut`]) and the clock resets for
    /// the next question. Untimed and completed sessions ignore ticks.
    pub fn tick(&mut self) -> TickOutcome {
        if self.completed {
            return TickOutcome::Idle;
        }
        let Some(clock) = &mut self.clock else {
            return TickOutcome::Idle;
        };

        clock.remaining_secs = clock.remaining_secs.saturating_sub(1);
        if clock.remaining_secs > 0 {
            return TickOutcome::Running {
                remaining_secs: clock.remaining_secs,
            };
        }

        let forced = self.staged.take().unwrap_or(Answer::TimedOut);
        TickOutcome::Expired(self.submit_answer(forced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuestionKind};

    fn mcq(id: &str, correct: usize) -> Question {
        Question {
            id: id.into(),
            kind: QuestionKind::MultipleChoice,
            prompt: format!("question {id}"),
            context: None,
            choices: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_choice: Some(correct),
            explanation: None,
        }
    }

    fn catalog(questions: Vec<Question>) -> Arc<Catalog> {
        Arc::new(Catalog {
            id: "test".into(),
            title: "Test".into(),
            description: String::new(),
            questions,
        })
    }

    fn three_question_session() -> AssessmentSession {
        AssessmentSession::new(catalog(vec![mcq("q1", 0), mcq("q2", 1), mcq("q3", 2)])).unwrap()
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = AssessmentSession::new(catalog(vec![])).unwrap_err();
        assert!(matches!(err, SessionError::EmptyCatalog(_)));
    }

    #[test]
    fn zero_time_limit_is_rejected() {
        let err = AssessmentSession::with_timer(catalog(vec![mcq("q1", 0)]), 0).unwrap_err();
        assert!(matches!(err, SessionError::InvalidTimeLimit(0)));
    }

    #[test]
    fn answers_never_outrun_the_cursor() {
        let mut session = three_question_session();
        assert!(session.answers().len() <= session.current_index() + 1);

        for i in 0..3 {
            session.submit_answer(Answer::Choice(i));
            assert!(
                session.answers().len() <= session.current_index() + 1,
                "violated after submit #{i}"
            );
        }
        assert!(session.is_complete());
        assert_eq!(session.answers().len(), 3);
    }

    #[test]
    fn submit_advances_and_completes() {
        let mut session = three_question_session();
        assert_eq!(session.state(), SessionState::InProgress);

        assert_eq!(
            session.submit_answer(Answer::Choice(0)),
            SubmitOutcome::Advanced { index: 1 }
        );
        assert_eq!(
            session.submit_answer(Answer::Skipped),
            SubmitOutcome::Advanced { index: 2 }
        );
        assert_eq!(
            session.submit_answer(Answer::Choice(2)),
            SubmitOutcome::Completed
        );
        assert_eq!(session.state(), SessionState::Completed);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn completed_session_is_frozen() {
        let mut session = three_question_session();
        for _ in 0..3 {
            session.submit_answer(Answer::Choice(0));
        }
        let answers_before = session.answers().to_vec();
        let index_before = session.current_index();

        assert_eq!(
            session.submit_answer(Answer::Choice(3)),
            SubmitOutcome::AlreadyCompleted
        );
        assert_eq!(session.tick(), TickOutcome::Idle);
        session.stage(Answer::Choice(1));

        assert_eq!(session.answers(), answers_before.as_slice());
        assert_eq!(session.current_index(), index_before);
        assert!(session.staged().is_none());
    }

    #[test]
    fn untimed_session_ignores_ticks() {
        let mut session = three_question_session();
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.remaining_secs(), None);
    }

    #[test]
    fn countdown_runs_then_forces_timeout() {
        let mut session =
            AssessmentSession::with_timer(catalog(vec![mcq("q1", 0), mcq("q2", 1)]), 3).unwrap();
        assert_eq!(session.remaining_secs(), Some(3));

        assert_eq!(session.tick(), TickOutcome::Running { remaining_secs: 2 });
        assert_eq!(session.tick(), TickOutcome::Running { remaining_secs: 1 });
        assert_eq!(
            session.tick(),
            TickOutcome::Expired(SubmitOutcome::Advanced { index: 1 })
        );

        assert_eq!(session.answers(), &[Answer::TimedOut]);
        // Clock resets to the full limit for the next question.
        assert_eq!(session.remaining_secs(), Some(3));
    }

    #[test]
    fn full_countdown_equals_one_timed_out_submit() {
        let catalog = catalog(vec![mcq("q1", 0)]);
        let mut ticked = AssessmentSession::with_timer(Arc::clone(&catalog), 30).unwrap();
        for _ in 0..30 {
            ticked.tick();
        }

        let mut submitted = AssessmentSession::with_timer(catalog, 30).unwrap();
        submitted.submit_answer(Answer::TimedOut);

        assert!(ticked.is_complete());
        assert!(submitted.is_complete());
        assert_eq!(ticked.answers(), submitted.answers());
        assert_eq!(ticked.current_index(), submitted.current_index());
        assert_eq!(ticked.answers(), &[Answer::TimedOut]);
    }

    #[test]
    fn expiry_records_the_staged_answer() {
        let mut session =
            AssessmentSession::with_timer(catalog(vec![mcq("q1", 0), mcq("q2", 1)]), 2).unwrap();
        session.stage(Answer::Choice(3));

        session.tick();
        assert_eq!(
            session.tick(),
            TickOutcome::Expired(SubmitOutcome::Advanced { index: 1 })
        );
        assert_eq!(session.answers(), &[Answer::Choice(3)]);
        assert!(session.staged().is_none());
    }

    #[test]
    fn manual_submit_resets_the_clock() {
        let mut session =
            AssessmentSession::with_timer(catalog(vec![mcq("q1", 0), mcq("q2", 1)]), 10).unwrap();
        session.tick();
        session.tick();
        assert_eq!(session.remaining_secs(), Some(8));

        session.submit_answer(Answer::Choice(0));
        assert_eq!(session.remaining_secs(), Some(10));
    }

    #[test]
    fn submit_staged_falls_back_to_skipped() {
        let mut session = three_question_session();
        session.submit_staged();
        assert_eq!(session.answers(), &[Answer::Skipped]);

        session.stage(Answer::Choice(1));
        session.submit_staged();
        assert_eq!(session.answers(), &[Answer::Skipped, Answer::Choice(1)]);
    }

    #[test]
    fn unanswered_markers() {
        assert!(Answer::Skipped.is_unanswered());
        assert!(Answer::TimedOut.is_unanswered());
        assert!(!Answer::Choice(0).is_unanswered());
        assert!(!Answer::Text(String::new()).is_unanswered());
    }
}
