//! Timed exam driver.
//!
//! [`ExamEngine`] owns a timed [`AssessmentSession`] on a dedicated task and
//! serializes every mutation onto it: candidate commands (stage, submit,
//! abandon) and the one-per-second countdown tick both go through the same
//! `select!` loop, so no lock is needed and a stale tick can never touch a
//! session that has left the in-progress state. The tick source lives inside
//! the loop; exiting the loop (completion, abandon, or the handle being
//! dropped) releases it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::error::SessionError;
use crate::model::{Catalog, Question};
use crate::session::{Answer, AssessmentSession, SubmitOutcome, TickOutcome};

/// Configuration for the exam driver.
#[derive(Debug, Clone, Copy)]
pub struct ExamConfig {
    /// Countdown per question, in seconds.
    pub seconds_per_question: u32,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            seconds_per_question: 30,
        }
    }
}

/// Receives session progress callbacks from the engine task.
pub trait ExamObserver: Send + Sync {
    /// A question came under the cursor.
    fn on_question(&self, index: usize, total: usize, question: &Question, remaining_secs: u32);
    /// The countdown advanced with time remaining.
    fn on_tick(&self, index: usize, remaining_secs: u32);
    /// The countdown expired on question `index`.
    fn on_timeout(&self, index: usize);
    /// The session completed.
    fn on_completed(&self, session: &AssessmentSession);
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl ExamObserver for NoopObserver {
    fn on_question(&self, _: usize, _: usize, _: &Question, _: u32) {}
    fn on_tick(&self, _: usize, _: u32) {}
    fn on_timeout(&self, _: usize) {}
    fn on_completed(&self, _: &AssessmentSession) {}
}

enum Command {
    Stage(Answer),
    Submit(Answer, oneshot::Sender<SubmitOutcome>),
    SubmitStaged(oneshot::Sender<SubmitOutcome>),
    Abandon,
}

/// Handle to a running timed exam.
///
/// Dropping the handle abandons the exam: the engine task sees the closed
/// channel, stops ticking, and returns the session as-is.
pub struct ExamEngine {
    commands: mpsc::Sender<Command>,
    handle: JoinHandle<AssessmentSession>,
}

impl ExamEngine {
    /// Start a timed session over `catalog` and spawn its countdown task.
    ///
    /// # Errors
    ///
    /// Fails for an empty catalog or a zero time limit, before any task is
    /// spawned.
    pub fn start(
        catalog: Arc<Catalog>,
        config: ExamConfig,
        observer: Arc<dyn ExamObserver>,
    ) -> Result<Self, SessionError> {
        let session = AssessmentSession::with_timer(catalog, config.seconds_per_question)?;
        let (commands, receiver) = mpsc::channel(16);
        let handle = tokio::spawn(run_loop(session, receiver, observer));
        Ok(Self { commands, handle })
    }

    /// Stage an answer for the current question without confirming it.
    pub async fn stage(&self, answer: Answer) {
        let _ = self.commands.send(Command::Stage(answer)).await;
    }

    /// Confirm an answer for the current question.
    ///
    /// Returns [`SubmitOutcome::AlreadyCompleted`] if the engine has already
    /// stopped.
    pub async fn submit(&self, answer: Answer) -> SubmitOutcome {
        let (reply, response) = oneshot::channel();
        if self
            .commands
            .send(Command::Submit(answer, reply))
            .await
            .is_err()
        {
            return SubmitOutcome::AlreadyCompleted;
        }
        response.await.unwrap_or(SubmitOutcome::AlreadyCompleted)
    }

    /// Confirm the staged answer, or a deliberate skip if none is staged.
    pub async fn submit_staged(&self) -> SubmitOutcome {
        let (reply, response) = oneshot::channel();
        if self
            .commands
            .send(Command::SubmitStaged(reply))
            .await
            .is_err()
        {
            return SubmitOutcome::AlreadyCompleted;
        }
        response.await.unwrap_or(SubmitOutcome::AlreadyCompleted)
    }

    /// Stop the exam immediately and return the session in whatever state it
    /// reached.
    pub async fn abandon(self) -> Result<AssessmentSession, SessionError> {
        let _ = self.commands.send(Command::Abandon).await;
        self.join().await
    }

    /// Wait until the session completes (by answers or by the countdown) and
    /// return it.
    pub async fn finish(self) -> Result<AssessmentSession, SessionError> {
        self.join().await
    }

    async fn join(self) -> Result<AssessmentSession, SessionError> {
        // Keep the command channel open while waiting: a closed channel is
        // the abandon signal.
        let ExamEngine { commands, handle } = self;
        let session = handle
            .await
            .map_err(|e| SessionError::TaskFailed(e.to_string()))?;
        drop(commands);
        Ok(session)
    }
}

async fn run_loop(
    mut session: AssessmentSession,
    mut commands: mpsc::Receiver<Command>,
    observer: Arc<dyn ExamObserver>,
) -> AssessmentSession {
    let period = Duration::from_secs(1);
    let total = session.catalog().len();
    let limit = session.remaining_secs().unwrap_or(0);

    if let Some(question) = session.current_question() {
        observer.on_question(session.current_index(), total, question, limit);
    }

    // interval_at so the first tick fires one full period from now, and the
    // cadence restarts whenever a question is advanced.
    let mut interval = time::interval_at(Instant::now() + period, period);

    loop {
        tokio::select! {
            maybe = commands.recv() => {
                match maybe {
                    None | Some(Command::Abandon) => {
                        tracing::debug!(session = %session.id(), "exam abandoned");
                        break;
                    }
                    Some(Command::Stage(answer)) => session.stage(answer),
                    Some(Command::Submit(answer, reply)) => {
                        let outcome = session.submit_answer(answer);
                        // Observer first: callers resume on the reply and
                        // must see the advanced cursor.
                        let done = note_progress(outcome, &session, observer.as_ref(), &mut interval, period);
                        let _ = reply.send(outcome);
                        if done {
                            break;
                        }
                    }
                    Some(Command::SubmitStaged(reply)) => {
                        let outcome = session.submit_staged();
                        let done = note_progress(outcome, &session, observer.as_ref(), &mut interval, period);
                        let _ = reply.send(outcome);
                        if done {
                            break;
                        }
                    }
                }
            }
            _ = interval.tick() => {
                let index = session.current_index();
                match session.tick() {
                    TickOutcome::Running { remaining_secs } => {
                        observer.on_tick(index, remaining_secs);
                    }
                    TickOutcome::Expired(outcome) => {
                        tracing::debug!(session = %session.id(), index, "question timed out");
                        observer.on_timeout(index);
                        if note_progress(outcome, &session, observer.as_ref(), &mut interval, period) {
                            break;
                        }
                    }
                    TickOutcome::Idle => {}
                }
            }
        }
    }

    session
}

/// Report an advance or completion to the observer. Returns `true` when the
/// session completed and the loop should exit.
fn note_progress(
    outcome: SubmitOutcome,
    session: &AssessmentSession,
    observer: &dyn ExamObserver,
    interval: &mut time::Interval,
    period: Duration,
) -> bool {
    match outcome {
        SubmitOutcome::Completed => {
            observer.on_completed(session);
            true
        }
        SubmitOutcome::Advanced { index } => {
            if let Some(question) = session.catalog().question(index) {
                observer.on_question(
                    index,
                    session.catalog().len(),
                    question,
                    session.remaining_secs().unwrap_or(0),
                );
            }
            *interval = time::interval_at(Instant::now() + period, period);
            false
        }
        SubmitOutcome::AlreadyCompleted => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionKind;
    use std::sync::Mutex;

    fn mcq(id: &str, correct: usize) -> Question {
        Question {
            id: id.into(),
            kind: QuestionKind::MultipleChoice,
            prompt: format!("question {id}"),
            context: None,
            choices: vec!["a".into(), "b".into(), "c".into()],
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

    fn config(seconds: u32) -> ExamConfig {
        ExamConfig {
            seconds_per_question: seconds,
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl RecordingObserver {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl ExamObserver for RecordingObserver {
        fn on_question(&self, index: usize, _: usize, _: &Question, _: u32) {
            self.events.lock().unwrap().push(format!("question {index}"));
        }
        fn on_tick(&self, _: usize, remaining_secs: u32) {
            self.events
                .lock()
                .unwrap()
                .push(format!("tick {remaining_secs}"));
        }
        fn on_timeout(&self, index: usize) {
            self.events.lock().unwrap().push(format!("timeout {index}"));
        }
        fn on_completed(&self, _: &AssessmentSession) {
            self.events.lock().unwrap().push("completed".into());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_completes_without_input() {
        let engine = ExamEngine::start(
            catalog(vec![mcq("q1", 0)]),
            config(30),
            Arc::new(NoopObserver),
        )
        .unwrap();

        let session = engine.finish().await.unwrap();
        assert!(session.is_complete());
        assert_eq!(session.answers(), &[Answer::TimedOut]);
    }

    #[tokio::test(start_paused = true)]
    async fn submits_complete_before_the_clock() {
        let engine = ExamEngine::start(
            catalog(vec![mcq("q1", 0), mcq("q2", 1)]),
            config(30),
            Arc::new(NoopObserver),
        )
        .unwrap();

        assert_eq!(
            engine.submit(Answer::Choice(0)).await,
            SubmitOutcome::Advanced { index: 1 }
        );
        assert_eq!(
            engine.submit(Answer::Choice(1)).await,
            SubmitOutcome::Completed
        );

        let session = engine.finish().await.unwrap();
        assert_eq!(
            session.answers(),
            &[Answer::Choice(0), Answer::Choice(1)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn staged_answer_survives_the_timeout() {
        let engine = ExamEngine::start(
            catalog(vec![mcq("q1", 0)]),
            config(5),
            Arc::new(NoopObserver),
        )
        .unwrap();

        engine.stage(Answer::Choice(2)).await;
        let session = engine.finish().await.unwrap();
        assert_eq!(session.answers(), &[Answer::Choice(2)]);
    }

    #[tokio::test(start_paused = true)]
    async fn abandon_stops_the_clock_early() {
        let engine = ExamEngine::start(
            catalog(vec![mcq("q1", 0), mcq("q2", 1)]),
            config(30),
            Arc::new(NoopObserver),
        )
        .unwrap();

        let session = engine.abandon().await.unwrap();
        assert!(!session.is_complete());
        assert!(session.answers().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn submitting_after_completion_is_a_noop() {
        let engine = ExamEngine::start(
            catalog(vec![mcq("q1", 0)]),
            config(30),
            Arc::new(NoopObserver),
        )
        .unwrap();

        assert_eq!(
            engine.submit(Answer::Choice(0)).await,
            SubmitOutcome::Completed
        );
        assert_eq!(
            engine.submit(Answer::Choice(1)).await,
            SubmitOutcome::AlreadyCompleted
        );

        let session = engine.finish().await.unwrap();
        assert_eq!(session.answers(), &[Answer::Choice(0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn observer_sees_the_whole_lifecycle() {
        let observer = Arc::new(RecordingObserver::default());
        let engine = ExamEngine::start(
            catalog(vec![mcq("q1", 0)]),
            config(2),
            Arc::clone(&observer) as Arc<dyn ExamObserver>,
        )
        .unwrap();

        engine.finish().await.unwrap();
        let events = observer.events();
        assert_eq!(
            events,
            vec!["question 0", "tick 1", "timeout 0", "completed"]
        );
    }
}
