pub mod agents;
pub mod ask;
pub mod board;
pub mod exam;
pub mod list;
pub mod search;
pub mod stats;
pub mod take;
pub mod validate;

use tempotrain_core::model::{Question, QuestionKind};
use tempotrain_core::session::Answer;

/// Turn a line of input into an answer for `question`.
///
/// Multiple-choice accepts a letter ("a".."d") or a 1-based number; an empty
/// line is a deliberate skip. Open questions take the line verbatim.
pub(crate) fn parse_answer(question: &Question, line: &str) -> Result<Answer, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Answer::Skipped);
    }

    match question.kind {
        QuestionKind::OpenResponse => Ok(Answer::Text(trimmed.to_string())),
        QuestionKind::MultipleChoice => {
            let index = match trimmed.to_lowercase().as_str() {
                letter if letter.len() == 1 && letter.chars().all(|c| c.is_ascii_lowercase()) => {
                    (letter.as_bytes()[0] - b'a') as usize
                }
                number => number
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .ok_or_else(|| format!("réponse invalide : {trimmed}"))?,
            };

            if question.is_choice_valid(index) {
                Ok(Answer::Choice(index))
            } else {
                Err(format!(
                    "réponse hors limites : {trimmed} (choix A-{})",
                    (b'A' + question.choices.len().saturating_sub(1) as u8) as char
                ))
            }
        }
    }
}

/// Letter label for a choice index.
pub(crate) fn choice_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}
