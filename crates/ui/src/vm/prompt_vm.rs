use omr_core::model::{MIN_QUESTIONS, QuestionCount};
use services::{SheetService, SheetServiceError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    Accepted(QuestionCount),
    /// Input stays on screen; the message explains what to fix.
    Rejected(String),
}

#[must_use]
pub fn prompt_label(max_questions: u16) -> String {
    format!("Enter number of questions ({MIN_QUESTIONS}-{max_questions}):")
}

#[must_use]
pub fn submit_question_count(service: &SheetService, raw: &str) -> PromptOutcome {
    match service.parse_question_count(raw) {
        Ok(count) => PromptOutcome::Accepted(count),
        Err(SheetServiceError::QuestionCount(err)) => {
            tracing::warn!(input = raw, error = %err, "question count rejected");
            PromptOutcome::Rejected(err.to_string())
        }
        Err(err) => {
            tracing::warn!(input = raw, error = %err, "question count rejected");
            PromptOutcome::Rejected(crate::views::ViewError::Unknown.message().to_string())
        }
    }
}
