use std::sync::Arc;

use omr_core::model::{QuestionCount, SheetConfig};
use storage::repository::{ExportLocation, ExportRepository};

use super::session::SheetSession;
use crate::error::SheetServiceError;

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    pub location: ExportLocation,
    pub line_count: usize,
}

#[derive(Clone)]
pub struct SheetService {
    config: SheetConfig,
    exports: Arc<dyn ExportRepository>,
}

impl SheetService {
    #[must_use]
    pub fn new(config: SheetConfig, exports: Arc<dyn ExportRepository>) -> Self {
        Self { config, exports }
    }

    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Validate user input for the number of questions.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::QuestionCount` if the input is not a number
    /// in `[1, max_questions]`.
    pub fn parse_question_count(&self, raw: &str) -> Result<QuestionCount, SheetServiceError> {
        Ok(QuestionCount::parse(raw, self.config.max_questions())?)
    }

    /// Validate a question count that did not come from text, e.g. a route param.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::QuestionCount` if `count` is out of range.
    pub fn question_count(&self, count: u32) -> Result<QuestionCount, SheetServiceError> {
        Ok(QuestionCount::new(count, self.config.max_questions())?)
    }

    #[must_use]
    pub fn start_session(&self, count: QuestionCount) -> SheetSession {
        tracing::info!(questions = count.value(), "sheet session started");
        SheetSession::new(
            count,
            self.config.options().clone(),
            self.config.page_height(),
            self.config.field_width(),
        )
    }

    /// Write the session's full text block, replacing any earlier export.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write fails. Nothing is
    /// retried.
    pub async fn save(&self, session: &SheetSession) -> Result<SaveReceipt, SheetServiceError> {
        let text = session.export_text();
        let location = self.exports.write_export(&text).await.map_err(|err| {
            tracing::error!(error = %err, "saving responses failed");
            err
        })?;
        tracing::info!(%location, answered = session.sheet().answered_count(), "responses saved");
        Ok(SaveReceipt {
            location,
            line_count: session.layout().rows(),
        })
    }
}
