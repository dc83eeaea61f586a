use omr_core::model::{OptionLabel, OptionSet, QuestionCount, QuestionNumber, ResponseSheet};
use omr_core::{Layout, TextFormatter};

use crate::error::SheetServiceError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One answering session: a fixed question count and its answers.
///
/// The layout and formatter are fixed at construction so the preview and the
/// exported file are produced by the same grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSession {
    sheet: ResponseSheet,
    formatter: TextFormatter,
}

impl SheetSession {
    #[must_use]
    pub fn new(
        count: QuestionCount,
        options: OptionSet,
        page_height: u16,
        field_width: usize,
    ) -> Self {
        Self {
            sheet: ResponseSheet::new(count, options),
            formatter: TextFormatter::new(Layout::new(count, page_height), field_width),
        }
    }

    #[must_use]
    pub fn question_count(&self) -> QuestionCount {
        self.sheet.question_count()
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        self.sheet.options()
    }

    #[must_use]
    pub fn sheet(&self) -> &ResponseSheet {
        &self.sheet
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        self.formatter.layout()
    }

    #[must_use]
    pub fn answer(&self, question: QuestionNumber) -> Option<OptionLabel> {
        self.sheet.get(question)
    }

    /// Select `option` for `question`, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Sheet` if the pair is not on this sheet.
    pub fn select(
        &mut self,
        question: QuestionNumber,
        option: OptionLabel,
    ) -> Result<(), SheetServiceError> {
        self.sheet.select(question, option)?;
        tracing::debug!(%question, %option, "answer selected");
        Ok(())
    }

    pub fn reset(&mut self) {
        self.sheet.clear();
        tracing::debug!(questions = %self.question_count().value(), "answers reset");
    }

    #[must_use]
    pub fn preview_lines(&self) -> Vec<String> {
        self.formatter.format(&self.sheet)
    }

    /// The full text block as written to disk.
    #[must_use]
    pub fn export_text(&self) -> String {
        self.formatter.format_text(&self.sheet)
    }
}
