//! Fixed-width text rendering of a response sheet.

use crate::layout::Layout;
use crate::model::{QuestionNumber, ResponseSheet};

/// Placeholder written for unanswered questions.
pub const UNSET_MARK: char = '-';

/// Formats answers into the same column grid the sheet uses on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormatter {
    layout: Layout,
    field_width: usize,
}

impl TextFormatter {
    #[must_use]
    pub fn new(layout: Layout, field_width: usize) -> Self {
        Self {
            layout,
            field_width,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// `"{question}.{answer}"`, with `-` standing in for an unset answer.
    #[must_use]
    pub fn token(sheet: &ResponseSheet, question: QuestionNumber) -> String {
        let answer = sheet.get(question).map_or(UNSET_MARK, |opt| opt.as_char());
        format!("{question}.{answer}")
    }

    /// One line per layout row, always `layout.rows()` lines.
    ///
    /// Rows without any question produce empty lines. Tokens are
    /// left-justified and space-padded to the field width.
    #[must_use]
    pub fn format(&self, sheet: &ResponseSheet) -> Vec<String> {
        let width = self.field_width;
        (0..self.layout.rows())
            .map(|row| {
                (0..self.layout.columns())
                    .filter_map(|column| self.layout.question_at(column, row))
                    .map(|question| format!("{:<width$}", Self::token(sheet, question)))
                    .collect::<String>()
            })
            .collect()
    }

    /// The formatted block with a newline after every line.
    #[must_use]
    pub fn format_text(&self, sheet: &ResponseSheet) -> String {
        self.format(sheet)
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }
}
