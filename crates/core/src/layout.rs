//! Column/row placement of questions.
//!
//! Questions fill columns top to bottom, `page_height` rows per column, and
//! columns left to right. The last column may be short. The on-screen preview
//! and the exported file both go through this module so they always agree.

use crate::model::{QuestionCount, QuestionNumber};

/// Zero-based cell of a question in the paginated grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub column: usize,
    pub row: usize,
}

/// Number of columns needed for `question_count` questions.
///
/// A zero `page_height` is treated as one row per column.
#[must_use]
pub fn columns_for(question_count: QuestionCount, page_height: u16) -> usize {
    usize::from(question_count.value()).div_ceil(usize::from(page_height.max(1)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    question_count: QuestionCount,
    page_height: u16,
}

impl Layout {
    #[must_use]
    pub fn new(question_count: QuestionCount, page_height: u16) -> Self {
        Self {
            question_count,
            page_height: page_height.max(1),
        }
    }

    #[must_use]
    pub fn question_count(&self) -> QuestionCount {
        self.question_count
    }

    /// Rows per column. Every formatted block has exactly this many lines.
    #[must_use]
    pub fn rows(&self) -> usize {
        usize::from(self.page_height)
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        columns_for(self.question_count, self.page_height)
    }

    /// Cell of `question`, or `None` when it is not on the sheet.
    #[must_use]
    pub fn position_of(&self, question: QuestionNumber) -> Option<CellPosition> {
        if !self.question_count.contains(question) {
            return None;
        }
        let idx = question.offset()?;
        Some(CellPosition {
            column: idx / self.rows(),
            row: idx % self.rows(),
        })
    }

    /// Question shown at `(column, row)`, or `None` for an empty cell.
    #[must_use]
    pub fn question_at(&self, column: usize, row: usize) -> Option<QuestionNumber> {
        if row >= self.rows() {
            return None;
        }
        let number = column
            .checked_mul(self.rows())
            .and_then(|base| base.checked_add(row + 1))
            .and_then(|n| u16::try_from(n).ok())?;
        let question = QuestionNumber::new(number);
        self.question_count.contains(question).then_some(question)
    }

    /// Number of occupied rows in `column`.
    #[must_use]
    pub fn column_len(&self, column: usize) -> usize {
        let total = usize::from(self.question_count.value());
        let start = column.saturating_mul(self.rows());
        total.saturating_sub(start).min(self.rows())
    }
}
