use thiserror::Error;

use crate::model::ids::{OptionLabel, QuestionNumber};
use crate::model::options::OptionSet;
use crate::model::question_count::QuestionCount;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetError {
    #[error("question {question} is not on a sheet of {count} questions")]
    QuestionOutOfRange { question: u16, count: u16 },

    #[error("option {0} is not one of the sheet's options")]
    UnknownOption(OptionLabel),
}

//
// ─── RESPONSE SHEET ────────────────────────────────────────────────────────────
//

/// In-memory answers for one sheet.
///
/// Every question in `1..=count` has exactly one slot; a slot holds at most
/// one selected option. Slots are never added or removed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSheet {
    count: QuestionCount,
    options: OptionSet,
    answers: Vec<Option<OptionLabel>>,
}

impl ResponseSheet {
    #[must_use]
    pub fn new(count: QuestionCount, options: OptionSet) -> Self {
        Self {
            count,
            options,
            answers: vec![None; usize::from(count.value())],
        }
    }

    #[must_use]
    pub fn question_count(&self) -> QuestionCount {
        self.count
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Record `option` as the answer to `question`, replacing any prior answer.
    ///
    /// # Errors
    ///
    /// Returns `SheetError` if the question is not on this sheet or the option
    /// is not in the sheet's option set. The sheet is left unchanged.
    pub fn select(
        &mut self,
        question: QuestionNumber,
        option: OptionLabel,
    ) -> Result<(), SheetError> {
        if !self.options.contains(option) {
            return Err(SheetError::UnknownOption(option));
        }
        let slot = self.slot_mut(question)?;
        *slot = Some(option);
        Ok(())
    }

    /// The stored answer, or `None` when unset. Questions outside the sheet
    /// read as unset.
    #[must_use]
    pub fn get(&self, question: QuestionNumber) -> Option<OptionLabel> {
        question
            .offset()
            .and_then(|idx| self.answers.get(idx))
            .copied()
            .flatten()
    }

    #[must_use]
    pub fn is_selected(&self, question: QuestionNumber, option: OptionLabel) -> bool {
        self.get(question) == Some(option)
    }

    /// Unset every answer.
    pub fn clear(&mut self) {
        self.answers.iter_mut().for_each(|slot| *slot = None);
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|slot| slot.is_some()).count()
    }

    /// `(question, answer)` pairs in question order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionNumber, Option<OptionLabel>)> + '_ {
        self.count.questions().zip(self.answers.iter().copied())
    }

    fn slot_mut(&mut self, question: QuestionNumber) -> Result<&mut Option<OptionLabel>, SheetError> {
        let out_of_range = SheetError::QuestionOutOfRange {
            question: question.value(),
            count: self.count.value(),
        };
        question
            .offset()
            .and_then(|idx| self.answers.get_mut(idx))
            .ok_or(out_of_range)
    }
}
