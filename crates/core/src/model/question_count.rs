use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionNumber;

/// Smallest question count a sheet can have.
pub const MIN_QUESTIONS: u16 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionCountError {
    #[error("please enter a whole number")]
    NotANumber,

    #[error("number of questions must be between {min} and {max}")]
    OutOfRange { min: u16, max: u16 },
}

/// Number of questions on a sheet, fixed once a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionCount(u16);

impl QuestionCount {
    /// Validate a count against the configured maximum.
    ///
    /// # Errors
    ///
    /// Returns `QuestionCountError::OutOfRange` if `value` is outside
    /// `[1, max]`.
    pub fn new(value: u32, max: u16) -> Result<Self, QuestionCountError> {
        let out_of_range = QuestionCountError::OutOfRange {
            min: MIN_QUESTIONS,
            max,
        };
        let value = u16::try_from(value).map_err(|_| out_of_range.clone())?;
        if !(MIN_QUESTIONS..=max).contains(&value) {
            return Err(out_of_range);
        }
        Ok(Self(value))
    }

    /// Parse user input such as `" 25 "`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionCountError::NotANumber` for anything that is not a
    /// non-negative integer, or `OutOfRange` for integers outside `[1, max]`.
    pub fn parse(raw: &str, max: u16) -> Result<Self, QuestionCountError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(QuestionCountError::NotANumber);
        }
        // All digits but too wide for u32 is still a number, just a huge one.
        let value = trimmed.parse::<u32>().unwrap_or(u32::MAX);
        Self::new(value, max)
    }

    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn contains(&self, question: QuestionNumber) -> bool {
        (MIN_QUESTIONS..=self.0).contains(&question.value())
    }

    /// All question numbers on the sheet, in order.
    pub fn questions(&self) -> impl Iterator<Item = QuestionNumber> + use<> {
        (MIN_QUESTIONS..=self.0).map(QuestionNumber::new)
    }
}
