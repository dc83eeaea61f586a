use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based index of a question on the sheet
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionNumber(u16);

impl QuestionNumber {
    /// Creates a new `QuestionNumber`
    #[must_use]
    pub fn new(number: u16) -> Self {
        Self(number)
    }

    /// Returns the underlying u16 value
    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }

    /// Zero-based offset into per-question storage.
    ///
    /// Returns `None` for question 0, which never exists on a sheet.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        usize::from(self.0).checked_sub(1)
    }
}

/// A single selectable answer label, e.g. `A`
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OptionLabel(char);

impl OptionLabel {
    /// Creates a new `OptionLabel`
    #[must_use]
    pub fn new(label: char) -> Self {
        Self(label)
    }

    /// Returns the underlying character
    #[must_use]
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Debug for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionNumber({})", self.0)
    }
}

impl fmt::Debug for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionLabel({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Conversions ───────────────────────────────────────────────────────────────

impl From<u16> for QuestionNumber {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl From<char> for OptionLabel {
    fn from(value: char) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_number_offset_is_zero_based() {
        assert_eq!(QuestionNumber::new(1).offset(), Some(0));
        assert_eq!(QuestionNumber::new(200).offset(), Some(199));
        assert_eq!(QuestionNumber::new(0).offset(), None);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(QuestionNumber::new(7).to_string(), "7");
        assert_eq!(format!("{:?}", QuestionNumber::new(7)), "QuestionNumber(7)");
        assert_eq!(OptionLabel::new('C').to_string(), "C");
        assert_eq!(format!("{:?}", OptionLabel::new('C')), "OptionLabel(C)");
    }
}
