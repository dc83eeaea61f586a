use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::OptionLabel;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionSetError {
    #[error("option set cannot be empty")]
    Empty,

    #[error("option label {0:?} is not alphanumeric")]
    InvalidLabel(char),

    #[error("option label {0:?} appears more than once")]
    Duplicate(char),
}

/// Ordered, fixed sequence of selectable labels.
///
/// Labels are unique and keep the order they were given in, which is also
/// the left-to-right order of the ovals on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    labels: Vec<OptionLabel>,
}

impl OptionSet {
    /// Build an option set from raw characters.
    ///
    /// # Errors
    ///
    /// Returns `OptionSetError` if the set is empty, a label is not
    /// alphanumeric, or a label repeats.
    pub fn new(labels: impl IntoIterator<Item = char>) -> Result<Self, OptionSetError> {
        let mut out: Vec<OptionLabel> = Vec::new();
        for raw in labels {
            if !raw.is_alphanumeric() {
                return Err(OptionSetError::InvalidLabel(raw));
            }
            let label = OptionLabel::new(raw);
            if out.contains(&label) {
                return Err(OptionSetError::Duplicate(raw));
            }
            out.push(label);
        }
        if out.is_empty() {
            return Err(OptionSetError::Empty);
        }
        Ok(Self { labels: out })
    }

    /// The classic four-choice set `A B C D`.
    #[must_use]
    pub fn abcd() -> Self {
        Self {
            labels: ['A', 'B', 'C', 'D'].into_iter().map(OptionLabel::new).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, label: OptionLabel) -> bool {
        self.labels.contains(&label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[OptionLabel] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = OptionLabel> + '_ {
        self.labels.iter().copied()
    }
}

impl Default for OptionSet {
    fn default() -> Self {
        Self::abcd()
    }
}
