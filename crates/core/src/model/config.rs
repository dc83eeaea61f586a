use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::options::{OptionSet, OptionSetError};

pub const DEFAULT_MAX_QUESTIONS: u16 = 200;
pub const DEFAULT_PAGE_HEIGHT: u16 = 10;
pub const DEFAULT_FIELD_WIDTH: usize = 8;
pub const DEFAULT_OUTPUT_FILE: &str = "omr_responses.txt";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetConfigError {
    #[error(transparent)]
    Options(#[from] OptionSetError),

    #[error("maximum question count must be > 0")]
    InvalidMaxQuestions,

    #[error("page height must be > 0")]
    InvalidPageHeight,

    #[error("field width must be > 0")]
    InvalidFieldWidth,

    #[error("output file cannot be empty")]
    EmptyOutputFile,
}

/// Validated, immutable sheet configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    options: OptionSet,
    max_questions: u16,
    page_height: u16,
    field_width: usize,
    output_file: PathBuf,
}

#[derive(Clone, Debug, Default)]
pub struct SheetConfigDraft {
    pub options: Option<Vec<char>>,
    pub max_questions: Option<u16>,
    pub page_height: Option<u16>,
    pub field_width: Option<usize>,
    pub output_file: Option<PathBuf>,
}

impl SheetConfigDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill unset fields with defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns `SheetConfigError` if any value is zero/empty or the option
    /// labels are invalid.
    pub fn validate(self) -> Result<SheetConfig, SheetConfigError> {
        let options = match self.options {
            Some(labels) => OptionSet::new(labels)?,
            None => OptionSet::abcd(),
        };
        let max_questions = self.max_questions.unwrap_or(DEFAULT_MAX_QUESTIONS);
        if max_questions == 0 {
            return Err(SheetConfigError::InvalidMaxQuestions);
        }
        let page_height = self.page_height.unwrap_or(DEFAULT_PAGE_HEIGHT);
        if page_height == 0 {
            return Err(SheetConfigError::InvalidPageHeight);
        }
        let field_width = self.field_width.unwrap_or(DEFAULT_FIELD_WIDTH);
        if field_width == 0 {
            return Err(SheetConfigError::InvalidFieldWidth);
        }
        let output_file = self
            .output_file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
        if output_file.as_os_str().is_empty() {
            return Err(SheetConfigError::EmptyOutputFile);
        }

        Ok(SheetConfig {
            options,
            max_questions,
            page_height,
            field_width,
            output_file,
        })
    }
}

impl SheetConfig {
    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    #[must_use]
    pub fn max_questions(&self) -> u16 {
        self.max_questions
    }

    /// Rows per column in both the on-screen preview and the exported file.
    #[must_use]
    pub fn page_height(&self) -> u16 {
        self.page_height
    }

    #[must_use]
    pub fn field_width(&self) -> usize {
        self.field_width
    }

    #[must_use]
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            options: OptionSet::abcd(),
            max_questions: DEFAULT_MAX_QUESTIONS,
            page_height: DEFAULT_PAGE_HEIGHT,
            field_width: DEFAULT_FIELD_WIDTH,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}
