mod config;
mod ids;
mod options;
mod question_count;
mod sheet;

pub use config::{
    DEFAULT_FIELD_WIDTH, DEFAULT_MAX_QUESTIONS, DEFAULT_OUTPUT_FILE, DEFAULT_PAGE_HEIGHT,
    SheetConfig, SheetConfigDraft, SheetConfigError,
};
pub use ids::{OptionLabel, QuestionNumber};
pub use options::{OptionSet, OptionSetError};
pub use question_count::{MIN_QUESTIONS, QuestionCount, QuestionCountError};
pub use sheet::{ResponseSheet, SheetError};
