use thiserror::Error;

use crate::model::{QuestionCountError, SheetConfigError, SheetError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    QuestionCount(#[from] QuestionCountError),
    #[error(transparent)]
    Sheet(#[from] SheetError),
    #[error(transparent)]
    Config(#[from] SheetConfigError),
}
