#![forbid(unsafe_code)]

pub mod error;
pub mod sheet;

pub use error::SheetServiceError;
pub use sheet::{SaveReceipt, SheetService, SheetSession};
