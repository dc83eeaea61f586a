#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod layout;
pub mod model;

pub use error::Error;
pub use format::TextFormatter;
pub use layout::{CellPosition, Layout, columns_for};
