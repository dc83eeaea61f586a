mod service;
mod session;

// Public API of the sheet subsystem.
pub use crate::error::SheetServiceError;
pub use service::{SaveReceipt, SheetService};
pub use session::SheetSession;
