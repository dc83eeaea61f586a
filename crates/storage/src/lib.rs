#![forbid(unsafe_code)]

pub mod file;
pub mod repository;

pub use file::FileExportRepository;
pub use repository::{ExportLocation, ExportRepository, InMemoryRepository, Storage, StorageError};
