#![forbid(unsafe_code)]

pub mod catalog;
pub mod json_file;
pub mod repository;

pub use catalog::{CatalogLoadError, load_catalog};
pub use json_file::JsonFileRepository;
pub use repository::{InMemoryRepository, PerformanceRepository, StorageError};
