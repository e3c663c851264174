mod catalog;
mod item;
mod performance;
mod round;

pub use catalog::{Catalog, CatalogError};
pub use item::{Item, ItemCode, ItemError};
pub use performance::{ItemStats, PerformanceRecord};
pub use round::{GuessOutcome, QuizRound};
