#![forbid(unsafe_code)]

pub mod error;
pub mod quiz_service;

pub use quiz_core::Clock;

pub use error::QuizServiceError;
pub use quiz_service::QuizService;
