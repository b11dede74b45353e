//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid operating hours: {0}")]
    InvalidOperatingHours(String),

    #[error("Room not found: {0}")]
    RoomNotFound(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
