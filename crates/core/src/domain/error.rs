// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid queue code: {0:?} (expected {expected} characters from the code alphabet)", expected = crate::domain::code::CODE_LEN)]
    InvalidQueueCode(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
