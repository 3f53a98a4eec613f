// Domain Layer - Pure business logic and entities

pub mod code;
pub mod error;
pub mod person;
pub mod queue;
pub mod wait;

// Re-exports
pub use code::{QueueCode, CODE_ALPHABET, CODE_LEN};
pub use error::DomainError;
pub use person::{Person, PersonId};
pub use queue::Queue;
