// Port Layer - Interfaces for injected capabilities

pub mod id_provider; // For deterministic testing
pub mod time_provider;

// Re-exports
pub use id_provider::{IdProvider, RandomIdProvider};
pub use time_provider::{SystemTimeProvider, TimeProvider};
