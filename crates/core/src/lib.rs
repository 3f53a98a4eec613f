// Waitline Core - Domain Logic & Ports
// NO infrastructure dependencies (hexagonal layout)

pub mod application;
pub mod domain;
pub mod port;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
