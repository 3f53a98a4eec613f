//! Waitline - interactive walk-in waitlist shell
//!
//! Composition root: owns the single in-memory `QueueStore` for the
//! session and drives it from stdin commands. Everything dies with the
//! process; there is no persistence by design.

mod repl;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use waitline_core::application::QueueStore;
use waitline_core::port::{RandomIdProvider, SystemTimeProvider};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "waitline")]
#[command(about = "Walk-in waitlist: host a queue, share the code, call guests", long_about = None)]
#[command(version)]
struct Cli {
    /// Log output format: "pretty" or "json"
    #[arg(long, env = "WAITLINE_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("waitline=warn"))
        .expect("Failed to create env filter");

    match cli.log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    info!("Waitline v{} starting", VERSION);

    // DI wiring: the store owns nothing but state; ids and time come in
    // through ports
    let mut store = QueueStore::new(Arc::new(RandomIdProvider), Arc::new(SystemTimeProvider));

    repl::run(&mut store)
}
