//! Observability for the glossary service
//!
//! - Structured logging through `tracing`
//! - Typed lifecycle events with stable names
//! - Filter level from `RUST_LOG`, falling back to the configured level
//!
//! # Usage
//!
//! ```ignore
//! use glossary::observability::{init_tracing, log_event, Event};
//!
//! init_tracing("info", false);
//! log_event(Event::BootStart);
//! tracing::info!(event = Event::TermCreated.as_str(), id = 4, "created");
//! ```

mod events;

pub use events::Event;

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(default_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let result = if json {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    // A subscriber is already installed (tests, embedding)
    let _ = result;
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_failure() {
        error!(event = event.as_str());
    } else {
        info!(event = event.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_tracing("debug", false);
        init_tracing("info", true);
    }

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::BootStart);
        log_event(Event::StorageFailed);
    }
}
