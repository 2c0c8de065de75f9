//! Lifecycle events
//!
//! Events are explicit and typed. Each one maps to a stable name that is
//! attached to the emitted log line as the `event` field.

use std::fmt;

/// Observable events in the glossary service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Startup complete, ready to serve
    BootComplete,
    /// Shutdown initiated
    ShutdownStart,
    /// Shutdown complete
    ShutdownComplete,

    // Configuration
    /// Configuration loaded
    ConfigLoaded,
    /// Database opened and schema ensured
    DatabaseOpened,

    // Seeding
    /// Initial terms inserted into an empty store
    SeedApplied,
    /// Store already populated, seeding skipped
    SeedSkipped,

    // Term operations
    /// Term created
    TermCreated,
    /// Term updated
    TermUpdated,
    /// Term deleted
    TermDeleted,
    /// Request rejected before reaching the store
    RequestRejected,
    /// Storage failure while serving a request
    StorageFailed,

    // Server operations
    /// Server serving (ready for requests)
    Serving,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "GLOSSARY_STARTUP_BEGIN",
            Event::BootComplete => "GLOSSARY_STARTUP_COMPLETE",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatabaseOpened => "DATABASE_OPENED",

            Event::SeedApplied => "SEED_APPLIED",
            Event::SeedSkipped => "SEED_SKIPPED",

            Event::TermCreated => "TERM_CREATED",
            Event::TermUpdated => "TERM_UPDATED",
            Event::TermDeleted => "TERM_DELETED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::StorageFailed => "STORAGE_FAILED",

            Event::Serving => "SERVING",
        }
    }

    /// Returns true if this event indicates a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::StorageFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
