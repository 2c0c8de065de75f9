//! # Glossary HTTP Server Module
//!
//! Binds the glossary router to a socket.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/` - Welcome message
//! - `/terms/*` - Term CRUD and filtered listing
//! - `/stats/` - Aggregate statistics

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
