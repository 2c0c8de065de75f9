//! glossary - A glossary of web rendering techniques served over HTTP
//!
//! Terms (SSR, SSG, CSR, ISR, DSR and related concepts) live in a single
//! SQLite table and are exposed through CRUD, filtered listing and
//! aggregate statistics endpoints.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod schema;
pub mod seed;
pub mod stats;
pub mod storage;
