//! HTTP surface for listd.
//!
//! # Responsibility
//! - Expose list CRUD over HTTP with the `Results` JSON envelope.
//! - Map core errors to status codes at a single boundary.
//!
//! # Invariants
//! - Handlers never touch SQL directly; they go through `ListService`.
//! - Handlers never panic on bad input.

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use envelope::Envelope;
pub use error::ApiError;
pub use router::app;
pub use server::{run, serve, ServeError};
pub use state::AppState;
