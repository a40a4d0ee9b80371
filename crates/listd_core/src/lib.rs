//! Core domain logic for listd.
//! This crate is the single source of truth for list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{List, ListDraft, ListId, ListValidationError};
pub use repo::list_repo::{ListRepository, RepoError, RepoResult, SqliteListRepository};
pub use service::list_service::{ListService, ListServiceError, ListServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
