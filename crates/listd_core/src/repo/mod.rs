//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateName`) in
//!   addition to DB transport errors.

pub mod list_repo;
