//! Domain model for the list resource.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every list is identified by a storage-assigned `ListId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod list;
