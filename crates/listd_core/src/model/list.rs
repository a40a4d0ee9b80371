//! List domain model.
//!
//! # Responsibility
//! - Define the canonical `List` record and its request-side draft.
//! - Own name validation shared by repository and service layers.
//!
//! # Invariants
//! - `id` is assigned by storage, starts at 1 and never changes.
//! - `name` is never blank and is unique across all lists.
//! - Wire field names are `ID` and `Name`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier of a list.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ListId = i64;

/// Validation failures for list fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListValidationError {
    /// Name is empty or whitespace only.
    EmptyName,
    /// Identifier is outside the storage-assigned range (`>= 1`).
    InvalidId(ListId),
}

impl Display for ListValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "list name must not be empty"),
            Self::InvalidId(id) => write!(f, "list id must be >= 1, got {id}"),
        }
    }
}

impl Error for ListValidationError {}

/// Canonical list record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    #[serde(rename = "ID")]
    pub id: ListId,
    #[serde(rename = "Name")]
    pub name: String,
}

impl List {
    /// Builds a list record from persisted values.
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Checks record invariants.
    ///
    /// # Errors
    /// - `InvalidId` when `id < 1`.
    /// - `EmptyName` when `name` is blank.
    pub fn validate(&self) -> Result<(), ListValidationError> {
        if self.id < 1 {
            return Err(ListValidationError::InvalidId(self.id));
        }
        validate_list_name(&self.name)
    }
}

/// Create/update payload.
///
/// A missing `Name` decodes as an empty string so that the validation path,
/// not the decoder, reports it. Any `ID` field in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDraft {
    #[serde(rename = "Name", default)]
    pub name: String,
}

impl ListDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Rejects blank list names.
pub fn validate_list_name(name: &str) -> Result<(), ListValidationError> {
    if name.trim().is_empty() {
        return Err(ListValidationError::EmptyName);
    }
    Ok(())
}
