//! List use-case service.
//!
//! # Responsibility
//! - Provide CRUD entry points for the HTTP boundary.
//! - Fix the order in which update preconditions are checked.
//!
//! # Invariants
//! - Update checks existence, then name, then uniqueness.
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::list::{validate_list_name, List, ListDraft, ListId};
use crate::repo::list_repo::{ListRepository, RepoError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for list use-cases.
#[derive(Debug)]
pub enum ListServiceError {
    /// Name is blank after trim.
    InvalidName,
    /// Another list already uses the requested name.
    DuplicateName,
    /// Target list does not exist.
    ListNotFound(ListId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ListServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "list name must not be empty"),
            Self::DuplicateName => write!(f, "list name is already in use"),
            Self::ListNotFound(id) => write!(f, "list not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ListServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ListServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(_) => Self::InvalidName,
            RepoError::DuplicateName(_) => Self::DuplicateName,
            RepoError::NotFound(id) => Self::ListNotFound(id),
            other => Self::Repo(other),
        }
    }
}

pub type ListServiceResult<T> = Result<T, ListServiceError>;

/// List service facade over repository implementations.
pub struct ListService<R: ListRepository> {
    repo: R,
}

impl<R: ListRepository> ListService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every list ordered by id. Empty stores yield an empty vec.
    pub fn list_lists(&self) -> ListServiceResult<Vec<List>> {
        Ok(self.repo.list_lists()?)
    }

    /// Gets one list or reports `ListNotFound`.
    pub fn get_list(&self, id: ListId) -> ListServiceResult<List> {
        self.repo
            .get_list(id)?
            .ok_or(ListServiceError::ListNotFound(id))
    }

    /// Creates a list from a draft.
    pub fn create_list(&self, draft: &ListDraft) -> ListServiceResult<List> {
        validate_list_name(&draft.name).map_err(|_| ListServiceError::InvalidName)?;
        let list = self.repo.create_list(&draft.name)?;
        info!("event=list_create module=service status=ok list_id={}", list.id);
        Ok(list)
    }

    /// Renames an existing list.
    ///
    /// # Contract
    /// - Missing target wins over an invalid draft.
    /// - Renaming a list to its current name succeeds.
    pub fn update_list(&self, id: ListId, draft: &ListDraft) -> ListServiceResult<List> {
        self.ensure_exists(id)?;
        validate_list_name(&draft.name).map_err(|_| ListServiceError::InvalidName)?;
        let list = self.repo.update_list(id, &draft.name)?;
        info!("event=list_update module=service status=ok list_id={}", list.id);
        Ok(list)
    }

    /// Hard-deletes one list.
    pub fn delete_list(&self, id: ListId) -> ListServiceResult<()> {
        self.repo.delete_list(id)?;
        info!("event=list_delete module=service status=ok list_id={id}");
        Ok(())
    }

    /// Reports `ListNotFound` unless the list exists.
    pub fn ensure_exists(&self, id: ListId) -> ListServiceResult<()> {
        if self.repo.get_list(id)?.is_none() {
            debug!("event=list_lookup module=service status=miss list_id={id}");
            return Err(ListServiceError::ListNotFound(id));
        }
        Ok(())
    }
}
