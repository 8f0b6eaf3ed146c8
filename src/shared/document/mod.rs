//! Versioned parent documents holding ordered nested collections.
//!
//! Profiles (experience, education) and posts (likes, comments) are stored as
//! whole documents. Every nested mutation goes through [`NestedCollection`],
//! which loads the parent, applies the change in memory and writes it back
//! conditionally on the version it read.

mod collection;
mod mutation;

pub use collection::{prepend, remove_by_id, Identified};
pub use mutation::{MutationError, NestedCollection};

use async_trait::async_trait;
use uuid::Uuid;

pub trait Versioned {
    /// Version observed when the document was loaded.
    fn version(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentStoreError {
    /// The stored version moved on since the document was read.
    #[error("Document was modified concurrently")]
    Stale,

    /// A unique key (e.g. a profile handle) is already taken.
    #[error("Duplicate value for {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Load/replace access to one kind of parent document.
#[async_trait]
pub trait DocumentStore<D>: Send + Sync
where
    D: Versioned + Send + Sync + 'static,
{
    /// Fetches the document addressed by `locator`. Each store documents what
    /// the locator means (owner id for profiles, post id for posts).
    async fn load(&self, locator: Uuid) -> Result<Option<D>, DocumentStoreError>;

    /// Replaces the stored document if its version still equals
    /// `document.version()`, returning the saved copy with the bumped version.
    async fn replace(&self, document: &D) -> Result<D, DocumentStoreError>;
}
