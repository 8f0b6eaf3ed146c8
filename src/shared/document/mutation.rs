use uuid::Uuid;

use super::collection::{prepend, remove_by_id, Identified};
use super::{DocumentStore, DocumentStoreError, Versioned};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MutationError<E> {
    #[error("Parent document not found")]
    ParentNotFound,

    #[error("Entry not found")]
    EntryNotFound,

    /// An entry with the same id is already in the collection.
    #[error("Entry already present")]
    DuplicateEntry,

    /// The caller's own check refused the change.
    #[error("Mutation rejected: {0}")]
    Rejected(E),

    /// Every attempt lost the race against another writer.
    #[error("Document was modified concurrently")]
    Conflict,

    #[error("Duplicate value for {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl<E> From<DocumentStoreError> for MutationError<E> {
    fn from(err: DocumentStoreError) -> Self {
        match err {
            DocumentStoreError::Stale => MutationError::Conflict,
            DocumentStoreError::Duplicate(field) => MutationError::Duplicate(field),
            DocumentStoreError::DatabaseError(msg) => MutationError::DatabaseError(msg),
        }
    }
}

/// Read-modify-write over one parent document with version-checked writes.
///
/// A stale write re-reads the parent and re-applies the change, at most
/// `max_attempts` times in total.
pub struct NestedCollection<'a, S: ?Sized> {
    store: &'a S,
    max_attempts: u32,
}

impl<'a, S: ?Sized> NestedCollection<'a, S> {
    pub fn new(store: &'a S, max_attempts: u32) -> Self {
        Self {
            store,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Applies `apply` to a freshly loaded parent and persists the result.
    ///
    /// Nothing is written when `apply` fails.
    pub async fn mutate<D, T, E, F>(
        &self,
        locator: Uuid,
        mut apply: F,
    ) -> Result<(D, T), MutationError<E>>
    where
        S: DocumentStore<D>,
        D: Versioned + Send + Sync + 'static,
        T: Send,
        E: Send,
        F: FnMut(&mut D) -> Result<T, MutationError<E>> + Send,
    {
        for attempt in 1..=self.max_attempts {
            let mut document = self
                .store
                .load(locator)
                .await?
                .ok_or(MutationError::ParentNotFound)?;

            let outcome = apply(&mut document)?;

            match self.store.replace(&document).await {
                Ok(saved) => return Ok((saved, outcome)),
                Err(DocumentStoreError::Stale) => {
                    tracing::debug!(
                        %locator,
                        attempt,
                        max_attempts = self.max_attempts,
                        "Stale document write, reloading"
                    );
                }
                Err(other) => return Err(other.into()),
            }
        }

        tracing::warn!(%locator, "Giving up on document write after repeated conflicts");
        Err(MutationError::Conflict)
    }

    /// Inserts `entry` at the head of the collection selected by `entries`.
    ///
    /// `guard` sees the parent before the insert and may reject it. An entry
    /// whose id is already present yields [`MutationError::DuplicateEntry`].
    pub async fn push<D, T, E, A, G>(
        &self,
        locator: Uuid,
        entries: A,
        guard: G,
        entry: T,
    ) -> Result<D, MutationError<E>>
    where
        S: DocumentStore<D>,
        D: Versioned + Send + Sync + 'static,
        T: Identified + Clone + Send + Sync,
        E: Send,
        A: Fn(&mut D) -> &mut Vec<T> + Send + Sync,
        G: Fn(&D) -> Result<(), E> + Send + Sync,
    {
        let (saved, ()) = self
            .mutate(locator, |document: &mut D| {
                guard(document).map_err(MutationError::Rejected)?;

                let target = entries(document);
                if target.iter().any(|existing| existing.id() == entry.id()) {
                    return Err(MutationError::DuplicateEntry);
                }

                prepend(target, entry.clone());
                Ok(())
            })
            .await?;

        Ok(saved)
    }

    /// Removes the entry with `id` from the collection selected by `entries`.
    ///
    /// `guard` sees the parent and the removed entry and may veto the removal.
    pub async fn pull<D, T, E, A, G>(
        &self,
        locator: Uuid,
        entries: A,
        id: Uuid,
        guard: G,
    ) -> Result<(D, T), MutationError<E>>
    where
        S: DocumentStore<D>,
        D: Versioned + Send + Sync + 'static,
        T: Identified + Send,
        E: Send,
        A: Fn(&mut D) -> &mut Vec<T> + Send + Sync,
        G: Fn(&D, &T) -> Result<(), E> + Send + Sync,
    {
        self.mutate(locator, |document: &mut D| {
            let removed =
                remove_by_id(entries(document), id).ok_or(MutationError::EntryNotFound)?;
            guard(document, &removed).map_err(MutationError::Rejected)?;
            Ok(removed)
        })
        .await
    }
}
