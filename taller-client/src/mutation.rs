//! Mutation dispatch
//!
//! Fire-and-refetch: each mutation sends one request and, on success,
//! triggers exactly one full-collection reload of the owning view.
//! There is no optimistic update and no partial merge; a failed
//! mutation leaves the last loaded collection visible untouched.

use crate::list::{CollectionSource, ListViewModel};
use crate::ClientResult;
use async_trait::async_trait;
use shared::dto::{CreateRequestPayload, NewWorkOrder, UpdateDescriptionPayload};

/// A source that can apply mutations of type `M` against the server
#[async_trait]
pub trait MutationSink<M: Send + 'static>: Send + Sync {
    async fn apply(&self, mutation: M) -> ClientResult<()>;
}

/// End-user mutations on service requests
#[derive(Debug, Clone)]
pub enum RequestMutation {
    Create(CreateRequestPayload),
    UpdateDescription {
        id: i64,
        payload: UpdateDescriptionPayload,
    },
    Delete {
        id: i64,
    },
    AcceptQuote {
        id: i64,
    },
    RejectQuote {
        id: i64,
    },
}

/// Admin mutations on work orders
#[derive(Debug, Clone)]
pub enum WorkOrderMutation {
    Create(NewWorkOrder),
}

impl<S: CollectionSource> ListViewModel<S> {
    /// Send one mutation, then resynchronize with a single full reload.
    ///
    /// The exclusive borrow serializes mutations on one view-model, so
    /// a second mutation cannot start before the refetch completes.
    /// The returned result reflects the mutation itself; a failed
    /// refetch only surfaces through the view's error state, leaving
    /// the last loaded collection visible.
    pub async fn mutate<M>(&mut self, mutation: M) -> ClientResult<()>
    where
        M: Send + 'static,
        S: MutationSink<M>,
    {
        self.source().apply(mutation).await?;
        if let Err(err) = self.load().await {
            tracing::warn!(error = %err, "Refetch after mutation failed");
        }
        Ok(())
    }
}
