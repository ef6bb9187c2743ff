use std::fmt;
use std::future::Future;

use chrono::{DateTime, Utc};
use futures::future::{select, Either, LocalBoxFuture};
use serde::{Deserialize, Serialize};

use crate::contact::ContactSubmission;

pub type AttemptId = u64;

/// What the store hands back for a created record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHandle {
    pub id: String,
    pub collection: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    Network(String),
    Rejected { status: u16, message: String },
    Malformed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Network(e) => write!(f, "network error: {}", e),
            StoreError::Rejected { status, message } => {
                write!(f, "store rejected the record ({}): {}", status, message)
            }
            StoreError::Malformed(e) => write!(f, "unexpected store response: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Append-only document store. One call creates one document; the store
/// stamps it with its own creation time.
pub trait DocumentStore {
    fn create_record(
        &self,
        collection: &str,
        record: &ContactSubmission,
    ) -> LocalBoxFuture<'static, Result<DocumentHandle, StoreError>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Stored(DocumentHandle),
    Rejected(StoreError),
    TimedOut,
}

impl SubmitOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, SubmitOutcome::Stored(_))
    }
}

/// First-settled-wins race between a store write and a timeout.
///
/// When the timeout wins the write future is dropped here; whatever it
/// would have produced never reaches the caller.
pub async fn race_submission<W, T>(write: W, timeout: T) -> SubmitOutcome
where
    W: Future<Output = Result<DocumentHandle, StoreError>>,
    T: Future<Output = ()>,
{
    match select(Box::pin(write), Box::pin(timeout)).await {
        Either::Left((Ok(handle), _)) => SubmitOutcome::Stored(handle),
        Either::Left((Err(e), _)) => SubmitOutcome::Rejected(e),
        Either::Right(((), pending_write)) => {
            log::warn!("store write timed out, detaching it");
            drop(pending_write);
            SubmitOutcome::TimedOut
        }
    }
}

/// Makes exactly one store call for `attempt` and races it against `timeout`.
pub async fn settle_attempt<S, T>(
    store: &S,
    collection: &str,
    attempt: AttemptId,
    record: &ContactSubmission,
    timeout: T,
) -> (AttemptId, SubmitOutcome)
where
    S: DocumentStore + ?Sized,
    T: Future<Output = ()>,
{
    let write = store.create_record(collection, record);
    let outcome = race_submission(write, timeout).await;
    match &outcome {
        SubmitOutcome::Stored(handle) => {
            log::info!("attempt {} stored as {}/{}", attempt, handle.collection, handle.id)
        }
        SubmitOutcome::Rejected(e) => log::error!("attempt {} failed: {}", attempt, e),
        SubmitOutcome::TimedOut => log::error!("attempt {} timed out", attempt),
    }
    (attempt, outcome)
}
