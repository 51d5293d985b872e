use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ticket::{Identity, IssueCreateInput, Team, Ticket};

/// Failure reported by the remote tracker. Callers classify it by its message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type TransportResult<T> = Result<T, TransportError>;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    /// Identity behind the configured credentials, `None` when it cannot be resolved.
    async fn viewer(&self) -> TransportResult<Option<Identity>>;
    async fn team(&self, team_id: &str) -> TransportResult<Team>;
    /// `Ok(None)` means the call went through but no issue came back.
    async fn create_issue(&self, input: &IssueCreateInput) -> TransportResult<Option<Ticket>>;
}
