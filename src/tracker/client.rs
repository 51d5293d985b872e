use std::sync::Arc;

use tracing::debug;

use crate::domain::ticket::{Identity, IssueCreateInput, Team, Ticket, TicketDraft};
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;
use crate::tracker::retry::{RetryPolicy, is_authentication_failure};

/// Remote ticket client: classifies transport failures into [`AppError`] kinds and
/// retries rate-limited ticket creation.
pub struct TicketClient {
    tracker: Arc<dyn IssueTrackerService>,
    team_id: String,
    default_state_id: Option<String>,
    retry: RetryPolicy,
}

impl TicketClient {
    pub fn new(
        tracker: Arc<dyn IssueTrackerService>,
        team_id: String,
        default_state_id: Option<String>,
    ) -> Self {
        Self {
            tracker,
            team_id,
            default_state_id,
            retry: RetryPolicy::default(),
        }
    }

    pub async fn verify_credentials(&self) -> AppResult<Identity> {
        match self.tracker.viewer().await {
            Ok(Some(identity)) if !identity.id.is_empty() => Ok(identity),
            Ok(_) => Err(AppError::Authentication(
                "Unable to verify API key.".to_string(),
            )),
            Err(err) if is_authentication_failure(&err) => {
                Err(AppError::Authentication(err.message))
            }
            Err(err) => Err(AppError::Network(err.message)),
        }
    }

    pub async fn fetch_team(&self, team_id: &str) -> AppResult<Team> {
        self.tracker
            .team(team_id)
            .await
            .map_err(|err| AppError::Network(format!("Failed to fetch team: {}", err.message)))
    }

    pub async fn create_ticket(&self, draft: TicketDraft) -> AppResult<Ticket> {
        let input = IssueCreateInput {
            team_id: self.team_id.clone(),
            title: draft.title,
            description: draft.description,
            parent_id: draft.parent_id,
            state_id: self.default_state_id.clone(),
        };
        debug!(title = %input.title, parent = ?input.parent_id, "creating issue");

        let created = self
            .retry
            .run(|| self.tracker.create_issue(&input))
            .await
            .map_err(|err| AppError::Network(err.message))?;

        created.ok_or_else(|| {
            AppError::Network("Failed to create issue, no issue returned.".to_string())
        })
    }
}
