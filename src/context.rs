use std::sync::Arc;

use crate::config::AppConfig;
use crate::infra::linear::LinearClient;
use crate::services::IssueTrackerService;
use crate::tracker::TicketClient;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
}

impl AppContext {
    pub fn new(config: AppConfig, issue_tracker: Arc<dyn IssueTrackerService>) -> Self {
        Self {
            config,
            issue_tracker,
        }
    }

    /// Context backed by the Linear GraphQL API.
    pub fn linear(config: AppConfig) -> Self {
        let issue_tracker = Arc::new(LinearClient::new(&config.api_url, &config.api_key));
        Self::new(config, issue_tracker)
    }

    pub fn ticket_client(&self) -> TicketClient {
        TicketClient::new(
            self.issue_tracker.clone(),
            self.config.team_id.clone(),
            self.config.default_state_id.clone(),
        )
    }
}
