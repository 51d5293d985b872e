use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::domain::ticket::{Identity, IssueCreateInput, Team, Ticket};
use crate::services::{IssueTrackerService, TransportError, TransportResult};

pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

const VIEWER_QUERY: &str = "query Viewer { viewer { id name } }";
const TEAM_QUERY: &str = "query Team($id: String!) { team(id: $id) { id name } }";
const ISSUE_CREATE_MUTATION: &str = "mutation IssueCreate($input: IssueCreateInput!) { \
     issueCreate(input: $input) { success issue { id identifier url } } }";

pub struct LinearClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl LinearClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    async fn execute<V, D>(&self, operation: &str, query: &str, variables: V) -> TransportResult<D>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        debug!(operation, endpoint = %self.endpoint, "calling Linear");

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(|err| TransportError::new(format!("failed to call Linear: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(TransportError::new(format!(
                "Linear responded with {status}: {body}"
            )));
        }

        let payload: GraphQlResponse<D> = response.json().await.map_err(|err| {
            TransportError::new(format!("failed to parse Linear response: {err}"))
        })?;

        if let Some(errors) = payload.errors.filter(|errors| !errors.is_empty()) {
            let message = errors
                .iter()
                .map(GraphQlError::describe)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(TransportError::new(message));
        }

        payload
            .data
            .ok_or_else(|| TransportError::new("Linear returned no data"))
    }
}

#[async_trait]
impl IssueTrackerService for LinearClient {
    async fn viewer(&self) -> TransportResult<Option<Identity>> {
        let data: ViewerData = self.execute("viewer", VIEWER_QUERY, json!({})).await?;
        Ok(data.viewer)
    }

    async fn team(&self, team_id: &str) -> TransportResult<Team> {
        let data: TeamData = self
            .execute("team", TEAM_QUERY, json!({ "id": team_id }))
            .await?;
        data.team
            .ok_or_else(|| TransportError::new(format!("team {team_id} not found")))
    }

    async fn create_issue(&self, input: &IssueCreateInput) -> TransportResult<Option<Ticket>> {
        let data: IssueCreateData = self
            .execute(
                "issueCreate",
                ISSUE_CREATE_MUTATION,
                json!({ "input": input }),
            )
            .await?;
        Ok(data.issue_create.and_then(|payload| payload.issue))
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphQlResponse<D> {
    data: Option<D>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
    #[serde(default)]
    extensions: Option<GraphQlErrorExtensions>,
}

impl GraphQlError {
    fn describe(&self) -> String {
        match self.extensions.as_ref().and_then(|ext| ext.code.as_deref()) {
            Some(code) => format!("{} [{code}]", self.message),
            None => self.message.clone(),
        }
    }
}

#[derive(Deserialize)]
struct GraphQlErrorExtensions {
    code: Option<String>,
}

#[derive(Deserialize)]
struct ViewerData {
    viewer: Option<Identity>,
}

#[derive(Deserialize)]
struct TeamData {
    team: Option<Team>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueCreateData {
    issue_create: Option<IssueCreatePayload>,
}

#[derive(Deserialize)]
struct IssueCreatePayload {
    issue: Option<Ticket>,
}
