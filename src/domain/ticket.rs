use serde::{Deserialize, Serialize};

/// A ticket the synchronizer wants created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
}

impl TicketDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            parent_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// Reference to a ticket that exists in the remote tracker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub identifier: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// The authenticated user behind an API key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Wire shape of an issue creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateInput {
    pub team_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_input_omits_absent_fields() {
        let input = IssueCreateInput {
            team_id: "team-123".to_string(),
            title: "Parent".to_string(),
            description: None,
            parent_id: None,
            state_id: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "teamId": "team-123", "title": "Parent" })
        );
    }

    #[test]
    fn create_input_uses_camel_case() {
        let input = IssueCreateInput {
            team_id: "team-123".to_string(),
            title: "Story".to_string(),
            description: Some("body".to_string()),
            parent_id: Some("issue-2".to_string()),
            state_id: Some("state-todo".to_string()),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["parentId"], "issue-2");
        assert_eq!(json["stateId"], "state-todo");
        assert_eq!(json["description"], "body");
    }
}
