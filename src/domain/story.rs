use serde::Deserialize;

/// Parsed contents of a scenarios file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputTree {
    pub scenarios: Vec<Scenario>,
}

impl InputTree {
    pub fn total_stories(&self) -> usize {
        self.scenarios
            .iter()
            .map(|scenario| scenario.user_stories.len())
            .sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    pub user_stories: Vec<UserStory>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserStory {
    pub title: String,
    pub description: String,
    pub acceptance_criteria: String,
}

impl UserStory {
    /// Markdown body used for the story's ticket.
    pub fn ticket_description(&self) -> String {
        format!(
            "**User Story:** {}\n\n**Acceptance Criteria:**\n{}",
            self.description, self.acceptance_criteria
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_story_description() {
        let story = UserStory {
            title: "US-1".to_string(),
            description: "As a user, I want X".to_string(),
            acceptance_criteria: "- must do Y".to_string(),
        };
        assert_eq!(
            story.ticket_description(),
            "**User Story:** As a user, I want X\n\n**Acceptance Criteria:**\n- must do Y"
        );
    }

    #[test]
    fn counts_stories_across_scenarios() {
        let tree: InputTree = serde_json::from_str(
            r#"{"scenarios":[
                {"name":"A","userStories":[
                    {"title":"1","description":"d","acceptanceCriteria":"c"},
                    {"title":"2","description":"d","acceptanceCriteria":"c"}]},
                {"name":"B","userStories":[
                    {"title":"3","description":"d","acceptanceCriteria":"c"}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(tree.scenarios.len(), 2);
        assert_eq!(tree.total_stories(), 3);
        assert_eq!(tree.scenarios[0].user_stories[1].acceptance_criteria, "c");
    }
}
