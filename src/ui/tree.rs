use crate::domain::story::InputTree;

/// ASCII preview of the tickets a run will create.
pub fn render_tree(parent_title: &str, tree: &InputTree) -> String {
    let mut lines = vec![format!("├── Parent: {parent_title}")];

    let scenario_count = tree.scenarios.len();
    for (index, scenario) in tree.scenarios.iter().enumerate() {
        let last_scenario = index + 1 == scenario_count;
        let (connector, child_prefix) = if last_scenario {
            ("│   └── ", "│       ")
        } else {
            ("│   ├── ", "│   │   ")
        };
        lines.push(format!("{connector}Scenario: {}", scenario.name));

        let story_count = scenario.user_stories.len();
        for (index, story) in scenario.user_stories.iter().enumerate() {
            let story_connector = if index + 1 == story_count {
                "└── "
            } else {
                "├── "
            };
            lines.push(format!("{child_prefix}{story_connector}{}", story.title));
        }
    }

    lines.join("\n")
}
