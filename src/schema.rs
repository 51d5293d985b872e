//! Input file validation.
//!
//! The file is checked against a JSON Schema first so every problem is reported at once,
//! then deserialized into the typed [`InputTree`].

use std::fs;
use std::path::Path;

use serde_json::{Value, json};

use crate::domain::story::InputTree;
use crate::error::{AppError, AppResult};

fn input_schema() -> Value {
    let non_empty = |description: &str| json!({ "type": "string", "minLength": 1, "description": description });
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "LinearizerData",
        "type": "object",
        "properties": {
            "scenarios": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "object",
                    "properties": {
                        "name": non_empty("The title of the scenario group."),
                        "userStories": {
                            "type": "array",
                            "minItems": 1,
                            "items": {
                                "type": "object",
                                "properties": {
                                    "title": non_empty("The user story ID and title."),
                                    "description": non_empty("The 'As a... I want... so that...' content."),
                                    "acceptanceCriteria": non_empty("The criteria for success for this story."),
                                },
                                "required": ["title", "description", "acceptanceCriteria"],
                                "additionalProperties": false,
                            },
                        },
                    },
                    "required": ["name", "userStories"],
                    "additionalProperties": false,
                },
            },
        },
        "required": ["scenarios"],
        "additionalProperties": false,
    })
}

pub fn load_input(path: &Path) -> AppResult<InputTree> {
    let contents = fs::read_to_string(path).map_err(|err| {
        AppError::Validation(format!("Failed to read or parse file: {err}"))
    })?;
    parse_input(&contents)
}

pub fn parse_input(contents: &str) -> AppResult<InputTree> {
    let value: Value = serde_json::from_str(contents).map_err(|err| {
        AppError::Validation(format!("Failed to read or parse file: {err}"))
    })?;
    validate_input(value)
}

pub fn validate_input(value: Value) -> AppResult<InputTree> {
    let validator = jsonschema::validator_for(&input_schema())
        .map_err(|err| AppError::Validation(format!("invalid input schema: {err}")))?;

    let problems = validator
        .iter_errors(&value)
        .map(|err| {
            let path = err.instance_path.to_string();
            let path = if path.is_empty() { "/".to_string() } else { path };
            format!("{path} {err}")
        })
        .collect::<Vec<_>>();
    if !problems.is_empty() {
        return Err(AppError::Validation(problems.join("; ")));
    }

    serde_json::from_value(value).map_err(|err| AppError::Validation(err.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn story() -> Value {
        json!({ "title": "US-1", "description": "As a user...", "acceptanceCriteria": "- Criteria 1" })
    }

    fn assert_invalid(value: Value) -> String {
        match validate_input(value) {
            Err(AppError::Validation(details)) => details,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_input() {
        let tree = validate_input(json!({
            "scenarios": [{ "name": "Scenario 1", "userStories": [story()] }]
        }))
        .unwrap();
        assert_eq!(tree.scenarios.len(), 1);
        assert_eq!(tree.scenarios[0].user_stories[0].acceptance_criteria, "- Criteria 1");
    }

    #[test]
    fn rejects_missing_or_empty_scenarios() {
        let details = assert_invalid(json!({}));
        assert!(details.starts_with("/ "));
        assert_invalid(json!({ "scenarios": [] }));
    }

    #[test]
    fn rejects_scenario_without_name_or_stories() {
        assert_invalid(json!({ "scenarios": [{ "userStories": [story()] }] }));
        assert_invalid(json!({ "scenarios": [{ "name": "Scenario 1" }] }));
        assert_invalid(json!({ "scenarios": [{ "name": "Scenario 1", "userStories": [] }] }));
    }

    #[test]
    fn rejects_incomplete_or_empty_story_fields() {
        let details = assert_invalid(json!({
            "scenarios": [{ "name": "S", "userStories": [{ "title": "US-1", "description": "d" }] }]
        }));
        assert!(details.contains("/scenarios/0/userStories/0"));

        assert_invalid(json!({
            "scenarios": [{ "name": "S", "userStories": [
                { "title": "", "description": "d", "acceptanceCriteria": "c" }
            ] }]
        }));
    }

    #[test]
    fn rejects_unexpected_fields() {
        assert_invalid(json!({
            "scenarios": [{ "name": "S", "priority": 1, "userStories": [story()] }]
        }));
        assert_invalid(json!({
            "scenarios": [{ "name": "S", "userStories": [story()] }],
            "extra": true
        }));
    }

    #[test]
    fn reports_every_problem() {
        let details = assert_invalid(json!({
            "scenarios": [
                { "name": "", "userStories": [story()] },
                { "name": "B", "userStories": [] }
            ]
        }));
        assert!(details.contains("/scenarios/0/name"));
        assert!(details.contains("/scenarios/1/userStories"));
        assert!(details.contains("; "));
    }

    #[test]
    fn unreadable_or_malformed_file_is_validation_error() {
        let err = load_input(Path::new("/nonexistent/file.json")).unwrap_err();
        assert!(
            matches!(err, AppError::Validation(ref d) if d.starts_with("Failed to read or parse file"))
        );

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = load_input(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn loads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let data = json!({ "scenarios": [{ "name": "Scenario A", "userStories": [story()] }] });
        file.write_all(data.to_string().as_bytes()).unwrap();

        let tree = load_input(file.path()).unwrap();
        assert_eq!(tree.scenarios[0].name, "Scenario A");
    }
}
