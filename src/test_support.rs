use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::domain::ticket::{Identity, IssueCreateInput, Team, Ticket};
use crate::services::{IssueTrackerService, ProgressReporter, TransportError, TransportResult};

enum CreateOutcome {
    Succeed,
    Respond(TransportResult<Option<Ticket>>),
}

/// In-memory tracker that replays scripted outcomes and records every call.
///
/// Creation calls with nothing scripted succeed with `issue-N`, where `N` counts the
/// tickets handed out so far.
#[derive(Default)]
pub struct ScriptedTracker {
    viewer: Mutex<Option<TransportResult<Option<Identity>>>>,
    team: Mutex<Option<TransportResult<Team>>>,
    create_outcomes: Mutex<VecDeque<CreateOutcome>>,
    create_calls: Mutex<Vec<(IssueCreateInput, Instant)>>,
    created: Mutex<usize>,
}

impl ScriptedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewer(self, outcome: TransportResult<Option<Identity>>) -> Self {
        *self.viewer.lock().unwrap() = Some(outcome);
        self
    }

    pub fn with_team(self, outcome: TransportResult<Team>) -> Self {
        *self.team.lock().unwrap() = Some(outcome);
        self
    }

    /// Queue the outcome of the next creation call.
    pub fn then_create(self, outcome: TransportResult<Option<Ticket>>) -> Self {
        self.create_outcomes
            .lock()
            .unwrap()
            .push_back(CreateOutcome::Respond(outcome));
        self
    }

    /// Queue `count` default successes.
    pub fn then_succeed(self, count: usize) -> Self {
        {
            let mut outcomes = self.create_outcomes.lock().unwrap();
            for _ in 0..count {
                outcomes.push_back(CreateOutcome::Succeed);
            }
        }
        self
    }

    pub fn create_calls(&self) -> Vec<IssueCreateInput> {
        self.create_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(input, _)| input.clone())
            .collect()
    }

    pub fn create_call_times(&self) -> Vec<Instant> {
        self.create_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, at)| *at)
            .collect()
    }

    fn next_ticket(&self) -> Ticket {
        let mut created = self.created.lock().unwrap();
        *created += 1;
        ticket(*created)
    }
}

pub fn ticket(n: usize) -> Ticket {
    Ticket {
        id: format!("issue-{n}"),
        identifier: format!("ENG-{n}"),
        url: format!("https://linear.app/team/issue/ENG-{n}"),
    }
}

pub fn rate_limited() -> TransportError {
    TransportError::new("Linear responded with 429 Too Many Requests: slow down")
}

#[async_trait]
impl IssueTrackerService for ScriptedTracker {
    async fn viewer(&self) -> TransportResult<Option<Identity>> {
        self.viewer.lock().unwrap().clone().unwrap_or_else(|| {
            Ok(Some(Identity {
                id: "user-1".to_string(),
                name: Some("Test User".to_string()),
            }))
        })
    }

    async fn team(&self, team_id: &str) -> TransportResult<Team> {
        self.team.lock().unwrap().clone().unwrap_or_else(|| {
            Ok(Team {
                id: team_id.to_string(),
                name: "Engineering".to_string(),
            })
        })
    }

    async fn create_issue(&self, input: &IssueCreateInput) -> TransportResult<Option<Ticket>> {
        self.create_calls
            .lock()
            .unwrap()
            .push((input.clone(), Instant::now()));
        let scripted = self.create_outcomes.lock().unwrap().pop_front();
        match scripted {
            Some(CreateOutcome::Respond(outcome)) => outcome,
            Some(CreateOutcome::Succeed) | None => Ok(Some(self.next_ticket())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Start(usize),
    Update(String, String, usize),
    Finish,
}

#[derive(Default)]
pub struct RecordingProgress {
    pub events: Vec<ProgressEvent>,
}

impl ProgressReporter for RecordingProgress {
    fn start(&mut self, total_stories: usize) {
        self.events.push(ProgressEvent::Start(total_stories));
    }

    fn update(&mut self, scenario: &str, story: &str, completed: usize) {
        self.events.push(ProgressEvent::Update(
            scenario.to_string(),
            story.to_string(),
            completed,
        ));
    }

    fn finish(&mut self) {
        self.events.push(ProgressEvent::Finish);
    }
}
