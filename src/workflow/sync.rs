use std::time::Duration;

use tokio::time::Instant;
use tracing::info;

use crate::domain::story::InputTree;
use crate::domain::ticket::{Ticket, TicketDraft};
use crate::error::AppResult;
use crate::services::ProgressReporter;
use crate::tracker::TicketClient;

const DONE_LABEL: &str = "Done";

#[derive(Debug, Clone, PartialEq)]
pub struct SyncSummary {
    pub root_title: String,
    pub scenario_count: usize,
    pub story_count: usize,
    pub elapsed: Duration,
    pub parent_url: String,
}

/// State of one run. Dropped when the run ends, successful or not.
struct SyncSession<'a> {
    root_title: &'a str,
    tree: &'a InputTree,
    stories_created: usize,
    started_at: Instant,
    parent: Option<Ticket>,
}

/// Creates the parent ticket, one child per scenario and one grandchild per story.
///
/// Calls are strictly sequential. The first creation that fails aborts the run; tickets
/// created before it are left in place.
pub async fn sync_hierarchy(
    client: &TicketClient,
    progress: &mut dyn ProgressReporter,
    root_title: &str,
    tree: &InputTree,
) -> AppResult<SyncSummary> {
    let total_stories = tree.total_stories();
    let mut session = SyncSession {
        root_title,
        tree,
        stories_created: 0,
        started_at: Instant::now(),
        parent: None,
    };
    progress.start(total_stories);

    let parent = client.create_ticket(TicketDraft::new(session.root_title)).await?;
    info!(identifier = %parent.identifier, "created parent ticket");
    let parent = session.parent.insert(parent);

    for scenario in &session.tree.scenarios {
        let scenario_ticket = client
            .create_ticket(TicketDraft::new(&scenario.name).with_parent(&parent.id))
            .await?;
        info!(
            identifier = %scenario_ticket.identifier,
            scenario = %scenario.name,
            "created scenario ticket"
        );

        for story in &scenario.user_stories {
            progress.update(&scenario.name, &story.title, session.stories_created);

            let draft = TicketDraft::new(&story.title)
                .with_description(story.ticket_description())
                .with_parent(&scenario_ticket.id);
            client.create_ticket(draft).await?;
            session.stories_created += 1;
        }
    }

    progress.update(DONE_LABEL, DONE_LABEL, total_stories);
    progress.finish();

    let summary = SyncSummary {
        root_title: session.root_title.to_string(),
        scenario_count: session.tree.scenarios.len(),
        story_count: session.stories_created,
        elapsed: session.started_at.elapsed(),
        parent_url: parent.url.clone(),
    };
    info!(
        scenarios = summary.scenario_count,
        stories = summary.story_count,
        "hierarchy synchronized"
    );
    Ok(summary)
}
