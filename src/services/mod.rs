pub mod issue_tracker;
pub mod progress;

pub use issue_tracker::{IssueTrackerService, TransportError, TransportResult};
pub use progress::ProgressReporter;
