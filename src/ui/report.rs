use colored::Colorize;

use crate::error::AppError;
use crate::workflow::sync::SyncSummary;

pub fn render_summary(summary: &SyncSummary) -> String {
    let lines = [
        String::new(),
        "✔ Success! Task hierarchy successfully synchronized to Linear."
            .green()
            .bold()
            .to_string(),
        String::new(),
        "Summary:".bold().to_string(),
        format!("  Parent Ticket:      {}", summary.root_title),
        format!("  Total Scenarios:    {}", summary.scenario_count),
        format!("  Total User Stories: {}", summary.story_count),
        format!(
            "  Time Elapsed:       {:.1} seconds",
            summary.elapsed.as_secs_f64()
        ),
        format!("  View Parent Ticket: {}", summary.parent_url),
        String::new(),
    ];
    lines.join("\n")
}

/// Block printed to stderr when a command fails.
pub fn render_error(error: &AppError) -> String {
    let (Some(kind), Some(troubleshooting)) = (error.kind(), error.troubleshooting()) else {
        return format!("\n{} {}\n", "✖ Error!".red().bold(), error.details());
    };

    let lines = [
        String::new(),
        "✖ Error! The synchronization process was interrupted."
            .red()
            .bold()
            .to_string(),
        String::new(),
        format!("{}  {kind}", "Error Type:".bold()),
        format!("{} {}", "Description:".bold(), error.description()),
        format!("{}     {}", "Details:".bold(), error.details()),
        String::new(),
        format!("{} {troubleshooting}", "Troubleshooting:".bold()),
        String::new(),
    ];
    lines.join("\n")
}
