use std::path::PathBuf;

use clap::Args;
use dialoguer::{Confirm, Input};

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::schema::load_input;
use crate::ui::progress::TerminalProgress;
use crate::ui::report::render_summary;
use crate::ui::tree::render_tree;
use crate::workflow::sync::sync_hierarchy;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Path to the JSON file containing scenarios and user stories.
    #[arg(long)]
    pub file: PathBuf,
    /// Title of the main parent ticket. Prompted for when omitted.
    #[arg(long)]
    pub title: Option<String>,
    /// Create the tickets without asking for confirmation.
    #[arg(short, long)]
    pub yes: bool,
}

pub async fn run(args: RunArgs) -> AppResult<()> {
    let config = AppConfig::load()?;
    let tree = load_input(&args.file)?;

    let parent_title = match args.title {
        Some(title) if title.trim().is_empty() => {
            return Err(AppError::Validation(
                "parent ticket title must not be empty".to_string(),
            ));
        }
        Some(title) => title,
        None => prompt_parent_title()?,
    };

    println!("\nPreview of ticket hierarchy:\n");
    println!("{}", render_tree(&parent_title, &tree));
    println!();

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Proceed with creating these tickets in Linear?")
            .default(true)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let context = AppContext::linear(config);
    let client = context.ticket_client();
    let mut progress = TerminalProgress::new();

    println!("\nCreating parent ticket...");
    let summary = sync_hierarchy(&client, &mut progress, &parent_title, &tree).await?;
    println!("{}", render_summary(&summary));
    Ok(())
}

fn prompt_parent_title() -> AppResult<String> {
    let title: String = Input::new()
        .with_prompt("What is the title of the main parent ticket?")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.is_empty() {
                Err("Title is required.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(title)
}
