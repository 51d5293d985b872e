use colored::Colorize;
use dialoguer::{Confirm, Input, Password};
use tracing::debug;

use crate::config::{AppConfig, StoredConfig, config_file_path, delete_config};
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn init() -> AppResult<()> {
    let path = config_file_path()?;

    if path.exists() {
        let overwrite = Confirm::new()
            .with_prompt("Configuration already exists. Overwrite?")
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Init cancelled.");
            return Ok(());
        }
    }

    let api_key = Password::new()
        .with_prompt("Enter your Linear API key")
        .interact()?;
    let team_id: String = Input::new()
        .with_prompt("Enter your Linear Team ID")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Team ID is required.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    let default_state_id: String = Input::new()
        .with_prompt("Enter a default State ID (optional, press Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let stored = StoredConfig {
        api_key: api_key.trim().to_string(),
        team_id: team_id.trim().to_string(),
        default_state_id: Some(default_state_id.trim().to_string()).filter(|id| !id.is_empty()),
    };

    println!("\nVerifying credentials...");
    let context = AppContext::linear(AppConfig::from_stored(stored.clone()));
    let client = context.ticket_client();
    let identity = client.verify_credentials().await?;
    debug!(user = identity.name.as_deref().unwrap_or(&identity.id), "credentials verified");
    let team = client.fetch_team(&stored.team_id).await?;
    debug!(team_id = %team.id, "team resolved");
    println!(
        "{}",
        format!("\n✔ Connected successfully! Team: {}", team.name).green()
    );

    stored.save_to(&path)?;
    println!("{}", "✔ Configuration saved.\n".green());
    Ok(())
}

pub fn reset() -> AppResult<()> {
    let path = config_file_path()?;
    if !path.exists() {
        println!("No configuration file found. Nothing to reset.");
        return Ok(());
    }

    let confirm = Confirm::new()
        .with_prompt("Are you sure you want to delete your Linearize configuration?")
        .default(false)
        .interact()?;
    if !confirm {
        println!("Reset cancelled.");
        return Ok(());
    }

    delete_config(&path)?;
    println!("{}", "✔ Configuration removed successfully.\n".green());
    Ok(())
}

pub fn show() -> AppResult<()> {
    let path = config_file_path()?;
    println!("Configuration file: {}", path.display());

    let Some(cfg) = StoredConfig::load_from(&path)? else {
        println!("No configuration stored. Run 'linear-sync init' first.");
        return Ok(());
    };

    println!("Linear API key: {}", mask_secret(&cfg.api_key));
    println!("Team ID: {}", display_value(Some(&cfg.team_id)));
    println!(
        "Default state ID: {}",
        display_value(cfg.default_state_id.as_deref())
    );
    Ok(())
}

fn display_value(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

fn mask_secret(token: &str) -> String {
    let chars = token.chars().collect::<Vec<_>>();
    match chars.len() {
        0 => "<not set>".to_string(),
        len if len > 6 => {
            let prefix = chars[..3].iter().collect::<String>();
            let suffix = chars[len - 3..].iter().collect::<String>();
            format!("{prefix}***{suffix}")
        }
        _ => "***".to_string(),
    }
}
