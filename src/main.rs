use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use perch::api::ApiClient;
use perch::app::{App, AppEvent};
use perch::config::Config;
use perch::ui;

/// Get the config directory path (~/.config/perch/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("perch");
    Ok(config_dir)
}

#[derive(Parser, Debug)]
#[command(
    name = "perch",
    about = "Terminal viewer for paginated REST record collections"
)]
struct Args {
    /// Override the record source base URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Override the profile user ID
    #[arg(long, value_name = "ID")]
    user: Option<i64>,

    /// Override the theme ("dark" or "light")
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Load optional configuration, then apply CLI overrides
    let config_path = get_config_dir()?.join("config.toml");
    let mut config = Config::load(&config_path).context("Failed to load configuration")?;
    if let Some(endpoint) = args.endpoint {
        config.base_url = endpoint;
    }
    if let Some(user) = args.user {
        config.user_id = user;
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    // Build the shared HTTP client and the endpoint wrapper. An invalid
    // base URL is a startup error, not a fetch failure.
    let http = ApiClient::default_http().context("Failed to build HTTP client")?;
    let client = match ApiClient::new(http, &config.base_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Check the base_url in {} or pass", config_path.display());
            eprintln!("a valid http(s) URL via --endpoint.");
            std::process::exit(1);
        }
    };

    // Create app state
    let mut app = App::new(client, &config);

    // Create event channel for background fetches
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Kick off the one-per-launch records fetch before entering the loop
    app.reload_comments(&event_tx);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
