mod attendance;
mod bot;
mod config;
mod conversation;
mod database;
mod dispatch;
mod sheets;
mod store;
mod utils;

use anyhow::Result;
use attendance::Recorder;
use config::Config;
use dispatch::Dispatcher;
use sheets::{GoogleSheetsClient, ServiceAccountAuth};
use std::sync::Arc;
use store::{MemorySessionStore, SessionStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utils::time::SystemClock;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "barber_checkin=info,poise=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .timeout(config.sheets_timeout)
        .build()?;
    let auth = ServiceAccountAuth::from_json(&config.google_credentials, http.clone())?;
    tracing::info!("Using Google service account {}", auth.client_email());
    let sheets = GoogleSheetsClient::new(
        http,
        &config.sheets_api_base,
        config.sheet_id.clone(),
        Arc::new(auth),
    )?;

    let recorder = Recorder::new(
        Arc::new(sheets),
        Arc::new(SystemClock::new(config.utc_offset)),
        config.sheet_name.clone(),
    );

    let sessions: Arc<dyn SessionStore> = match &config.database_url {
        Some(url) => {
            let pool = database::create_connection(url).await?;
            tracing::info!("Storing sessions in {}", url);
            Arc::new(database::SqliteSessionStore::new(pool))
        }
        None => Arc::new(MemorySessionStore::new()),
    };

    let dispatcher = Arc::new(Dispatcher::new(sessions, recorder));

    match dispatcher.recorder().init_headers().await {
        Ok(()) => tracing::info!("Connected to Google Sheets, header row is in place"),
        Err(e) => tracing::error!("Failed to initialise sheet headers: {}", e),
    }

    // Create and start the bot
    let mut client = bot::create_bot(&config, dispatcher).await?;

    tracing::info!("Starting Discord bot...");

    if let Err(why) = client.start().await {
        tracing::error!("Client error: {:?}", why);
    }

    Ok(())
}
