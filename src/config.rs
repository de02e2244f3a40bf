use crate::sheets::client::DEFAULT_API_BASE;
use crate::utils::time::offset_from_hours;
use anyhow::Result;
use chrono::FixedOffset;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub sheet_id: String,
    pub google_credentials: String,
    pub sheet_name: String,
    pub database_url: Option<String>,
    pub utc_offset: FixedOffset,
    pub sheets_timeout: Duration,
    pub sheets_api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} environment variable is required", key))
        };

        let discord_token = required("DISCORD_TOKEN")?;
        let sheet_id = required("GOOGLE_SHEET_ID")?;
        let google_credentials = required("GOOGLE_CREDENTIALS")?;

        let sheet_name = lookup("SHEET_NAME").unwrap_or_else(|| "Users".to_string());
        let database_url = lookup("DATABASE_URL");

        let offset_hours = match lookup("UTC_OFFSET_HOURS") {
            Some(raw) => raw
                .parse::<i32>()
                .map_err(|_| anyhow::anyhow!("UTC_OFFSET_HOURS must be an integer, got {}", raw))?,
            None => 3,
        };
        let utc_offset = offset_from_hours(offset_hours)?;

        let timeout_secs = match lookup("SHEETS_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("SHEETS_TIMEOUT_SECS must be a number, got {}", raw))?,
            None => 10,
        };

        let sheets_api_base =
            lookup("SHEETS_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Config {
            discord_token,
            sheet_id,
            google_credentials,
            sheet_name,
            database_url,
            utc_offset,
            sheets_timeout: Duration::from_secs(timeout_secs),
            sheets_api_base,
        })
    }
}
