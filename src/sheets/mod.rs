pub mod auth;
pub mod client;

use async_trait::async_trait;

pub use auth::{ServiceAccountAuth, TokenProvider};
pub use client::GoogleSheetsClient;

#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("request to Sheets API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Sheets API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("invalid Sheets API url: {0}")]
    Url(String),
}

/// The spreadsheet the bot writes to.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Overwrites `range` with a single row. Repeating the call is harmless.
    async fn write_header(&self, range: &str, values: &[&str]) -> Result<(), SheetsError>;

    /// Inserts `row` after the last non-empty row of `range`.
    async fn append_row(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError>;
}
