use crate::sheets::{SheetStore, SheetsError, TokenProvider};
use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;
use std::sync::Arc;

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com/";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange<'a, T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<&'a str>,
    major_dimension: &'static str,
    values: Vec<T>,
}

/// Google Sheets v4 `spreadsheets.values` over plain REST.
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    base_url: Url,
    spreadsheet_id: String,
    tokens: Arc<dyn TokenProvider>,
}

impl GoogleSheetsClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        spreadsheet_id: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
    ) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid Sheets API base url {}: {}", base_url, e))?;

        Ok(Self {
            http,
            base_url,
            spreadsheet_id: spreadsheet_id.into(),
            tokens,
        })
    }

    fn values_url(&self, last_segment: &str) -> Result<Url, SheetsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SheetsError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", last_segment]);
        Ok(url)
    }

    async fn check(response: reqwest::Response) -> Result<(), SheetsError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(SheetsError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl SheetStore for GoogleSheetsClient {
    async fn write_header(&self, range: &str, values: &[&str]) -> Result<(), SheetsError> {
        let url = self.values_url(range)?;
        let token = self.tokens.access_token().await?;
        let body = ValueRange {
            range: Some(range),
            major_dimension: "ROWS",
            values: vec![values.to_vec()],
        };

        let response = self
            .http
            .put(url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        Self::check(response).await
    }

    async fn append_row(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError> {
        let url = self.values_url(&format!("{}:append", range))?;
        let token = self.tokens.access_token().await?;
        let body = ValueRange {
            range: None,
            major_dimension: "ROWS",
            values: vec![row],
        };

        let response = self
            .http
            .post(url)
            .query(&[("valueInputOption", "RAW"), ("insertDataOption", "INSERT_ROWS")])
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        Self::check(response).await
    }
}
