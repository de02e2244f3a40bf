use crate::attendance::{Action, AttendanceRecord, HEADERS};
use crate::conversation::session::UserSession;
use crate::sheets::{SheetStore, SheetsError};
use crate::utils::time::{format_date, format_time, Clock};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("failed to append attendance row: {0}")]
pub struct AppendError(#[from] pub SheetsError);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub action: Action,
}

/// Stamps attendance marks with the clock and appends them to the sheet.
pub struct Recorder {
    sheets: Arc<dyn SheetStore>,
    clock: Arc<dyn Clock>,
    sheet_name: String,
}

impl Recorder {
    pub fn new(
        sheets: Arc<dyn SheetStore>,
        clock: Arc<dyn Clock>,
        sheet_name: impl Into<String>,
    ) -> Self {
        Self {
            sheets,
            clock,
            sheet_name: sheet_name.into(),
        }
    }

    fn header_range(&self) -> String {
        format!("{}!A1:G1", self.sheet_name)
    }

    fn data_range(&self) -> String {
        format!("{}!A:G", self.sheet_name)
    }

    /// Writes the column titles into row 1.
    pub async fn init_headers(&self) -> Result<(), SheetsError> {
        self.sheets.write_header(&self.header_range(), &HEADERS).await
    }

    pub fn build_record(
        &self,
        session: &UserSession,
        display_name: &str,
        action: Action,
    ) -> AttendanceRecord {
        let now = self.clock.now();
        AttendanceRecord {
            date: format_date(&now),
            time: format_time(&now),
            name: display_name.to_string(),
            role: session.role,
            location: session.location,
            action,
            comment: String::new(),
        }
    }

    /// One append per call. No retries, no deduplication.
    pub async fn record(
        &self,
        session: &UserSession,
        display_name: &str,
        action: Action,
    ) -> Result<Confirmation, AppendError> {
        let record = self.build_record(session, display_name, action);
        self.sheets
            .append_row(&self.data_range(), record.into_row())
            .await?;

        tracing::info!(
            "Recorded {} for {} ({:?})",
            action.as_str(),
            display_name,
            session.role
        );
        Ok(Confirmation { action })
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Keeps every request in memory; can be switched to fail.
    #[derive(Default)]
    pub struct MemorySheet {
        pub headers: Mutex<Vec<(String, Vec<String>)>>,
        pub rows: Mutex<Vec<(String, Vec<String>)>>,
        pub append_attempts: Mutex<usize>,
        pub failing: Mutex<bool>,
    }

    impl MemorySheet {
        pub fn set_failing(&self, failing: bool) {
            *self.failing.lock().unwrap() = failing;
        }

        pub fn rows(&self) -> Vec<Vec<String>> {
            self.rows.lock().unwrap().iter().map(|(_, row)| row.clone()).collect()
        }

        pub fn attempts(&self) -> usize {
            *self.append_attempts.lock().unwrap()
        }
    }

    #[async_trait]
    impl SheetStore for MemorySheet {
        async fn write_header(&self, range: &str, values: &[&str]) -> Result<(), SheetsError> {
            let mut headers = self.headers.lock().unwrap();
            let row: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            // Row 1 is overwritten, never appended to.
            headers.retain(|(r, _)| r != range);
            headers.push((range.to_string(), row));
            Ok(())
        }

        async fn append_row(&self, range: &str, row: Vec<String>) -> Result<(), SheetsError> {
            *self.append_attempts.lock().unwrap() += 1;
            if *self.failing.lock().unwrap() {
                return Err(SheetsError::Api {
                    status: 503,
                    body: "backend unavailable".into(),
                });
            }
            self.rows.lock().unwrap().push((range.to_string(), row));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemorySheet;
    use super::*;
    use crate::conversation::session::{Location, Role, Stage};
    use crate::utils::time::testing::FixedClock;

    fn recorder(sheet: Arc<MemorySheet>) -> Recorder {
        Recorder::new(
            sheet,
            Arc::new(FixedClock::at("2024-03-07T09:05:02+03:00")),
            "Users",
        )
    }

    #[tokio::test]
    async fn appends_barber_row() {
        let sheet = Arc::new(MemorySheet::default());
        let session = UserSession {
            role: Some(Role::Barber),
            location: Some(Location::Center),
            stage: Stage::None,
        };

        let confirmation = recorder(sheet.clone())
            .record(&session, "Иван Петров", Action::Arrived)
            .await
            .unwrap();

        assert_eq!(confirmation.action, Action::Arrived);
        let rows = sheet.rows.lock().unwrap().clone();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "Users!A:G");
        assert_eq!(
            rows[0].1,
            vec!["2024-03-07", "09:05:02", "Иван Петров", "Барбер", "Центр", "Пришел", ""]
        );
    }

    #[tokio::test]
    async fn no_deduplication() {
        let sheet = Arc::new(MemorySheet::default());
        let recorder = recorder(sheet.clone());
        let session = UserSession::default();

        recorder.record(&session, "Анна", Action::Left).await.unwrap();
        recorder.record(&session, "Анна", Action::Left).await.unwrap();

        assert_eq!(sheet.rows().len(), 2);
    }

    #[tokio::test]
    async fn failure_surfaces_cause() {
        let sheet = Arc::new(MemorySheet::default());
        sheet.set_failing(true);

        let err = recorder(sheet.clone())
            .record(&UserSession::default(), "Анна", Action::Arrived)
            .await
            .unwrap_err();

        assert!(matches!(err.0, SheetsError::Api { status: 503, .. }));
        assert_eq!(sheet.attempts(), 1);
        assert!(sheet.rows().is_empty());
    }

    #[tokio::test]
    async fn header_init_twice_keeps_single_row() {
        let sheet = Arc::new(MemorySheet::default());
        let recorder = recorder(sheet.clone());

        recorder.init_headers().await.unwrap();
        recorder.init_headers().await.unwrap();

        let headers = sheet.headers.lock().unwrap().clone();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].0, "Users!A1:G1");
        assert_eq!(headers[0].1, HEADERS.to_vec());
        assert!(sheet.rows().is_empty());
    }
}
