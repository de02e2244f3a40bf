pub mod recorder;

pub use recorder::Recorder;

use crate::conversation::labels;
use crate::conversation::session::{Location, Role};

/// Column titles of the attendance sheet, in order.
pub const HEADERS: [&str; 7] = [
    "Дата",
    "Время",
    "Имя сотрудника",
    "Роль",
    "Адрес",
    "Действие",
    "Комментарий",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Arrived,
    Left,
}

impl Action {
    /// Value written to the "Действие" column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Arrived => "Пришел",
            Action::Left => "Ушёл",
        }
    }
}

/// One check-in/out event, exactly as it lands in the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: String,
    pub time: String,
    pub name: String,
    pub role: Option<Role>,
    pub location: Option<Location>,
    pub action: Action,
    pub comment: String,
}

impl AttendanceRecord {
    pub fn into_row(self) -> Vec<String> {
        vec![
            self.date,
            self.time,
            self.name,
            self.role.map(labels::role_label).unwrap_or_default().to_string(),
            self.location
                .map(labels::location_label)
                .unwrap_or_default()
                .to_string(),
            self.action.as_str().to_string(),
            self.comment,
        ]
    }
}
