use crate::attendance::Action;
use crate::conversation::labels;
use crate::conversation::session::UserSession;

pub fn role_saved_message(role: &str) -> String {
    format!("✅ Роль «{}» сохранена!", role)
}

pub fn location_saved_message(location: &str) -> String {
    format!("📍 Вы выбрали адрес: {}", location)
}

/// `choice` names what was asked for: "роль", "адрес", "статус".
pub fn validation_message(choice: &str) -> String {
    format!("Пожалуйста, выберите {} из предложенных вариантов", choice)
}

pub fn status_summary(session: &UserSession) -> String {
    let role = session.role.map(labels::role_label).unwrap_or("не выбрана");

    let mut status = format!("📊 Ваш текущий статус:\n\n👤 Роль: {}\n", role);
    if let Some(location) = session.location {
        status.push_str(&format!("📍 Локация: {}\n", labels::location_label(location)));
    }
    status
}

pub fn attendance_confirmation(action: Action) -> &'static str {
    match action {
        Action::Arrived => "✅ Вы зарегистрированы на работе. Хорошего дня!",
        Action::Left => "🏠 До свидания! Хорошего отдыха!",
    }
}

pub fn attendance_failure() -> &'static str {
    "❌ Ошибка отметки! Попробуйте позже."
}
