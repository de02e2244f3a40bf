use crate::conversation::labels;

/// Ordered rows of selectable labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<&'static str>>,
}

impl Keyboard {
    fn from_rows(rows: &[&[&'static str]]) -> Self {
        Self {
            rows: rows.iter().map(|row| row.to_vec()).collect(),
        }
    }

    #[cfg(test)]
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rows.iter().flatten().copied()
    }
}

/// One outbound message for the current conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    MainMenu,
    Role,
    Location,
    Status,
}

impl Prompt {
    pub fn keyboard(self) -> Keyboard {
        match self {
            Prompt::MainMenu => main_menu_keyboard(),
            Prompt::Role => Keyboard::from_rows(&[
                &[labels::BARBER, labels::ADMINISTRATOR],
                &[labels::HOME_MENU],
            ]),
            Prompt::Location => Keyboard::from_rows(&[
                &[labels::CENTER, labels::NORTH],
                &[labels::SOUTH, labels::EAST],
                &[labels::HOME_MENU],
            ]),
            Prompt::Status => Keyboard::from_rows(&[
                &[labels::ARRIVED, labels::LEFT],
                &[labels::HOME_MENU],
            ]),
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Prompt::MainMenu => "📱 Главное меню:",
            Prompt::Role => "👥 Выберите вашу роль:",
            Prompt::Location => "🏢 Выберите адрес, где вы сейчас работаете:",
            Prompt::Status => "Отметьте ваш текущий статус:",
        }
    }

    pub fn reply(self) -> Reply {
        Reply::with_keyboard(self.text(), self.keyboard())
    }
}

pub fn main_menu_keyboard() -> Keyboard {
    Keyboard::from_rows(&[
        &[labels::ARRIVED, labels::LEFT],
        &[labels::CHANGE_LOCATION, labels::MY_STATUS],
        &[labels::CHANGE_ROLE],
    ])
}
