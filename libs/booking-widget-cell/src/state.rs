use serde::{Deserialize, Serialize};

use appointment_cell::models::{HistoryList, SlotContainer};
use auth_cell::models::AuthMode;

use crate::messages::LOGGED_OUT_LABEL;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthModal {
    pub open: bool,
    pub mode: AuthMode,
    pub message: Option<String>,
}

impl AuthModal {
    pub fn title(&self) -> &'static str {
        self.mode.title()
    }

    pub fn toggle_text(&self) -> &'static str {
        self.mode.toggle_text()
    }

    pub fn username_placeholder(&self) -> &'static str {
        self.mode.username_placeholder()
    }

    pub fn shows_register_fields(&self) -> bool {
        self.mode.shows_register_fields()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryModal {
    pub open: bool,
    pub list: HistoryList,
}

/// Everything the booking page shows. A reload replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetState {
    pub date: String,
    pub slots: SlotContainer,
    pub patient_name: String,
    pub status_message: Option<String>,
    pub auth_button_label: String,
    pub auth_modal: AuthModal,
    pub history: HistoryModal,
    /// Bumped on every slot load; responses carrying an older value are dropped.
    pub(crate) slot_generation: u64,
}

impl WidgetState {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            slots: SlotContainer::Loading,
            patient_name: String::new(),
            status_message: None,
            auth_button_label: LOGGED_OUT_LABEL.to_string(),
            auth_modal: AuthModal::default(),
            history: HistoryModal::default(),
            slot_generation: 0,
        }
    }

    pub fn selected_slot(&self) -> Option<i64> {
        self.slots.selected_id()
    }
}
