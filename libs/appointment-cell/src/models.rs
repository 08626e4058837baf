use serde::{Deserialize, Serialize};

use shared_models::booking::{BookingRecord, BookingRequest};
use shared_models::slot::Slot;
use shared_models::ClientError;
use shared_utils::dates::format_booked_date;

pub const LOADING_PLACEHOLDER: &str = "Loading...";
pub const FULL_SUFFIX: &str = " (Full)";
pub const SLOTS_LOAD_FAILED: &str = "Could not load slots. Please try again.";
pub const INCOMPLETE_FORM: &str = "Please fill all fields and select a time slot.";
pub const NO_BOOKINGS: &str = "No bookings found.";
pub const HISTORY_LOAD_FAILED: &str = "Error loading history";
pub const CONFIRMED_BADGE: &str = "Confirmed";

// ==============================================================================
// SLOT BOARD
// ==============================================================================

/// One rendered slot button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotButton {
    pub id: i64,
    pub time: String,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

impl From<Slot> for SlotButton {
    fn from(slot: Slot) -> Self {
        let available = slot.is_available();
        let label = if available {
            slot.time.clone()
        } else {
            format!("{}{}", slot.time, FULL_SUFFIX)
        };

        Self {
            id: slot.id,
            time: slot.time,
            label,
            disabled: !available,
            selected: false,
        }
    }
}

/// The buttons for one date, in server order. At most one button is
/// selected and a disabled button is never selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotBoard {
    buttons: Vec<SlotButton>,
}

impl SlotBoard {
    pub fn from_slots(slots: Vec<Slot>) -> Self {
        Self {
            buttons: slots.into_iter().map(SlotButton::from).collect(),
        }
    }

    pub fn buttons(&self) -> &[SlotButton] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.buttons.iter().filter(|b| !b.disabled).count()
    }

    pub fn booked_count(&self) -> usize {
        self.buttons.iter().filter(|b| b.disabled).count()
    }

    /// Marks `id` as the only selected button. Unknown or disabled ids leave
    /// the board untouched and return false.
    pub fn select(&mut self, id: i64) -> bool {
        let selectable = self.buttons.iter().any(|b| b.id == id && !b.disabled);
        if !selectable {
            return false;
        }

        for button in &mut self.buttons {
            button.selected = button.id == id;
        }
        true
    }

    pub fn selected(&self) -> Option<&SlotButton> {
        self.buttons.iter().find(|b| b.selected)
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected().map(|b| b.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotContainer {
    Loading,
    Ready(SlotBoard),
    Failed(String),
}

impl Default for SlotContainer {
    fn default() -> Self {
        SlotContainer::Loading
    }
}

impl SlotContainer {
    pub fn board(&self) -> Option<&SlotBoard> {
        match self {
            SlotContainer::Ready(board) => Some(board),
            _ => None,
        }
    }

    pub fn board_mut(&mut self) -> Option<&mut SlotBoard> {
        match self {
            SlotContainer::Ready(board) => Some(board),
            _ => None,
        }
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.board().and_then(SlotBoard::selected_id)
    }
}

// ==============================================================================
// BOOKING FORM
// ==============================================================================

/// Values of the booking form inputs at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub doctor: String,
    pub date: String,
}

impl BookingForm {
    /// Builds the `/book` payload. Name, age, phone, doctor, date and a
    /// selected slot are required; gender comes from a select and always
    /// carries a value.
    pub fn to_request(&self, selected_slot: Option<i64>) -> Result<BookingRequest, ClientError> {
        let required = [&self.name, &self.age, &self.phone, &self.doctor, &self.date];
        let slot_id = match selected_slot {
            Some(id) if required.iter().all(|v| !v.is_empty()) => id,
            _ => return Err(ClientError::Validation(INCOMPLETE_FORM.to_string())),
        };

        Ok(BookingRequest {
            slot_id,
            name: self.name.clone(),
            age: self.age.clone(),
            gender: self.gender.clone(),
            phone: self.phone.clone(),
            doctor: self.doctor.clone(),
            date: self.date.clone(),
        })
    }
}

// ==============================================================================
// BOOKING HISTORY
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub time: String,
    pub date_label: String,
    pub doctor_name: String,
    pub badge: String,
}

impl From<BookingRecord> for HistoryRow {
    fn from(record: BookingRecord) -> Self {
        Self {
            date_label: format_booked_date(&record.booked_date),
            time: record.time,
            doctor_name: record.doctor_name,
            badge: CONFIRMED_BADGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryList {
    Loading,
    Empty,
    Rows(Vec<HistoryRow>),
    Failed(String),
}

impl Default for HistoryList {
    fn default() -> Self {
        HistoryList::Loading
    }
}

impl HistoryList {
    pub fn from_records(records: Vec<BookingRecord>) -> Self {
        if records.is_empty() {
            HistoryList::Empty
        } else {
            HistoryList::Rows(records.into_iter().map(HistoryRow::from).collect())
        }
    }

    /// Text shown in place of rows, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            HistoryList::Loading => Some(LOADING_PLACEHOLDER),
            HistoryList::Empty => Some(NO_BOOKINGS),
            HistoryList::Failed(msg) => Some(msg),
            HistoryList::Rows(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> SlotBoard {
        SlotBoard::from_slots(vec![
            Slot { id: 1, time: "9:00".to_string(), is_booked: false },
            Slot { id: 2, time: "10:00".to_string(), is_booked: true },
            Slot { id: 3, time: "11:00".to_string(), is_booked: false },
        ])
    }

    #[test]
    fn test_booked_slot_is_disabled_and_labelled() {
        let board = sample_board();
        let full = &board.buttons()[1];

        assert!(full.disabled);
        assert_eq!(full.label, "10:00 (Full)");
        assert_eq!(board.buttons()[0].label, "9:00");
        assert_eq!(board.available_count(), 2);
        assert_eq!(board.booked_count(), 1);
    }

    #[test]
    fn test_selecting_second_slot_deselects_first() {
        let mut board = sample_board();

        assert!(board.select(1));
        assert!(board.select(3));

        let selected: Vec<i64> =
            board.buttons().iter().filter(|b| b.selected).map(|b| b.id).collect();
        assert_eq!(selected, vec![3]);
    }

    #[test]
    fn test_disabled_or_unknown_slot_is_not_selectable() {
        let mut board = sample_board();
        board.select(1);

        assert!(!board.select(2));
        assert!(!board.select(99));
        assert_eq!(board.selected_id(), Some(1));
    }

    #[test]
    fn test_form_requires_slot_and_fields() {
        let form = BookingForm {
            name: "alice".to_string(),
            age: "30".to_string(),
            gender: "Female".to_string(),
            phone: "555".to_string(),
            doctor: "Dr. Byrne".to_string(),
            date: "2024-01-01".to_string(),
        };

        assert!(form.to_request(None).is_err());
        assert_eq!(form.to_request(Some(4)).unwrap().slot_id, 4);

        let missing_phone = BookingForm { phone: String::new(), ..form.clone() };
        let err = missing_phone.to_request(Some(4)).unwrap_err();
        assert_eq!(err.user_message(), INCOMPLETE_FORM);

        let no_gender = BookingForm { gender: String::new(), ..form };
        assert!(no_gender.to_request(Some(4)).is_ok());
    }

    #[test]
    fn test_empty_history_has_message() {
        assert_eq!(HistoryList::from_records(vec![]).message(), Some(NO_BOOKINGS));
    }

    #[test]
    fn test_history_row_formats_date() {
        let list = HistoryList::from_records(vec![BookingRecord {
            time: "9:00".to_string(),
            booked_date: "2024-01-01".to_string(),
            doctor_name: "Dr. Byrne".to_string(),
        }]);

        match list {
            HistoryList::Rows(rows) => {
                assert_eq!(rows[0].date_label, "Mon Jan 01 2024");
                assert_eq!(rows[0].badge, CONFIRMED_BADGE);
            }
            other => panic!("Expected rows, got {:?}", other),
        }
    }
}
