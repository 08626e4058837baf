use serde::{Deserialize, Serialize};

/// A bookable time unit for one date, as returned by `GET /slots`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: i64,
    pub time: String,
    pub is_booked: bool,
}

impl Slot {
    pub fn is_available(&self) -> bool {
        !self.is_booked
    }
}
