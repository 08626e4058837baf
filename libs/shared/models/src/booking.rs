use serde::{Deserialize, Serialize};

/// Body of `POST /book`. `age` travels as the string the patient typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub slot_id: i64,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub doctor: String,
    pub date: String,
}

/// One row of `GET /my-bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub time: String,
    pub booked_date: String,
    pub doctor_name: String,
}
