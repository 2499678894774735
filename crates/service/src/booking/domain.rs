use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller identity as established by the session guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}

/// Booking creation input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingInput {
    pub place_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub price: i32,
    pub name: String,
    pub phone: String,
}

/// A booking row with its referenced place expanded inline.
#[derive(Debug, Clone, Serialize)]
pub struct BookingWithPlace {
    #[serde(flatten)]
    pub booking: models::booking::Model,
    pub place: Option<models::place::Model>,
}

/// Cancellation confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelReceipt {
    pub success: bool,
    pub message: String,
}
