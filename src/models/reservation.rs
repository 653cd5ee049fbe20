//! Reservation model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `reservation` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub reservation_id: i32,
    pub book_id: Option<i32>,
    pub member_id: Option<i32>,
    pub reservation_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct CreateReservation {
    pub book: String,
    pub member: String,
    pub reservation_date: NaiveDate,
}

/// Arguments of the `create_reservation` procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewReservation {
    pub book_id: i32,
    pub member_id: i32,
    pub reservation_date: NaiveDate,
}
