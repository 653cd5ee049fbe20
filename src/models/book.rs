//! Book model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `book` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: i32,
    pub title: Option<String>,
    pub publication_date: Option<NaiveDate>,
    /// Number of copies held
    pub amount: Option<i32>,
}
