//! Review model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `review` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Review {
    pub review_id: i32,
    pub book_id: Option<i32>,
    pub member_id: Option<i32>,
    pub comment: Option<String>,
    pub review_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct CreateReview {
    pub book: String,
    pub member: String,
    pub comment: String,
    pub review_date: NaiveDate,
}

/// Arguments of the `add_review` procedure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub book_id: i32,
    pub member_id: i32,
    pub comment: String,
    pub review_date: NaiveDate,
}
