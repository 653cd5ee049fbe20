//! Member model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `member` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub member_id: i32,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}
