//! Favorite model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `favorite` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Favorite {
    pub favorite_id: i32,
    pub book_id: Option<i32>,
    pub member_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateFavorite {
    pub book: String,
    pub member: String,
}

/// Arguments of the `add_to_favorites` procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFavorite {
    pub book_id: i32,
    pub member_id: i32,
}
