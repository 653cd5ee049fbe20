//! Category model and its join to books

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `category` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub category_id: i32,
    pub name: Option<String>,
}

/// Row of the `book_category` join table.
///
/// `book_id` is unique in the schema, so a book carries at most one category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookCategory {
    pub book_category_id: i32,
    pub book_id: i32,
    pub category_id: i32,
}
