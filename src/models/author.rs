//! Author model and its join to books

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `author` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub author_id: i32,
    pub name: Option<String>,
}

/// Row of the `author_book` join table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AuthorBook {
    pub author_book_id: i32,
    pub author_id: i32,
    pub book_id: i32,
}
