//! Read-only queries backing name resolution and the return path

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::Lookups;
use crate::{
    error::{AppError, AppResult},
    models::{Book, Loan, Member},
};

#[derive(Clone)]
pub struct LookupsRepository {
    pool: Pool<Postgres>,
}

impl LookupsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Lookups for LookupsRepository {
    async fn books_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT book_id, title, publication_date, amount FROM book WHERE title = $1 ORDER BY book_id LIMIT 2",
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    async fn members_by_name(&self, name: &str) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT member_id, name, phone_number, address FROM member WHERE name = $1 ORDER BY member_id LIMIT 2",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(members)
    }

    async fn book_exists(&self, book_id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM book WHERE book_id = $1)")
            .bind(book_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn member_exists(&self, member_id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM member WHERE member_id = $1)")
                .bind(member_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn loans_for(&self, book_id: i32, member_id: i32) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(
            r#"
            SELECT loan_id, book_id, member_id, loan_date, due_date, return_date
            FROM loan
            WHERE book_id = $1 AND member_id = $2
            ORDER BY loan_id
            LIMIT 2
            "#,
        )
        .bind(book_id)
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(loans)
    }

    async fn loan_by_id(&self, loan_id: i32) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>(
            "SELECT loan_id, book_id, member_id, loan_date, due_date, return_date FROM loan WHERE loan_id = $1",
        )
        .bind(loan_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", loan_id)))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
