//! Stored procedure calls
//!
//! Each write is a single `CALL` with positional arguments. The trailing
//! `NULL` slots are part of the procedure signatures and are always passed
//! empty.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::Procedures;
use crate::{
    error::{AppError, AppResult},
    models::{NewFavorite, NewLoan, NewReservation, NewReview},
};

#[derive(Clone)]
pub struct ProceduresRepository {
    pool: Pool<Postgres>,
}

impl ProceduresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Procedures for ProceduresRepository {
    async fn create_loan(&self, loan: &NewLoan) -> AppResult<()> {
        tracing::info!(
            book_id = loan.book_id,
            member_id = loan.member_id,
            loan_date = %loan.loan_date,
            "CALL create_loan"
        );

        sqlx::query("CALL create_loan($1, $2, $3, NULL)")
            .bind(loan.book_id)
            .bind(loan.member_id)
            .bind(loan.loan_date)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::procedure("create_loan", e))?;
        Ok(())
    }

    async fn create_reservation(&self, reservation: &NewReservation) -> AppResult<()> {
        tracing::info!(
            book_id = reservation.book_id,
            member_id = reservation.member_id,
            reservation_date = %reservation.reservation_date,
            "CALL create_reservation"
        );

        sqlx::query("CALL create_reservation($1, $2, $3, NULL)")
            .bind(reservation.book_id)
            .bind(reservation.member_id)
            .bind(reservation.reservation_date)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::procedure("create_reservation", e))?;
        Ok(())
    }

    async fn add_review(&self, review: &NewReview) -> AppResult<()> {
        tracing::info!(
            book_id = review.book_id,
            member_id = review.member_id,
            review_date = %review.review_date,
            "CALL add_review"
        );

        sqlx::query("CALL add_review($1, $2, $3, $4, NULL)")
            .bind(review.book_id)
            .bind(review.member_id)
            .bind(&review.comment)
            .bind(review.review_date)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::procedure("add_review", e))?;
        Ok(())
    }

    async fn add_to_favorites(&self, favorite: &NewFavorite) -> AppResult<()> {
        tracing::info!(
            book_id = favorite.book_id,
            member_id = favorite.member_id,
            "CALL add_to_favorites"
        );

        sqlx::query("CALL add_to_favorites($1, $2, NULL)")
            .bind(favorite.book_id)
            .bind(favorite.member_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::procedure("add_to_favorites", e))?;
        Ok(())
    }

    async fn handle_return(&self, loan_id: i32) -> AppResult<()> {
        tracing::info!(loan_id, "CALL handle_return");

        // No trailing slot on this one
        sqlx::query("CALL handle_return($1)")
            .bind(loan_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::procedure("handle_return", e))?;
        Ok(())
    }
}
