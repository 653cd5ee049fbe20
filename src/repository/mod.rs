//! Repository layer for database operations
//!
//! The service layer only sees the [`Lookups`] and [`Procedures`] traits.
//! [`Repository`] bundles their Postgres implementations.

pub mod lookups;
pub mod procedures;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, Loan, Member, NewFavorite, NewLoan, NewReservation, NewReview},
};

/// Read-only queries used to resolve request fields to rows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Lookups: Send + Sync {
    /// Books whose title equals `title`, at most two rows
    async fn books_by_title(&self, title: &str) -> AppResult<Vec<Book>>;

    /// Members whose name equals `name`, at most two rows
    async fn members_by_name(&self, name: &str) -> AppResult<Vec<Member>>;

    async fn book_exists(&self, book_id: i32) -> AppResult<bool>;

    async fn member_exists(&self, member_id: i32) -> AppResult<bool>;

    /// Loans joining the given book and member, at most two rows
    async fn loans_for(&self, book_id: i32, member_id: i32) -> AppResult<Vec<Loan>>;

    async fn loan_by_id(&self, loan_id: i32) -> AppResult<Loan>;

    /// Round-trip to the database, for readiness probes
    async fn ping(&self) -> AppResult<()>;
}

/// Stored procedures owning every write. No business rule is checked on
/// this side of the call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Procedures: Send + Sync {
    async fn create_loan(&self, loan: &NewLoan) -> AppResult<()>;

    async fn create_reservation(&self, reservation: &NewReservation) -> AppResult<()>;

    async fn add_review(&self, review: &NewReview) -> AppResult<()>;

    async fn add_to_favorites(&self, favorite: &NewFavorite) -> AppResult<()>;

    async fn handle_return(&self, loan_id: i32) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub lookups: lookups::LookupsRepository,
    pub procedures: procedures::ProceduresRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            lookups: lookups::LookupsRepository::new(pool.clone()),
            procedures: procedures::ProceduresRepository::new(pool),
        }
    }
}
