//! Loan model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `loan` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub loan_id: i32,
    pub book_id: Option<i32>,
    pub member_id: Option<i32>,
    pub loan_date: Option<NaiveDate>,
    /// Computed by `create_loan`
    pub due_date: Option<NaiveDate>,
    /// Set by `handle_return`
    pub return_date: Option<NaiveDate>,
}

impl Loan {
    pub fn is_returned(&self) -> bool {
        self.return_date.is_some()
    }
}

/// Create loan request with names still unresolved
#[derive(Debug, Clone)]
pub struct CreateLoan {
    pub book: String,
    pub member: String,
    pub loan_date: NaiveDate,
}

/// Arguments of the `create_loan` procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewLoan {
    pub book_id: i32,
    pub member_id: i32,
    pub loan_date: NaiveDate,
}

/// Return request. Both fields are surrogate keys, not names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnLoan {
    pub book_id: i32,
    pub member_id: i32,
}
