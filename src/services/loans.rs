//! Loan management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::loan::{CreateLoan, Loan, NewLoan, ReturnLoan},
    repository::{Lookups, Procedures},
};

use super::resolver::LookupResolver;

/// Message for every failure of the return lookup
pub const RETURN_LOOKUP_FAILED: &str = "Book, member, or loan not found";

#[derive(Clone)]
pub struct LoansService {
    resolver: LookupResolver,
    lookups: Arc<dyn Lookups>,
    procedures: Arc<dyn Procedures>,
}

impl LoansService {
    pub fn new(lookups: Arc<dyn Lookups>, procedures: Arc<dyn Procedures>) -> Self {
        Self {
            resolver: LookupResolver::new(lookups.clone()),
            lookups,
            procedures,
        }
    }

    /// Create a new loan. Due date and availability are decided by the
    /// `create_loan` procedure.
    pub async fn create_loan(&self, loan: CreateLoan) -> AppResult<NewLoan> {
        let (book_id, member_id) = self.resolver.resolve_pair(&loan.book, &loan.member).await?;

        let new_loan = NewLoan {
            book_id,
            member_id,
            loan_date: loan.loan_date,
        };
        self.procedures.create_loan(&new_loan).await?;
        Ok(new_loan)
    }

    /// Return the loan joining a book and a member, both given by id.
    /// Returns the loan as it reads after `handle_return`.
    pub async fn return_loan(&self, request: ReturnLoan) -> AppResult<Loan> {
        let loan = self.find_loan(request).await?;
        if loan.is_returned() {
            // handle_return owns that rule
            tracing::debug!(loan_id = loan.loan_id, "Loan already carries a return date");
        }

        self.procedures.handle_return(loan.loan_id).await?;
        self.lookups.loan_by_id(loan.loan_id).await
    }

    async fn find_loan(&self, request: ReturnLoan) -> AppResult<Loan> {
        let not_found = || AppError::Validation(RETURN_LOOKUP_FAILED.to_string());

        if !self.lookups.book_exists(request.book_id).await? {
            return Err(not_found());
        }
        if !self.lookups.member_exists(request.member_id).await? {
            return Err(not_found());
        }

        let mut loans = self
            .lookups
            .loans_for(request.book_id, request.member_id)
            .await?;
        if loans.len() > 1 {
            return Err(AppError::Ambiguous(format!(
                "More than one loan joins book {} and member {}",
                request.book_id, request.member_id
            )));
        }
        loans.pop().ok_or_else(not_found)
    }
}
