//! Loan management endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::loan::{CreateLoan, Loan, ReturnLoan},
};

use super::form::{parse_date, parse_id, required, FormData};

/// Create loan form
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLoanForm {
    /// Book title
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub book: Option<String>,
    /// Member name
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub member: Option<String>,
    /// Loan date (YYYY-MM-DD)
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub loan_date: Option<String>,
}

impl TryFrom<CreateLoanForm> for CreateLoan {
    type Error = AppError;

    fn try_from(form: CreateLoanForm) -> AppResult<Self> {
        form.validate()?;
        let loan_date = required("loan_date", form.loan_date)?;
        Ok(CreateLoan {
            book: required("book", form.book)?,
            member: required("member", form.member)?,
            loan_date: parse_date("loan_date", &loan_date)?,
        })
    }
}

/// Return loan form. Both fields carry ids, unlike the create forms.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReturnLoanForm {
    /// Book ID
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub book: Option<String>,
    /// Member ID
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub member: Option<String>,
}

impl TryFrom<ReturnLoanForm> for ReturnLoan {
    type Error = AppError;

    fn try_from(form: ReturnLoanForm) -> AppResult<Self> {
        form.validate()?;
        let book = required("book", form.book)?;
        let member = required("member", form.member)?;
        Ok(ReturnLoan {
            book_id: parse_id("book", &book)?,
            member_id: parse_id("member", &member)?,
        })
    }
}

/// Created loan, as submitted
#[derive(Debug, Serialize, ToSchema)]
pub struct LoanResponse {
    pub book: String,
    pub member: String,
    pub loan_date: NaiveDate,
}

/// Create a new loan
#[utoipa::path(
    post,
    path = "/create-loan/",
    tag = "loans",
    request_body(content = CreateLoanForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Loan created", body = LoanResponse),
        (status = 400, description = "Invalid form, or book or member not found"),
        (status = 422, description = "Rejected by create_loan")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    FormData(form): FormData<CreateLoanForm>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    let request = CreateLoan::try_from(form)?;
    let response = LoanResponse {
        book: request.book.clone(),
        member: request.member.clone(),
        loan_date: request.loan_date,
    };

    state.services.loans.create_loan(request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Return a borrowed book
#[utoipa::path(
    put,
    path = "/return-loan/",
    tag = "loans",
    request_body(content = ReturnLoanForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Loan returned", body = Loan),
        (status = 400, description = "Invalid form, or book, member or loan not found"),
        (status = 422, description = "Rejected by handle_return")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    FormData(form): FormData<ReturnLoanForm>,
) -> AppResult<Json<Loan>> {
    let request = ReturnLoan::try_from(form)?;
    let loan = state.services.loans.return_loan(request).await?;
    Ok(Json(loan))
}
