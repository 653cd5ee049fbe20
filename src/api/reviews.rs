//! Review endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::review::CreateReview,
};

use super::form::{parse_date, required, FormData};

/// Create review form
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewForm {
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
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub comment: Option<String>,
    /// Review date (YYYY-MM-DD)
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub review_date: Option<String>,
}

impl TryFrom<CreateReviewForm> for CreateReview {
    type Error = AppError;

    fn try_from(form: CreateReviewForm) -> AppResult<Self> {
        form.validate()?;
        let review_date = required("review_date", form.review_date)?;
        Ok(CreateReview {
            book: required("book", form.book)?,
            member: required("member", form.member)?,
            comment: required("comment", form.comment)?,
            review_date: parse_date("review_date", &review_date)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub book: String,
    pub member: String,
    pub comment: String,
    pub review_date: NaiveDate,
}

/// Add a review
#[utoipa::path(
    post,
    path = "/create-review/",
    tag = "reviews",
    request_body(content = CreateReviewForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Review added", body = ReviewResponse),
        (status = 400, description = "Invalid form, or book or member not found"),
        (status = 422, description = "Rejected by add_review")
    )
)]
pub async fn create_review(
    State(state): State<crate::AppState>,
    FormData(form): FormData<CreateReviewForm>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    let request = CreateReview::try_from(form)?;
    let response = ReviewResponse {
        book: request.book.clone(),
        member: request.member.clone(),
        comment: request.comment.clone(),
        review_date: request.review_date,
    };

    state.services.reviews.add_review(request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
