//! Reservation endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::reservation::CreateReservation,
};

use super::form::{parse_date, required, FormData};

/// Create reservation form
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationForm {
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
    /// Reservation date (YYYY-MM-DD)
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub reservation_date: Option<String>,
}

impl TryFrom<CreateReservationForm> for CreateReservation {
    type Error = AppError;

    fn try_from(form: CreateReservationForm) -> AppResult<Self> {
        form.validate()?;
        let reservation_date = required("reservation_date", form.reservation_date)?;
        Ok(CreateReservation {
            book: required("book", form.book)?,
            member: required("member", form.member)?,
            reservation_date: parse_date("reservation_date", &reservation_date)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationResponse {
    pub book: String,
    pub member: String,
    pub reservation_date: NaiveDate,
}

/// Place a reservation
#[utoipa::path(
    post,
    path = "/create-reservation/",
    tag = "reservations",
    request_body(content = CreateReservationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 400, description = "Invalid form, or book or member not found"),
        (status = 422, description = "Rejected by create_reservation")
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    FormData(form): FormData<CreateReservationForm>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    let request = CreateReservation::try_from(form)?;
    let response = ReservationResponse {
        book: request.book.clone(),
        member: request.member.clone(),
        reservation_date: request.reservation_date,
    };

    state.services.reservations.create_reservation(request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
