//! Favorite endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::favorite::CreateFavorite,
};

use super::form::{required, FormData};

/// Create favorite form
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFavoriteForm {
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
}

impl TryFrom<CreateFavoriteForm> for CreateFavorite {
    type Error = AppError;

    fn try_from(form: CreateFavoriteForm) -> AppResult<Self> {
        form.validate()?;
        Ok(CreateFavorite {
            book: required("book", form.book)?,
            member: required("member", form.member)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteResponse {
    pub book: String,
    pub member: String,
}

/// Add a book to a member's favorites
#[utoipa::path(
    post,
    path = "/create-favorite/",
    tag = "favorites",
    request_body(content = CreateFavoriteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Favorite added", body = FavoriteResponse),
        (status = 400, description = "Invalid form, or book or member not found"),
        (status = 422, description = "Rejected by add_to_favorites")
    )
)]
pub async fn create_favorite(
    State(state): State<crate::AppState>,
    FormData(form): FormData<CreateFavoriteForm>,
) -> AppResult<(StatusCode, Json<FavoriteResponse>)> {
    let request = CreateFavorite::try_from(form)?;
    let response = FavoriteResponse {
        book: request.book.clone(),
        member: request.member.clone(),
    };

    state.services.favorites.add_favorite(request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
