//! Form request decoding
//!
//! Write endpoints take `multipart/form-data` or
//! `application/x-www-form-urlencoded` bodies. Both decode into the same
//! request struct, whose fields are all optional strings so that presence
//! and format are reported as validation errors rather than rejections.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use axum_extra::extract::Multipart;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

pub const REQUIRED: &str = "This field is required.";

/// Extractor for form-encoded or multipart request bodies
pub struct FormData<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormData<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            let fields = collect_fields(multipart).await?;
            let value = serde_json::from_value(Value::Object(fields))
                .map_err(|e| AppError::BadRequest(format!("Invalid form data: {}", e)))?;
            Ok(FormData(value))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(FormData(value))
        } else {
            Err(AppError::BadRequest(
                "Expected multipart/form-data or application/x-www-form-urlencoded body".to_string(),
            ))
        }
    }
}

/// Read every named text part. A repeated name keeps its last value.
async fn collect_fields(mut multipart: Multipart) -> AppResult<Map<String, Value>> {
    let mut fields = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(format!("{}: {}", name, e)))?;
        fields.insert(name, Value::String(text));
    }
    Ok(fields)
}

/// Take a field that validation has already required
pub fn required(field: &str, value: Option<String>) -> AppResult<String> {
    value.ok_or_else(|| AppError::Validation(format!("{}: {}", field, REQUIRED)))
}

/// Parse an ISO-8601 calendar date
pub fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!(
            "{}: Date has wrong format. Use YYYY-MM-DD.",
            field
        ))
    })
}

/// Parse a surrogate key
pub fn parse_id(field: &str, value: &str) -> AppResult<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::Validation(format!("{}: A valid integer is required.", field)))
}
