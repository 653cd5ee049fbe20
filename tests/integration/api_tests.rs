//! Router-level tests over the in-memory fake

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use libris_server::{
    api::create_router,
    models::{NewFavorite, NewLoan, NewReservation, NewReview},
    services::Services,
    AppState,
};

use crate::fake_store::{Call, FakeLibrary};

const BOUNDARY: &str = "libris-test-boundary";

fn app(fake: &Arc<FakeLibrary>) -> Router {
    create_router(AppState::new(Services::new(fake.clone(), fake.clone())))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn form_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_create_loan_resolves_names_and_calls_procedure() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, body) = send(
        app(&fake),
        form_request(
            Method::POST,
            "/api/v1/create-loan/",
            "book=Dune&member=Ann+Lee&loan_date=2024-03-01",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["book"], "Dune");
    assert_eq!(body["member"], "Ann Lee");
    assert_eq!(body["loan_date"], "2024-03-01");
    assert_eq!(
        fake.calls(),
        vec![Call::CreateLoan(NewLoan {
            book_id: 1,
            member_id: 1,
            loan_date: date(2024, 3, 1),
        })]
    );
}

#[tokio::test]
async fn test_create_loan_accepts_multipart() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, _) = send(
        app(&fake),
        multipart_request(
            "/api/v1/create-loan/",
            &[("book", "Emma"), ("member", "Bo"), ("loan_date", "2024-04-15")],
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        fake.calls(),
        vec![Call::CreateLoan(NewLoan {
            book_id: 2,
            member_id: 2,
            loan_date: date(2024, 4, 15),
        })]
    );
}

#[tokio::test]
async fn test_create_loan_unknown_book() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, body) = send(
        app(&fake),
        form_request(
            Method::POST,
            "/api/v1/create-loan/",
            "book=Missing&member=Ann+Lee&loan_date=2024-03-01",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Book not found");
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_create_reservation_unknown_member() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, body) = send(
        app(&fake),
        form_request(
            Method::POST,
            "/api/v1/create-reservation/",
            "book=Dune&member=Nobody&reservation_date=2024-03-01",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Member not found");
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_create_reservation() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, body) = send(
        app(&fake),
        form_request(
            Method::POST,
            "/api/v1/create-reservation/",
            "book=Emma&member=Ann+Lee&reservation_date=2024-06-30",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["reservation_date"], "2024-06-30");
    assert_eq!(
        fake.calls(),
        vec![Call::CreateReservation(NewReservation {
            book_id: 2,
            member_id: 1,
            reservation_date: date(2024, 6, 30),
        })]
    );
}

#[tokio::test]
async fn test_create_review_and_favorite() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, _) = send(
        app(&fake),
        form_request(
            Method::POST,
            "/api/v1/create-review/",
            "book=Dune&member=Bo&comment=Sand+everywhere&review_date=2024-02-02",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app(&fake),
        form_request(Method::POST, "/api/v1/create-favorite/", "book=Dune&member=Bo"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["book"], "Dune");

    assert_eq!(
        fake.calls(),
        vec![
            Call::AddReview(NewReview {
                book_id: 1,
                member_id: 2,
                comment: "Sand everywhere".to_string(),
                review_date: date(2024, 2, 2),
            }),
            Call::AddToFavorites(NewFavorite {
                book_id: 1,
                member_id: 2,
            }),
        ]
    );
}

#[tokio::test]
async fn test_review_without_comment_fails_before_lookup() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, body) = send(
        app(&fake),
        form_request(
            Method::POST,
            "/api/v1/create-review/",
            "book=Dune&member=Bo&review_date=2024-02-02",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "comment: This field is required.");
    assert_eq!(fake.lookup_count(), 0);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_bad_date_is_a_validation_error() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, body) = send(
        app(&fake),
        form_request(
            Method::POST,
            "/api/v1/create-loan/",
            "book=Dune&member=Bo&loan_date=03%2F01%2F2024",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert_eq!(fake.lookup_count(), 0);
}

#[tokio::test]
async fn test_duplicate_title_is_ambiguous() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, body) = send(
        app(&fake),
        form_request(Method::POST, "/api/v1/create-favorite/", "book=Solaris&member=Bo"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Ambiguous");
    assert_eq!(body["code"], 22);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_procedure_rejection_is_reported() {
    let fake = Arc::new(FakeLibrary::seeded());
    fake.reject_procedures("no copies available");

    let (status, body) = send(
        app(&fake),
        form_request(
            Method::POST,
            "/api/v1/create-loan/",
            "book=Dune&member=Bo&loan_date=2024-03-01",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "ProcedureFailure");
    assert_eq!(body["message"], "no copies available");
}

#[tokio::test]
async fn test_json_body_is_rejected() {
    let fake = Arc::new(FakeLibrary::seeded());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/create-favorite/")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"book":"Dune","member":"Bo"}"#))
        .unwrap();
    let (status, _) = send(app(&fake), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_return_without_loan_fails() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, body) = send(
        app(&fake),
        form_request(Method::PUT, "/api/v1/return-loan/", "book=1&member=2"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Book, member, or loan not found");
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_return_takes_ids_not_names() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, body) = send(
        app(&fake),
        form_request(Method::PUT, "/api/v1/return-loan/", "book=Dune&member=Bo"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "book: A valid integer is required.");
}

#[tokio::test]
async fn test_create_then_return_round_trip() {
    let fake = Arc::new(FakeLibrary::seeded());

    let (status, _) = send(
        app(&fake),
        form_request(
            Method::POST,
            "/api/v1/create-loan/",
            "book=Emma&member=Ann+Lee&loan_date=2024-03-01",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let loan_id = fake.loans()[0].loan_id;

    let (status, body) = send(
        app(&fake),
        form_request(Method::PATCH, "/api/v1/return-loan/", "book=2&member=1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loan_id"], loan_id);
    assert_eq!(body["return_date"], "2024-03-10");

    let returns: Vec<Call> = fake
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::HandleReturn(_)))
        .collect();
    assert_eq!(returns, vec![Call::HandleReturn(loan_id)]);
}

#[tokio::test]
async fn test_health_and_readiness() {
    let fake = Arc::new(FakeLibrary::seeded());

    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(&fake), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let request = Request::builder()
        .uri("/api/v1/ready")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(&fake), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}
