//! Review service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::review::{CreateReview, NewReview},
    repository::{Lookups, Procedures},
};

use super::resolver::LookupResolver;

#[derive(Clone)]
pub struct ReviewsService {
    resolver: LookupResolver,
    procedures: Arc<dyn Procedures>,
}

impl ReviewsService {
    pub fn new(lookups: Arc<dyn Lookups>, procedures: Arc<dyn Procedures>) -> Self {
        Self {
            resolver: LookupResolver::new(lookups),
            procedures,
        }
    }

    pub async fn add_review(&self, review: CreateReview) -> AppResult<NewReview> {
        let (book_id, member_id) = self
            .resolver
            .resolve_pair(&review.book, &review.member)
            .await?;

        let new_review = NewReview {
            book_id,
            member_id,
            comment: review.comment,
            review_date: review.review_date,
        };
        self.procedures.add_review(&new_review).await?;
        Ok(new_review)
    }
}
