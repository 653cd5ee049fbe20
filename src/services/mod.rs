//! Business logic services
//!
//! Every write follows the same shape: resolve names through
//! [`resolver::LookupResolver`], then hand the ids to one stored procedure.

pub mod favorites;
pub mod loans;
pub mod reservations;
pub mod resolver;
pub mod reviews;

use std::sync::Arc;

use crate::{
    error::AppResult,
    repository::{Lookups, Procedures, Repository},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub loans: loans::LoansService,
    pub reservations: reservations::ReservationsService,
    pub reviews: reviews::ReviewsService,
    pub favorites: favorites::FavoritesService,
    lookups: Arc<dyn Lookups>,
}

impl Services {
    /// Create all services over the given lookup and procedure backends
    pub fn new(lookups: Arc<dyn Lookups>, procedures: Arc<dyn Procedures>) -> Self {
        Self {
            loans: loans::LoansService::new(lookups.clone(), procedures.clone()),
            reservations: reservations::ReservationsService::new(lookups.clone(), procedures.clone()),
            reviews: reviews::ReviewsService::new(lookups.clone(), procedures.clone()),
            favorites: favorites::FavoritesService::new(lookups.clone(), procedures),
            lookups,
        }
    }

    /// Check that the database answers
    pub async fn ping(&self) -> AppResult<()> {
        self.lookups.ping().await
    }

    /// Create all services backed by Postgres
    pub fn from_repository(repository: Repository) -> Self {
        Self::new(
            Arc::new(repository.lookups),
            Arc::new(repository.procedures),
        )
    }
}
