//! Reservation service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::reservation::{CreateReservation, NewReservation},
    repository::{Lookups, Procedures},
};

use super::resolver::LookupResolver;

#[derive(Clone)]
pub struct ReservationsService {
    resolver: LookupResolver,
    procedures: Arc<dyn Procedures>,
}

impl ReservationsService {
    pub fn new(lookups: Arc<dyn Lookups>, procedures: Arc<dyn Procedures>) -> Self {
        Self {
            resolver: LookupResolver::new(lookups),
            procedures,
        }
    }

    /// Place a reservation; queueing is the procedure's business
    pub async fn create_reservation(
        &self,
        reservation: CreateReservation,
    ) -> AppResult<NewReservation> {
        let (book_id, member_id) = self
            .resolver
            .resolve_pair(&reservation.book, &reservation.member)
            .await?;

        let new_reservation = NewReservation {
            book_id,
            member_id,
            reservation_date: reservation.reservation_date,
        };
        self.procedures.create_reservation(&new_reservation).await?;
        Ok(new_reservation)
    }
}
