use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::{Reservation, ReservationId};
use crate::repository::{Collection, RecordError};
use crate::storage::RecordStore;

/// Reservation records only. Customer and hotel references are stored as given and
/// room counts are left alone; [`crate::service::ReservationService`] coordinates both.
#[derive(Clone)]
pub struct ReservationManager {
    reservations: Collection<Reservation>,
}

impl ReservationManager {
    pub fn new(store: Arc<dyn RecordStore<Reservation>>) -> Self {
        Self {
            reservations: Collection::new(store),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            reservations: Collection::from_path(path),
        }
    }

    pub fn create(&self, reservation: Reservation) -> Result<(), RecordError> {
        self.reservations.create(reservation)
    }

    pub fn cancel(&self, reservation_id: &ReservationId) -> Result<Reservation, RecordError> {
        self.reservations.delete(reservation_id.as_str())
    }

    pub fn display(&self, reservation_id: &ReservationId) -> Result<Reservation, RecordError> {
        let reservation = self.reservations.find(reservation_id.as_str())?;
        info!(
            reservation_id = %reservation.reservation_id,
            customer_id = %reservation.customer_id,
            hotel_id = %reservation.hotel_id,
            "reservation"
        );
        Ok(reservation)
    }

    pub fn list(&self) -> Vec<Reservation> {
        self.reservations.list()
    }
}
