use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::domain::{CustomerId, HotelId, Reservation, ReservationId};
use crate::managers::{CustomerManager, HotelManager, ReservationManager};
use crate::repository::RecordError;

const GENERATED_ID_PREFIX: &str = "R";

/// Service composing the three managers so a reservation and its room move together.
#[derive(Clone)]
pub struct ReservationService {
    hotels: HotelManager,
    customers: CustomerManager,
    reservations: ReservationManager,
}

/// Result of cancelling through the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    pub reservation: Reservation,
    /// `false` when the hotel had been deleted and there was no counter to restore.
    pub room_released: bool,
    pub rooms_available: Option<u32>,
}

impl ReservationService {
    pub fn new(
        hotels: HotelManager,
        customers: CustomerManager,
        reservations: ReservationManager,
    ) -> Self {
        Self {
            hotels,
            customers,
            reservations,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(
            HotelManager::from_path(config.hotels_path()),
            CustomerManager::from_path(config.customers_path()),
            ReservationManager::from_path(config.reservations_path()),
        )
    }

    pub fn hotels(&self) -> &HotelManager {
        &self.hotels
    }

    pub fn customers(&self) -> &CustomerManager {
        &self.customers
    }

    pub fn reservations(&self) -> &ReservationManager {
        &self.reservations
    }

    /// Store `reservation` and take a room at its hotel, or do neither.
    pub fn book(&self, reservation: Reservation) -> Result<Reservation, ReservationServiceError> {
        if !self.customers.exists(&reservation.customer_id) {
            return Err(ReservationServiceError::UnknownCustomer(
                reservation.customer_id.clone(),
            ));
        }

        self.reservations.create(reservation.clone())?;

        match self.hotels.reserve_room(&reservation.hotel_id) {
            Ok(remaining) => {
                info!(
                    reservation_id = %reservation.reservation_id,
                    hotel_id = %reservation.hotel_id,
                    rooms_available = remaining,
                    "reservation booked"
                );
                Ok(reservation)
            }
            Err(err) => {
                warn!(
                    reservation_id = %reservation.reservation_id,
                    error = %err,
                    "room unavailable, rolling back reservation"
                );
                if let Err(rollback) = self.reservations.cancel(&reservation.reservation_id) {
                    warn!(
                        reservation_id = %reservation.reservation_id,
                        error = %rollback,
                        "reservation missing during rollback"
                    );
                }
                Err(ReservationServiceError::Room(err))
            }
        }
    }

    /// Book under the next free `R###` id.
    pub fn reserve(
        &self,
        customer_id: CustomerId,
        hotel_id: HotelId,
    ) -> Result<Reservation, ReservationServiceError> {
        let reservation_id = self.next_reservation_id()?;
        self.book(Reservation {
            reservation_id,
            customer_id,
            hotel_id,
        })
    }

    /// Drop the reservation and hand its room back to the hotel.
    pub fn cancel(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Cancellation, ReservationServiceError> {
        let reservation = self.reservations.cancel(reservation_id)?;

        match self.hotels.cancel_reservation(&reservation.hotel_id) {
            Ok(rooms) => Ok(Cancellation {
                reservation,
                room_released: true,
                rooms_available: Some(rooms),
            }),
            Err(err) if err.is_not_found() => {
                warn!(
                    reservation_id = %reservation.reservation_id,
                    hotel_id = %reservation.hotel_id,
                    "hotel no longer exists, no room released"
                );
                Ok(Cancellation {
                    reservation,
                    room_released: false,
                    rooms_available: None,
                })
            }
            Err(err) => {
                self.reservations.create(reservation)?;
                Err(ReservationServiceError::Room(err))
            }
        }
    }

    fn next_reservation_id(&self) -> Result<ReservationId, ReservationServiceError> {
        let highest = self
            .reservations
            .list()
            .iter()
            .filter_map(|reservation| {
                reservation
                    .reservation_id
                    .as_str()
                    .strip_prefix(GENERATED_ID_PREFIX)
                    .and_then(|suffix| suffix.parse::<u64>().ok())
            })
            .max();
        let next = match highest {
            None => 1,
            Some(highest) => highest
                .checked_add(1)
                .ok_or(ReservationServiceError::IdsExhausted)?,
        };
        Ok(ReservationId(format!("{GENERATED_ID_PREFIX}{next:03}")))
    }
}

/// Error raised by the reservation service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationServiceError {
    #[error("customer '{0}' does not exist")]
    UnknownCustomer(CustomerId),
    #[error(transparent)]
    Reservation(#[from] RecordError),
    #[error("room could not be reserved: {0}")]
    Room(RecordError),
    #[error("no generated reservation id left after the highest stored one")]
    IdsExhausted,
}
