use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::{Hotel, HotelId};
use crate::repository::{Collection, RecordError};
use crate::storage::RecordStore;

/// CRUD over the hotel store plus the room-availability counter.
#[derive(Clone)]
pub struct HotelManager {
    hotels: Collection<Hotel>,
}

impl HotelManager {
    pub fn new(store: Arc<dyn RecordStore<Hotel>>) -> Self {
        Self {
            hotels: Collection::new(store),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            hotels: Collection::from_path(path),
        }
    }

    pub fn create(&self, hotel: Hotel) -> Result<(), RecordError> {
        self.hotels.create(hotel)
    }

    pub fn delete(&self, hotel_id: &HotelId) -> Result<Hotel, RecordError> {
        self.hotels.delete(hotel_id.as_str())
    }

    /// Look up a hotel and report it on the output channel. Never writes.
    pub fn display(&self, hotel_id: &HotelId) -> Result<Hotel, RecordError> {
        let hotel = self.hotels.find(hotel_id.as_str())?;
        info!(
            hotel_id = %hotel.hotel_id,
            name = %hotel.name,
            location = %hotel.location,
            rooms_available = hotel.rooms_available,
            "hotel"
        );
        Ok(hotel)
    }

    pub fn modify(
        &self,
        hotel_id: &HotelId,
        field: &str,
        new_value: &str,
    ) -> Result<Hotel, RecordError> {
        self.hotels.modify(hotel_id.as_str(), field, new_value)
    }

    /// Take one room, returning how many remain.
    pub fn reserve_room(&self, hotel_id: &HotelId) -> Result<u32, RecordError> {
        self.hotels.update(hotel_id.as_str(), |hotel| {
            if hotel.rooms_available == 0 {
                return Err(RecordError::NoRoomsAvailable {
                    hotel_id: hotel.hotel_id.to_string(),
                });
            }
            hotel.rooms_available -= 1;
            Ok(hotel.rooms_available)
        })
    }

    /// Give one room back, returning the new count. There is no upper bound.
    pub fn cancel_reservation(&self, hotel_id: &HotelId) -> Result<u32, RecordError> {
        self.hotels.update(hotel_id.as_str(), |hotel| {
            hotel.rooms_available = hotel.rooms_available.saturating_add(1);
            Ok(hotel.rooms_available)
        })
    }

    pub fn list(&self) -> Vec<Hotel> {
        self.hotels.list()
    }

    pub fn exists(&self, hotel_id: &HotelId) -> bool {
        self.list().iter().any(|hotel| &hotel.hotel_id == hotel_id)
    }
}
