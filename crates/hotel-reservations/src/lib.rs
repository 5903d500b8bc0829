//! Hotel, customer, and reservation records kept in flat JSON files.
//!
//! Each entity lives in its own store file and every operation reloads the whole
//! collection, mutates it in memory, and writes it back. [`service::ReservationService`]
//! is the entry point when a reservation and a hotel's room count must change together.

pub mod config;
pub mod domain;
pub mod error;
pub mod managers;
pub mod repository;
pub mod service;
pub mod storage;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use domain::{
    Customer, CustomerId, EntityKind, Hotel, HotelId, Record, Reservation, ReservationId,
};
pub use managers::{CustomerManager, HotelManager, ReservationManager};
pub use repository::{Collection, RecordError};
pub use service::{Cancellation, ReservationService, ReservationServiceError};
pub use storage::{JsonFileStore, RecordStore, StoreError};
