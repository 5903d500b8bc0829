//! Per-entity managers over the flat-file stores.

mod customers;
mod hotels;
mod reservations;

pub use customers::CustomerManager;
pub use hotels::HotelManager;
pub use reservations::ReservationManager;
