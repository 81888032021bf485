pub mod models;
pub mod passengers;
pub mod manager;
pub mod finance;

pub use models::{Booking, BookingId, Passenger, PassengerId};
pub use passengers::PassengerDirectory;
pub use manager::{ReservationError, ReservationManager, DEFAULT_FIRST_BOOKING_ID};
