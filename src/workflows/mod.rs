pub mod bookings;
pub mod dates;
pub mod envelope;
pub mod reservation;
pub mod search;
