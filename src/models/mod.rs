pub mod booking;
pub mod hotel;
pub mod payment;
pub mod room;
