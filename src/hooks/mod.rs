pub mod use_flight;

pub use use_flight::use_flight;
