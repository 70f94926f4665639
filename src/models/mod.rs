pub mod airport;
pub mod flight;

pub use airport::Airport;
pub use flight::{ClassOfService, Flight, FlightDraft, NewFlight, Seat};
