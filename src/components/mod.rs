pub mod airport_input;
pub mod app;
pub mod elements;
pub mod flight_list;
pub mod new_flight;
pub mod single_flight;

pub use airport_input::{AirportField, AirportInput};
pub use app::{App, Route};
pub use flight_list::FlightList;
pub use new_flight::NewFlight;
pub use single_flight::SingleFlight;
