pub mod constants;
pub mod geo;
pub mod time;

pub use constants::API_BASE_URL;
