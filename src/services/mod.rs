pub mod airports;
pub mod api_client;
pub mod flights;

pub use api_client::{ApiClient, ApiError};
