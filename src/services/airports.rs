//! Airport lookup backing the autocomplete input.

use crate::models::Airport;
use crate::services::{ApiClient, ApiError};

pub async fn search_airports(client: &ApiClient, query: &str) -> Result<Vec<Airport>, ApiError> {
    client
        .get::<Vec<Airport>>("/airports", &[("q", query.to_string())])
        .await
}
