//! Typed facade over the `/flights` endpoints.

use crate::models::{Flight, NewFlight};
use crate::services::{ApiClient, ApiError};

pub async fn get_flight(client: &ApiClient, id: i64) -> Result<Flight, ApiError> {
    let flight = client
        .get::<Flight>("/flights", &[("id", id.to_string())])
        .await?;
    log::info!("🛬 Fetched flight {id}");
    Ok(flight)
}

pub async fn list_flights(client: &ApiClient) -> Result<Vec<Flight>, ApiError> {
    let flights = client.get::<Vec<Flight>>("/flights", &[]).await?;
    log::info!("📋 Fetched {} flights", flights.len());
    Ok(flights)
}

/// Returns the id the backend assigned to the new record.
pub async fn create_flight(client: &ApiClient, flight: &NewFlight) -> Result<i64, ApiError> {
    let id = client.post::<NewFlight, i64>("/flights", flight).await?;
    log::info!(
        "🛫 Created flight {} ({} → {})",
        id,
        flight.origin.code(),
        flight.destination.code()
    );
    Ok(id)
}

pub async fn delete_flight(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete("/flights", &[("id", id.to_string())]).await?;
    log::info!("🗑️ Deleted flight {id}");
    Ok(())
}
