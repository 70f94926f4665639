use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Airport;
use crate::utils::geo::spherical_distance_km;
use crate::utils::time::flight_duration_minutes;

/// Seat position, as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Aisle,
    Middle,
    Window,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Aisle => write!(f, "aisle"),
            Seat::Middle => write!(f, "middle"),
            Seat::Window => write!(f, "window"),
        }
    }
}

/// Ticket class, mirroring the backend's check constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassOfService {
    Private,
    First,
    Business,
    #[serde(rename = "economy+")]
    EconomyPlus,
    Economy,
}

impl fmt::Display for ClassOfService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassOfService::Private => write!(f, "private"),
            ClassOfService::First => write!(f, "first"),
            ClassOfService::Business => write!(f, "business"),
            ClassOfService::EconomyPlus => write!(f, "economy+"),
            ClassOfService::Economy => write!(f, "economy"),
        }
    }
}

/// A flight as owned by the backend, fetched by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: i64,
    pub flight_number: Option<String>,
    pub date: String,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub origin: Airport,
    pub destination: Airport,
    pub seat: Option<Seat>,
    pub ticket_class: Option<ClassOfService>,
    pub airplane: Option<String>,
    pub notes: Option<String>,
    /// Minutes, derived at submit time.
    pub duration: Option<i64>,
    /// Kilometers, derived at submit time.
    pub distance: Option<i64>,
}

/// Payload sent on creation. Same shape as [`Flight`] minus the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub flight_number: Option<String>,
    pub date: String,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub origin: Airport,
    pub destination: Airport,
    pub seat: Option<Seat>,
    pub ticket_class: Option<ClassOfService>,
    pub airplane: Option<String>,
    pub notes: Option<String>,
    pub duration: Option<i64>,
    pub distance: Option<i64>,
}

/// The in-progress form state of the creation screen. Duration and distance
/// are not part of the draft: they are recomputed from scratch every time a
/// submission payload is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlightDraft {
    pub flight_number: Option<String>,
    pub date: String,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub origin: Option<Airport>,
    pub destination: Option<Airport>,
    pub seat: Option<Seat>,
    pub ticket_class: Option<ClassOfService>,
    pub airplane: Option<String>,
    pub notes: Option<String>,
}

impl FlightDraft {
    /// Origin, destination and date are the only required fields; the submit
    /// button stays disabled until all three are populated.
    pub fn is_submittable(&self) -> bool {
        self.origin.is_some() && self.destination.is_some() && !self.date.is_empty()
    }

    /// Build the record to send to the backend. Pure: the draft is left
    /// untouched, derived fields are computed fresh on every call.
    /// Returns `None` while the draft is not submittable.
    pub fn to_submission(&self) -> Option<NewFlight> {
        if !self.is_submittable() {
            return None;
        }
        let origin = self.origin.clone()?;
        let destination = self.destination.clone()?;

        let duration = match (&self.departure_time, &self.arrival_time) {
            (Some(dep), Some(arr)) => flight_duration_minutes(&self.date, dep, arr),
            _ => None,
        };
        let distance = spherical_distance_km(
            origin.latitude,
            origin.longitude,
            destination.latitude,
            destination.longitude,
        );

        Some(NewFlight {
            flight_number: self.flight_number.clone(),
            date: self.date.clone(),
            departure_time: self.departure_time.clone(),
            arrival_time: self.arrival_time.clone(),
            origin,
            destination,
            seat: self.seat,
            ticket_class: self.ticket_class,
            airplane: self.airplane.clone(),
            notes: self.notes.clone(),
            duration,
            distance: Some(distance),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(iata: &str, lat: f64, lon: f64) -> Airport {
        Airport {
            icao: None,
            iata: Some(iata.to_string()),
            name: None,
            city: iata.to_string(),
            country: "Testland".to_string(),
            latitude: lat,
            longitude: lon,
        }
    }

    fn submittable_draft() -> FlightDraft {
        FlightDraft {
            date: "2024-06-01".to_string(),
            origin: Some(airport("AAA", 0.0, 0.0)),
            destination: Some(airport("BBB", 0.0, 1.0)),
            ..FlightDraft::default()
        }
    }

    #[test]
    fn submittable_requires_origin_destination_and_date() {
        let full = submittable_draft();
        assert!(full.is_submittable());

        let mut missing_origin = full.clone();
        missing_origin.origin = None;
        assert!(!missing_origin.is_submittable());

        let mut missing_destination = full.clone();
        missing_destination.destination = None;
        assert!(!missing_destination.is_submittable());

        let mut missing_date = full;
        missing_date.date = String::new();
        assert!(!missing_date.is_submittable());
    }

    #[test]
    fn optional_fields_do_not_gate_submission() {
        let draft = submittable_draft();
        assert!(draft.seat.is_none());
        assert!(draft.airplane.is_none());
        assert!(draft.departure_time.is_none());
        assert!(draft.is_submittable());
    }

    #[test]
    fn submission_computes_distance_and_skips_duration_without_times() {
        let payload = submittable_draft().to_submission().unwrap();
        // one degree of longitude at the equator
        assert_eq!(payload.distance, Some(111));
        assert_eq!(payload.duration, None);
    }

    #[test]
    fn submission_computes_duration_when_times_present() {
        let mut draft = submittable_draft();
        draft.departure_time = Some("10:00".to_string());
        draft.arrival_time = Some("11:30".to_string());

        let payload = draft.to_submission().unwrap();
        assert_eq!(payload.duration, Some(90));
        // the draft itself was not mutated
        assert_eq!(draft.departure_time.as_deref(), Some("10:00"));
    }

    #[test]
    fn submission_refused_while_incomplete() {
        let mut draft = submittable_draft();
        draft.origin = None;
        assert_eq!(draft.to_submission(), None);
    }

    #[test]
    fn seat_and_class_wire_names() {
        assert_eq!(serde_json::to_string(&Seat::Window).unwrap(), "\"window\"");
        assert_eq!(
            serde_json::to_string(&ClassOfService::EconomyPlus).unwrap(),
            "\"economy+\""
        );
        let seat: Seat = serde_json::from_str("\"aisle\"").unwrap();
        assert_eq!(seat, Seat::Aisle);
    }

    #[test]
    fn flight_wire_names_are_camel_case() {
        let payload = submittable_draft().to_submission().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("flightNumber").is_some());
        assert!(json.get("departureTime").is_some());
        assert!(json.get("flight_number").is_none());
    }
}
