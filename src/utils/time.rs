//! Elapsed-time math for the duration field.

use chrono::{Duration, NaiveDate, NaiveTime};

/// Minutes between departure and arrival on the given date. An arrival at or
/// before the departure is treated as landing the next calendar day
/// (overnight flights). Returns `None` when any part fails to parse.
pub fn flight_duration_minutes(date: &str, departure: &str, arrival: &str) -> Option<i64> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let departure = date.and_time(parse_time(departure)?);
    let mut arrival = date.and_time(parse_time(arrival)?);

    if arrival <= departure {
        arrival = arrival + Duration::days(1);
    }

    let millis = (arrival - departure).num_milliseconds();
    Some((millis as f64 / 60_000.0).round() as i64)
}

/// Time inputs yield HH:MM, or HH:MM:SS when a step with seconds is set.
fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_duration() {
        assert_eq!(
            flight_duration_minutes("2024-06-01", "10:00", "11:30"),
            Some(90)
        );
    }

    #[test]
    fn overnight_rollover() {
        assert_eq!(
            flight_duration_minutes("2024-06-01", "23:00", "01:00"),
            Some(120)
        );
    }

    #[test]
    fn equal_times_roll_over_a_full_day() {
        assert_eq!(
            flight_duration_minutes("2024-06-01", "08:00", "08:00"),
            Some(24 * 60)
        );
    }

    #[test]
    fn seconds_are_accepted() {
        assert_eq!(
            flight_duration_minutes("2024-06-01", "10:00:00", "10:45:00"),
            Some(45)
        );
    }

    #[test]
    fn garbage_input_yields_none() {
        assert_eq!(flight_duration_minutes("yesterday", "10:00", "11:00"), None);
        assert_eq!(flight_duration_minutes("2024-06-01", "ten", "11:00"), None);
        assert_eq!(flight_duration_minutes("2024-06-01", "10:00", ""), None);
    }
}
