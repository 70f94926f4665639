//! Great-circle math for the distance field.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinate pairs (degrees), in whole
/// kilometers, via the haversine formula.
/// https://en.wikipedia.org/wiki/Haversine_formula
pub fn spherical_distance_km(
    origin_lat: f64,
    origin_lon: f64,
    destination_lat: f64,
    destination_lon: f64,
) -> i64 {
    let origin_lat = origin_lat.to_radians();
    let origin_lon = origin_lon.to_radians();
    let destination_lat = destination_lat.to_radians();
    let destination_lon = destination_lon.to_radians();

    let delta_lat = origin_lat - destination_lat;
    let delta_lon = origin_lon - destination_lon;

    let hav_delta_lat = (delta_lat / 2.0).sin().powi(2);
    let hav_delta_lon = (delta_lon / 2.0).sin().powi(2);

    let hav_theta = hav_delta_lat + hav_delta_lon * origin_lat.cos() * destination_lat.cos();

    let distance = 2.0 * EARTH_RADIUS_KM * hav_theta.sqrt().asin();
    distance.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = (52.3086, 4.7639); // AMS
        let b = (40.6413, -73.7781); // JFK
        assert_eq!(
            spherical_distance_km(a.0, a.1, b.0, b.1),
            spherical_distance_km(b.0, b.1, a.0, a.1)
        );
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(spherical_distance_km(48.3538, 11.7861, 48.3538, 11.7861), 0);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        assert_eq!(spherical_distance_km(0.0, 0.0, 0.0, 1.0), 111);
    }

    #[test]
    fn equator_to_pole_is_a_quarter_circle() {
        // pi/2 * 6371 = 10007.54..., rounded
        assert_eq!(spherical_distance_km(0.0, 0.0, 90.0, 0.0), 10008);
    }

    #[test]
    fn known_route_ams_jfk() {
        // published great-circle distance is ~5860 km
        let d = spherical_distance_km(52.3086, 4.7639, 40.6413, -73.7781);
        assert!((5840..=5880).contains(&d), "got {d}");
    }
}
