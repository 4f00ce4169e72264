//! Route distance and ETA estimation.
//!
//! Great-circle distance via the Haversine formula; ETA assumes a flat
//! average road speed. Both are pure functions consumed by the carrier and
//! routing endpoints.

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed average carrier speed when estimating arrival.
pub const DEFAULT_AVG_SPEED_KMH: f64 = 40.0;

/// Great-circle distance between two coordinates, in kilometers.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Whole minutes to cover `distance_km` at `avg_speed_kmh`, truncated.
pub fn estimate_eta_minutes(distance_km: f64, avg_speed_kmh: f64) -> i64 {
    (distance_km / avg_speed_kmh * 60.0) as i64
}

/// ETA at the default average speed.
pub fn estimate_eta(distance_km: f64) -> i64 {
    estimate_eta_minutes(distance_km, DEFAULT_AVG_SPEED_KMH)
}

/// Round a distance to the 2-decimal form stored on carriers and routes.
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}
