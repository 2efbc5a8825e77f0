use shared_types::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const KM_PER_MILE: f64 = 1.609;

fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

/// Great-circle distance in miles, rounded to two decimals (half away from zero).
///
/// Returns `0.0` when any coordinate is missing. Callers display that as
/// "unknown distance"; it is not an error.
pub fn distance_miles(
    lat1: Option<f64>,
    lon1: Option<f64>,
    lat2: Option<f64>,
    lon2: Option<f64>,
) -> f64 {
    let (Some(lat1), Some(lon1), Some(lat2), Some(lon2)) = (lat1, lon1, lat2, lon2) else {
        return 0.0;
    };

    let d_lat = deg_to_rad(lat2 - lat1);
    let d_lon = deg_to_rad(lon2 - lon1);

    let a = (d_lat / 2.0).sin().powi(2)
        + deg_to_rad(lat1).cos() * deg_to_rad(lat2).cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    let miles = EARTH_RADIUS_KM * c / KM_PER_MILE;
    (miles * 100.0).round() / 100.0
}

pub fn distance_between(from: &GeoPoint, to: &GeoPoint) -> f64 {
    distance_miles(from.latitude, from.longitude, to.latitude, to.longitude)
}
