use shared_types::{GeoPoint, ResourceRecord};

/// Initial map region when nothing better is known (Nashville).
pub const DEFAULT_CENTER: (f64, f64) = (36.125, -86.78316);

/// Where to drop a record's marker. Each missing coordinate falls back to
/// the matching component of [`DEFAULT_CENTER`].
pub fn marker_position(record: &ResourceRecord) -> (f64, f64) {
    (
        record.latitude.unwrap_or(DEFAULT_CENTER.0),
        record.longitude.unwrap_or(DEFAULT_CENTER.1),
    )
}

/// Mean position of every record with a known location, averaged on the
/// unit sphere so longitudes near the antimeridian behave.
pub fn geographic_center(records: &[ResourceRecord]) -> Option<GeoPoint> {
    let coords: Vec<(f64, f64)> = records
        .iter()
        .filter_map(|record| record.location().coordinates())
        .collect();

    if coords.is_empty() {
        return None;
    }

    let (mut x_total, mut y_total, mut z_total) = (0.0, 0.0, 0.0);
    coords.iter().for_each(|(lat, long)| {
        let lat_rad = lat.to_radians();
        let long_rad = long.to_radians();

        x_total += lat_rad.cos() * long_rad.cos();
        y_total += lat_rad.cos() * long_rad.sin();
        z_total += lat_rad.sin();
    });

    let count = coords.len() as f64;
    let x_avg = x_total / count;
    let y_avg = y_total / count;
    let z_avg = z_total / count;

    let long = y_avg.atan2(x_avg).to_degrees();
    let hyp = (x_avg.powi(2) + y_avg.powi(2)).sqrt();
    let lat = z_avg.atan2(hyp).to_degrees();

    Some(GeoPoint::new(lat, long))
}

/// Center for the map view: the records' geographic center, or the default.
pub fn initial_center(records: &[ResourceRecord]) -> (f64, f64) {
    geographic_center(records)
        .and_then(|center| center.coordinates())
        .unwrap_or(DEFAULT_CENTER)
}
