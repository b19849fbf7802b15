//! Geographic coordinates and great-circle distance.

/// Mean Earth radius in kilometers, used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in degrees.
///
/// Immutable value type. Construction validates the coordinate ranges,
/// so a `GeoPoint` held anywhere in the crate is always a valid position —
/// downstream code never re-checks.
///
/// # Examples
///
/// ```
/// use itinera::geo::GeoPoint;
///
/// let p = GeoPoint::new(48.8584, 2.2945)?;
/// assert!((p.lat() - 48.8584).abs() < 1e-12);
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Creates a point, validating `-90 <= lat <= 90` and `-180 <= lng <= 180`.
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude must be in [-90, 90], got {lat}"));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(format!("longitude must be in [-180, 180], got {lng}"));
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Great-circle distance between two points in kilometers.
///
/// Haversine formula over a spherical Earth of radius 6371 km. Symmetric
/// and non-negative; identical points yield exactly 0.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(GeoPoint::new(90.1, 0.0).is_err());
        assert!(GeoPoint::new(-90.1, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 180.1).is_err());
        assert!(GeoPoint::new(0.0, -180.1).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_accepts_boundaries() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_identical_points_zero_distance() {
        let p = point(37.5665, 126.9780);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_known_distance_paris_london() {
        // Paris (48.8566, 2.3522) to London (51.5074, -0.1278): ~344 km
        let paris = point(48.8566, 2.3522);
        let london = point(51.5074, -0.1278);
        let d = haversine_km(paris, london);
        assert!((d - 343.5).abs() < 2.0, "got {d}");
    }

    #[test]
    fn test_one_degree_longitude_at_equator() {
        // One degree of longitude at the equator is ~111.19 km
        let a = point(0.0, 0.0);
        let b = point(0.0, 1.0);
        let d = haversine_km(a, b);
        assert!((d - 111.19).abs() < 0.1, "got {d}");
    }

    proptest! {
        #[test]
        fn prop_symmetric_and_non_negative(
            lat1 in -90.0f64..90.0, lng1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lng2 in -180.0f64..180.0,
        ) {
            let a = point(lat1, lng1);
            let b = point(lat2, lng2);
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        #[test]
        fn prop_self_distance_zero(lat in -90.0f64..90.0, lng in -180.0f64..180.0) {
            let p = point(lat, lng);
            prop_assert_eq!(haversine_km(p, p), 0.0);
        }
    }
}
