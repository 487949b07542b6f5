//! Geodesic helpers.

use geo::{Distance, Geodesic, Point};

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both components are finite and inside their ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Shortest distance to `other` on the WGS-84 ellipsoid, in kilometres.
    ///
    /// # Example
    ///
    /// ```
    /// use railforge_core::GeoPoint;
    ///
    /// let alkmaar = GeoPoint::new(52.637, 4.739);
    /// let hoorn = GeoPoint::new(52.644, 5.060);
    /// assert!((alkmaar.distance_km(&hoorn) - 21.74).abs() < 0.01);
    /// ```
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        Geodesic::distance(self.to_point(), other.to_point()) / 1000.0
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}
