use super::Vec3;

/// A position on the globe in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl GeoPoint {
    /// Builds a point, clamping latitude to [-90, 90] and wrapping longitude
    /// into [-180, 180].
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            lat_deg: lat_deg.clamp(-90.0, 90.0),
            lon_deg: wrap_longitude(lon_deg),
        }
    }

    pub fn project(self, radius: f64) -> Vec3 {
        project(self.lat_deg, self.lon_deg, radius)
    }
}

/// Spherical to Cartesian with longitude offset by 180 degrees, matching the
/// equirectangular earth texture: +Y is the north pole.
///
/// Inputs are not validated. Out-of-range angles still produce a point on
/// the sphere (the trig functions are periodic); a non-positive radius
/// mirrors or collapses it. Use [`GeoPoint::new`] to normalize first.
pub fn project(lat_deg: f64, lon_deg: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();

    Vec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

fn wrap_longitude(lon_deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon_deg) {
        return lon_deg;
    }
    (lon_deg + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::{GeoPoint, project};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn equator_prime_meridian() {
        let p = project(0.0, 0.0, 2.0);
        assert_close(p.x, 2.0, 1e-6);
        assert_close(p.y, 0.0, 1e-6);
        assert_close(p.z, 0.0, 1e-6);
    }

    #[test]
    fn equator_antimeridian_flips_x() {
        let p = project(0.0, -180.0, 2.0);
        assert_close(p.x, -2.0, 1e-6);
        assert_close(p.y, 0.0, 1e-6);
        assert_close(p.z, 0.0, 1e-6);

        let q = project(0.0, 180.0, 2.0);
        assert_close(q.x, p.x, 1e-6);
        assert_close(q.z, p.z, 1e-6);
    }

    #[test]
    fn equator_90e_points_along_negative_z() {
        let p = project(0.0, 90.0, 1.0);
        assert_close(p.x, 0.0, 1e-9);
        assert_close(p.y, 0.0, 1e-9);
        assert_close(p.z, -1.0, 1e-9);
    }

    #[test]
    fn poles_sit_on_y_axis() {
        let north = project(90.0, 42.0, 3.0);
        assert_close(north.x, 0.0, 1e-9);
        assert_close(north.y, 3.0, 1e-9);
        assert_close(north.z, 0.0, 1e-9);

        let south = project(-90.0, -120.0, 3.0);
        assert_close(south.y, -3.0, 1e-9);
    }

    #[test]
    fn projection_keeps_radius() {
        for (lat, lon) in [(23.5859, 58.4059), (-33.9, 151.2), (64.1, -21.9)] {
            assert_close(project(lat, lon, 2.18).length(), 2.18, 1e-9);
        }
    }

    #[test]
    fn projection_is_deterministic() {
        assert_eq!(project(15.2993, 74.124, 2.18), project(15.2993, 74.124, 2.18));
    }

    #[test]
    fn geo_point_normalizes_input() {
        let p = GeoPoint::new(95.0, 190.0);
        assert_eq!(p.lat_deg, 90.0);
        assert_close(p.lon_deg, -170.0, 1e-9);

        let q = GeoPoint::new(-12.0, -540.0);
        assert_close(q.lon_deg, -180.0, 1e-9);

        let r = GeoPoint::new(10.0, 180.0);
        assert_eq!(r.lon_deg, 180.0);
    }
}
