use super::Vec3;

/// Number of samples used for flight path polylines.
pub const DEFAULT_ARC_SAMPLES: usize = 100;

/// Upper bound on polyline samples; larger requests are clamped.
pub const MAX_ARC_SAMPLES: usize = 100_000;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadraticBezier {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl QuadraticBezier {
    pub fn new(start: Vec3, control: Vec3, end: Vec3) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Evaluates the curve at `t`, clamped to [0, 1].
    pub fn point_at(&self, t: f64) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }

    /// First derivative at `t` (clamped to [0, 1]).
    pub fn tangent_at(&self, t: f64) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        (self.control - self.start) * (2.0 * (1.0 - t)) + (self.end - self.control) * (2.0 * t)
    }
}

/// How the control point of an arc is lifted off the sphere.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ArcLift {
    /// Chord midpoint pushed out radially to distance `elevation` from the
    /// origin.
    Radial { elevation: f64 },
    /// Chord midpoint offset along +Y by `height`.
    Lifted { height: f64 },
    /// An absolute control point.
    Fixed(Vec3),
}

impl ArcLift {
    pub fn control_point(self, start: Vec3, end: Vec3) -> Vec3 {
        let mid = start.midpoint(end);
        match self {
            ArcLift::Radial { elevation } => {
                // Antipodal endpoints leave no usable midpoint direction.
                mid.try_normalize().unwrap_or(Vec3::UNIT_Y) * elevation
            }
            ArcLift::Lifted { height } => mid + Vec3::UNIT_Y * height,
            ArcLift::Fixed(control) => control,
        }
    }
}

/// A flight path between two points on the globe plus its fixed-count
/// polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPath {
    pub curve: QuadraticBezier,
    pub samples: Vec<Vec3>,
}

impl ArcPath {
    pub fn start(&self) -> Vec3 {
        self.curve.start
    }

    pub fn control(&self) -> Vec3 {
        self.curve.control
    }

    pub fn end(&self) -> Vec3 {
        self.curve.end
    }

    /// Closed-form position at `t`, not restricted to the sample grid.
    pub fn sample_at(&self, t: f64) -> Vec3 {
        self.curve.point_at(t)
    }

    /// Position for a looping marker: `progress` wraps into [0, 1).
    pub fn sample_looped(&self, progress: f64) -> Vec3 {
        self.curve.point_at(progress.rem_euclid(1.0))
    }
}

/// Builds an arc from `start` to `end`.
///
/// Samples are evenly spaced in `t` and include both endpoints, so
/// `samples[0] == start` and `samples[last] == end`. `sample_count` is
/// clamped to `2..=MAX_ARC_SAMPLES`.
pub fn build_arc(start: Vec3, end: Vec3, lift: ArcLift, sample_count: usize) -> ArcPath {
    let curve = QuadraticBezier::new(start, lift.control_point(start, end), end);
    let n = sample_count.clamp(2, MAX_ARC_SAMPLES);
    let last = (n - 1) as f64;

    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        samples.push(curve.point_at(i as f64 / last));
    }
    // Pin the endpoints so they are bit-identical to the inputs.
    samples[0] = start;
    samples[n - 1] = end;

    ArcPath { curve, samples }
}

#[cfg(test)]
mod tests {
    use super::{ArcLift, MAX_ARC_SAMPLES, QuadraticBezier, build_arc};
    use crate::math::{Vec3, project};

    fn assert_vec_close(a: Vec3, b: Vec3, eps: f64) {
        let diff = a.distance(b);
        assert!(diff <= eps, "expected {a:?} ~= {b:?} (diff {diff})");
    }

    #[test]
    fn bezier_hits_endpoints_and_midpoint() {
        let c = QuadraticBezier::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        );
        assert_eq!(c.point_at(0.0), c.start);
        assert_eq!(c.point_at(1.0), c.end);
        assert_vec_close(c.point_at(0.5), Vec3::new(1.0, 1.0, 0.0), 1e-12);
        assert_eq!(c.point_at(-3.0), c.start);
        assert_vec_close(c.tangent_at(0.5), Vec3::new(2.0, 0.0, 0.0), 1e-12);
    }

    #[test]
    fn arc_endpoints_match_projected_inputs() {
        let pairs = [
            ((23.5859, 58.4059), (15.2993, 74.124)),
            ((90.0, 0.0), (-90.0, 0.0)),
            ((0.0, 179.9), (0.0, -179.9)),
            ((0.0, -180.0), (45.0, 180.0)),
            ((-33.9, 151.2), (51.5, -0.12)),
        ];
        for ((lat0, lon0), (lat1, lon1)) in pairs {
            let p0 = project(lat0, lon0, 2.05);
            let p1 = project(lat1, lon1, 2.05);
            for lift in [
                ArcLift::Radial { elevation: 3.0 },
                ArcLift::Lifted { height: 1.0 },
                ArcLift::Fixed(Vec3::new(0.0, 3.0, 0.0)),
            ] {
                let arc = build_arc(p0, p1, lift, 64);
                assert_eq!(arc.samples.len(), 64);
                assert_vec_close(arc.samples[0], p0, 1e-9);
                assert_vec_close(arc.samples[63], p1, 1e-9);
                assert!(arc.samples.iter().all(|s| s.is_finite()));
            }
        }
    }

    #[test]
    fn radial_control_sits_at_elevation() {
        let p0 = project(23.5859, 58.4059, 2.0);
        let p1 = project(15.2993, 74.124, 2.0);
        let arc = build_arc(p0, p1, ArcLift::Radial { elevation: 3.0 }, 10);
        assert!((arc.control().length() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn antipodal_radial_arc_falls_back_to_up() {
        let p0 = Vec3::new(2.0, 0.0, 0.0);
        let p1 = Vec3::new(-2.0, 0.0, 0.0);
        let arc = build_arc(p0, p1, ArcLift::Radial { elevation: 3.0 }, 3);
        assert_vec_close(arc.control(), Vec3::new(0.0, 3.0, 0.0), 1e-12);
        assert_vec_close(arc.samples[1], Vec3::new(0.0, 1.5, 0.0), 1e-12);
    }

    #[test]
    fn sample_count_is_raised_to_two() {
        let arc = build_arc(Vec3::ZERO, Vec3::UNIT_Y, ArcLift::Lifted { height: 1.0 }, 0);
        assert_eq!(arc.samples, vec![Vec3::ZERO, Vec3::UNIT_Y]);
    }

    #[test]
    fn samples_advance_monotonically_along_t() {
        let p0 = project(23.5859, 58.4059, 2.05);
        let p1 = project(15.2993, 74.124, 2.05);
        let arc = build_arc(p0, p1, ArcLift::Radial { elevation: 3.0 }, 100);
        // Progress along the chord grows with t for this construction.
        let chord = (p1 - p0).try_normalize().unwrap();
        let mut prev = -1.0;
        for s in &arc.samples {
            let along = (*s - p0).dot(chord);
            assert!(along > prev, "sample moved backwards");
            prev = along;
        }
    }

    #[test]
    fn oversized_sample_count_is_clamped() {
        let lift = ArcLift::Lifted { height: 1.0 };
        let arc = build_arc(Vec3::ZERO, Vec3::UNIT_Y, lift, usize::MAX);
        assert_eq!(arc.samples.len(), MAX_ARC_SAMPLES);
        assert_eq!(arc.samples[0], Vec3::ZERO);
        assert_eq!(arc.samples[MAX_ARC_SAMPLES - 1], Vec3::UNIT_Y);
    }

    #[test]
    fn looped_sampling_wraps_progress() {
        let lift = ArcLift::Lifted { height: 2.0 };
        let arc = build_arc(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), lift, 5);
        assert_vec_close(arc.sample_looped(1.25), arc.sample_at(0.25), 1e-12);
        assert_vec_close(arc.sample_looped(-0.25), arc.sample_at(0.75), 1e-12);
    }
}
