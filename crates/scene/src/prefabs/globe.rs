use foundation::math::{ArcLift, ArcPath, DEFAULT_ARC_SAMPLES, GeoPoint, Vec3, build_arc};
use foundation::time::Time;

use crate::World;
use crate::components::{Drawable3D, Transform};
use crate::entity::NodeId;

/// Where the student studied before and after the move.
pub const MUSCAT: GeoPoint = GeoPoint {
    lat_deg: 23.5859,
    lon_deg: 58.4059,
};
pub const GOA: GeoPoint = GeoPoint {
    lat_deg: 15.2993,
    lon_deg: 74.124,
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobeConfig {
    pub earth_radius: f64,
    pub cloud_radius: f64,
    /// Yaw rates in rad/s.
    pub earth_spin: f64,
    pub cloud_spin: f64,
    pub from: GeoPoint,
    pub to: GeoPoint,
    /// Radius the drawn path starts and ends on.
    pub path_radius: f64,
    pub path_lift: ArcLift,
    pub path_samples: usize,
    /// The marker flies a slightly higher arc than the drawn path.
    pub marker_radius: f64,
    pub marker_lift: ArcLift,
    /// Trips per second.
    pub marker_speed: f64,
    pub marker_size: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            earth_radius: 2.0,
            cloud_radius: 2.02,
            earth_spin: 0.12,
            cloud_spin: 0.09,
            from: MUSCAT,
            to: GOA,
            path_radius: 2.05,
            path_lift: ArcLift::Fixed(Vec3::new(0.0, 3.0, 0.0)),
            path_samples: DEFAULT_ARC_SAMPLES,
            marker_radius: 2.15,
            marker_lift: ArcLift::Fixed(Vec3::new(0.0, 3.5, 0.0)),
            marker_speed: 0.18,
            marker_size: 0.05,
        }
    }
}

/// Marker placement for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerPose {
    pub position: Vec3,
    /// Unit direction of travel.
    pub heading: Vec3,
}

impl MarkerPose {
    /// Euler rotation (pitch, yaw, 0) that turns +Z onto the heading.
    pub fn rotation(&self) -> Vec3 {
        let h = self.heading;
        let yaw = h.x.atan2(h.z);
        let pitch = (-h.y).clamp(-1.0, 1.0).asin();
        Vec3::new(pitch, yaw, 0.0)
    }
}

/// The education globe: spinning earth, cloud shell, a flight path and a
/// marker flying it on a loop.
#[derive(Debug, Clone)]
pub struct Globe {
    pub earth: NodeId,
    pub clouds: NodeId,
    pub path: NodeId,
    pub marker: NodeId,
    path_arc: ArcPath,
    marker_arc: ArcPath,
    config: GlobeConfig,
}

pub fn spawn_globe(world: &mut World, config: GlobeConfig) -> Globe {
    let earth = world.spawn();
    world.set_drawable(earth, Drawable3D::sphere(config.earth_radius));

    let clouds = world.spawn();
    world.set_drawable(clouds, Drawable3D::sphere(config.cloud_radius));

    let path_arc = build_arc(
        config.from.project(config.path_radius),
        config.to.project(config.path_radius),
        config.path_lift,
        config.path_samples,
    );
    let polyline = world.add_polyline(path_arc.samples.clone());
    let path = world.spawn();
    world.set_drawable(
        path,
        Drawable3D::polyline(polyline).with_color(Vec3::new(0.96, 0.62, 0.04)),
    );

    let marker_arc = build_arc(
        config.from.project(config.marker_radius),
        config.to.project(config.marker_radius),
        config.marker_lift,
        config.path_samples,
    );
    let marker = world.spawn();
    // Primitive stand-in until the airplane mesh is available.
    world.set_drawable(marker, Drawable3D::cube(config.marker_size));
    world.set_transform(marker, Transform::translate(marker_arc.start()));

    Globe {
        earth,
        clouds,
        path,
        marker,
        path_arc,
        marker_arc,
        config,
    }
}

impl Globe {
    pub fn path_arc(&self) -> &ArcPath {
        &self.path_arc
    }

    pub fn marker_arc(&self) -> &ArcPath {
        &self.marker_arc
    }

    /// Fraction of the current trip completed at `t`, in [0, 1).
    pub fn marker_progress(&self, t: Time) -> f64 {
        (t.seconds() * self.config.marker_speed).rem_euclid(1.0)
    }

    pub fn marker_pose(&self, t: Time) -> MarkerPose {
        let progress = self.marker_progress(t);
        let heading = self
            .marker_arc
            .curve
            .tangent_at(progress)
            .try_normalize()
            .unwrap_or(Vec3::new(0.0, 0.0, 1.0));
        MarkerPose {
            position: self.marker_arc.sample_at(progress),
            heading,
        }
    }

    pub fn update(&self, world: &mut World, t: Time) {
        let s = t.seconds();
        world.set_transform(
            self.earth,
            Transform {
                rotation: Vec3::new(0.0, self.config.earth_spin * s, 0.0),
                ..Transform::identity()
            },
        );
        world.set_transform(
            self.clouds,
            Transform {
                rotation: Vec3::new(0.0, self.config.cloud_spin * s, 0.0),
                ..Transform::identity()
            },
        );

        let marker = self.marker_pose(t);
        world.set_transform(
            self.marker,
            Transform {
                position: marker.position,
                rotation: marker.rotation(),
                scale: 1.0,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{GOA, GlobeConfig, MUSCAT, spawn_globe};
    use crate::World;
    use crate::components::Shape3D;
    use foundation::math::{ArcLift, Vec3, build_arc, project};
    use foundation::time::Time;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn muscat_to_goa_flight() {
        let muscat = project(MUSCAT.lat_deg, MUSCAT.lon_deg, 2.18);
        let goa = project(GOA.lat_deg, GOA.lon_deg, 2.18);
        assert_ne!(muscat, goa);
        assert_close(muscat.length(), 2.18, 1e-3);
        assert_close(goa.length(), 2.18, 1e-3);

        let arc = build_arc(muscat, goa, ArcLift::Radial { elevation: 3.0 }, 100);
        assert_eq!(arc.samples.len(), 100);
        assert_eq!(arc.samples[0], muscat);
        assert_eq!(arc.samples[99], goa);
    }

    #[test]
    fn spawns_globe_nodes() {
        let mut world = World::new();
        let globe = spawn_globe(&mut world, GlobeConfig::default());

        let drawables = world.drawables();
        assert_eq!(drawables.len(), 4);
        assert!(matches!(drawables[0].2.shape, Shape3D::Sphere { .. }));

        let Shape3D::Polyline { id } = drawables[2].2.shape else {
            panic!("path should be a polyline");
        };
        assert_eq!(world.polyline(id).map(|p| p.len()), Some(100));
        assert_eq!(globe.path_arc().samples.len(), 100);
    }

    #[test]
    fn marker_loops_along_its_arc() {
        let mut world = World::new();
        let globe = spawn_globe(&mut world, GlobeConfig::default());

        assert_eq!(globe.marker_progress(Time(0.0)), 0.0);
        let trip = 1.0 / GlobeConfig::default().marker_speed;
        assert_close(globe.marker_progress(Time(trip * 0.5)), 0.5, 1e-9);
        assert_close(globe.marker_progress(Time(trip * 2.25)), 0.25, 1e-9);

        let start = globe.marker_pose(Time(0.0));
        assert_eq!(start.position, globe.marker_arc().start());
        assert_close(start.heading.length(), 1.0, 1e-9);
    }

    #[test]
    fn update_spins_earth_and_moves_marker() {
        let mut world = World::new();
        let globe = spawn_globe(&mut world, GlobeConfig::default());
        globe.update(&mut world, Time(10.0));

        assert_close(world.transform(globe.earth).unwrap().rotation.y, 1.2, 1e-9);
        assert_close(world.transform(globe.clouds).unwrap().rotation.y, 0.9, 1e-9);

        let marker = world.transform(globe.marker).unwrap();
        assert_eq!(marker.position, globe.marker_pose(Time(10.0)).position);
        assert!(marker.rotation.is_finite());
    }

    #[test]
    fn marker_rotation_faces_heading() {
        let pose = super::MarkerPose {
            position: Vec3::ZERO,
            heading: Vec3::new(1.0, 0.0, 0.0),
        };
        let r = pose.rotation();
        assert_close(r.y, std::f64::consts::FRAC_PI_2, 1e-12);
        assert_close(r.x, 0.0, 1e-12);
    }
}
