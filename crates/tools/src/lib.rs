//! Headless drivers for the `portfolio` tool.

use catalog::Portfolio;
use foundation::ids::ItemId;
use foundation::math::{ArcPath, GeoPoint, MAX_ARC_SAMPLES, Vec3};
use runtime::frame::{Frame, FrameClock};
use scene::World;
use scene::animation::{MotionCategory, MotionProfile, Pose};
use scene::components::Drawable3D;
use scene::section::{Section, SectionKind, UiEvent};
use serde::Serialize;

/// Parses `"LAT,LNG"` in degrees.
pub fn parse_geo(s: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got {s:?}"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("latitude {lat:?}: {e}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|e| format!("longitude {lng:?}: {e}"))?;
    Ok(GeoPoint::new(lat, lng))
}

/// Parses `--samples`, accepting `2..=MAX_ARC_SAMPLES`.
pub fn parse_sample_count(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|e| format!("sample count {s:?}: {e}"))?;
    if !(2..=MAX_ARC_SAMPLES).contains(&n) {
        return Err(format!("sample count {n} outside 2..={MAX_ARC_SAMPLES}"));
    }
    Ok(n)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec3Json {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vec3> for Vec3Json {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcJson {
    pub start: Vec3Json,
    pub control: Vec3Json,
    pub end: Vec3Json,
    pub samples: Vec<Vec3Json>,
}

impl From<&ArcPath> for ArcJson {
    fn from(arc: &ArcPath) -> Self {
        Self {
            start: arc.start().into(),
            control: arc.control().into(),
            end: arc.end().into(),
            samples: arc.samples.iter().copied().map(Vec3Json::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoseJson {
    pub t: f64,
    pub position: Vec3Json,
    pub rotation_y: f64,
    pub scale: f64,
}

impl PoseJson {
    fn new(t: f64, pose: Pose) -> Self {
        Self {
            t,
            position: pose.position.into(),
            rotation_y: pose.rotation_y,
            scale: pose.scale,
        }
    }
}

/// Poses of `profile` around `anchor` at a fixed frame rate for `seconds`
/// of scene time.
pub fn pose_track(profile: MotionProfile, anchor: Vec3, seconds: f64, fps: f64) -> Vec<PoseJson> {
    let fps = if fps.is_finite() && fps > 0.0 { fps } else { 60.0 };
    let dt = 1.0 / fps;
    let mut clock = FrameClock::new();
    let mut out = vec![PoseJson::new(0.0, profile.pose(0.0, anchor))];
    while clock.elapsed().seconds() + dt <= seconds + 1e-9 {
        let t = clock.tick(dt).time.seconds();
        out.push(PoseJson::new(t, profile.pose(t, anchor)));
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub event: Option<String>,
    pub selected: Option<String>,
    pub hovered: Option<String>,
    pub modal_open: bool,
    /// Scale of each certificate frame, in catalog order.
    pub scales: Vec<f64>,
}

/// Mounts the certificates section, replays hover, click and close on the
/// first certificate and reports the state after each frame.
pub fn simulate_certificates(portfolio: &Portfolio, fps: f64) -> Vec<FrameReport> {
    let mut world = World::new();
    let mut section = Section::mount(SectionKind::Certificates);

    let mut nodes = Vec::new();
    for cert in &portfolio.certificates {
        let [x, y, z] = cert.position;
        let node = section.spawn_animated(
            &mut world,
            Drawable3D::panel(2.0, 1.5),
            MotionCategory::CertificateFrame,
            Vec3::new(x, y, z),
            |b| b.for_item(cert.id.as_str()),
        );
        nodes.push(node);
    }

    let first = portfolio
        .certificates
        .first()
        .map(|c| ItemId::from(c.id.as_str()))
        .unwrap_or_else(|| ItemId::from("certA"));
    let script = [
        None,
        Some(UiEvent::HoverEnter(first.clone())),
        Some(UiEvent::Click(first)),
        None,
        Some(UiEvent::CloseModal),
        None,
    ];

    let dt = 1.0 / if fps > 0.0 { fps } else { 60.0 };
    let mut frame = Frame::new(0, dt);
    let mut reports = Vec::new();
    for event in script {
        let label = event.as_ref().map(|e| format!("{e:?}"));
        if let Some(event) = event {
            section.dispatch(event);
        }
        section.on_frame(&mut world, frame);

        let selection = section.selection();
        reports.push(FrameReport {
            frame: frame.index,
            event: label,
            selected: selection.selected().map(ToString::to_string),
            hovered: selection.hovered().map(ToString::to_string),
            modal_open: selection.is_modal_open(),
            scales: nodes
                .iter()
                .filter_map(|n| world.transform(*n))
                .map(|t| t.scale)
                .collect(),
        });
        frame = frame.next();
    }
    section.unmount(&mut world);
    reports
}
