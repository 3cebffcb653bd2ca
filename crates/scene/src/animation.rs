//! Closed-form per-frame motion.
//!
//! Every animated node's pose is a pure function of elapsed time, its motion
//! category and its current [`AnimationMode`]. Switching modes never resets
//! the clock, so frequencies stay continuous across hover and click; only
//! amplitudes and scale may jump.

use foundation::ids::ItemId;
use foundation::math::Vec3;
use foundation::time::Time;
use tracing::trace;

use crate::components::Transform;
use crate::entity::NodeId;
use crate::selection::SelectionState;
use crate::world::World;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimationMode {
    Idle,
    Hovered,
    Selected,
}

impl AnimationMode {
    pub const ALL: [AnimationMode; 3] = [
        AnimationMode::Idle,
        AnimationMode::Hovered,
        AnimationMode::Selected,
    ];

    /// Selection wins over hover.
    pub fn from_flags(selected: bool, hovered: bool) -> Self {
        match (selected, hovered) {
            (true, _) => AnimationMode::Selected,
            (false, true) => AnimationMode::Hovered,
            (false, false) => AnimationMode::Idle,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationMode::Idle => "idle",
            AnimationMode::Hovered => "hovered",
            AnimationMode::Selected => "selected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == s)
    }
}

/// Kinds of animated object; each has its own row in the profile table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MotionCategory {
    SkillOrb,
    ProjectCard,
    CertificateFrame,
    /// The laptop and desk models that float beside a section.
    ShowcaseModel,
    ContactIcon,
}

impl MotionCategory {
    pub const ALL: [MotionCategory; 5] = [
        MotionCategory::SkillOrb,
        MotionCategory::ProjectCard,
        MotionCategory::CertificateFrame,
        MotionCategory::ShowcaseModel,
        MotionCategory::ContactIcon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MotionCategory::SkillOrb => "skill-orb",
            MotionCategory::ProjectCard => "project-card",
            MotionCategory::CertificateFrame => "certificate-frame",
            MotionCategory::ShowcaseModel => "showcase-model",
            MotionCategory::ContactIcon => "contact-icon",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == s)
    }
}

/// `amplitude * sin(frequency * t + phase)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Wave {
    pub amplitude: f64,
    /// Radians per second.
    pub frequency: f64,
    pub phase: f64,
}

impl Wave {
    pub const NONE: Wave = Wave::new(0.0, 0.0);

    pub const fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase: 0.0,
        }
    }

    pub fn at(&self, t: f64) -> f64 {
        self.amplitude * (self.frequency * t + self.phase).sin()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MotionProfile {
    /// Constant yaw rate (rad/s).
    pub spin_rate: f64,
    /// Yaw oscillation added on top of the spin.
    pub sway: Wave,
    /// Vertical offset from the anchor.
    pub bob: Wave,
    pub scale: f64,
    /// Scale oscillation around `scale`.
    pub pulse: Wave,
}

impl MotionProfile {
    const REST: MotionProfile = MotionProfile {
        spin_rate: 0.0,
        sway: Wave::NONE,
        bob: Wave::NONE,
        scale: 1.0,
        pulse: Wave::NONE,
    };

    pub fn pose(&self, t: f64, anchor: Vec3) -> Pose {
        Pose {
            position: anchor + Vec3::UNIT_Y * self.bob.at(t),
            rotation_y: self.spin_rate * t + self.sway.at(t),
            scale: self.scale + self.pulse.at(t),
        }
    }

    /// Replaces the sway and bob frequencies, keeping amplitudes.
    pub fn retimed(mut self, tempo: Tempo) -> Self {
        self.sway.frequency = tempo.sway_frequency;
        self.bob.frequency = tempo.bob_frequency;
        self
    }

    /// Upper bound of the scale over all `t`.
    pub fn peak_scale(&self) -> f64 {
        self.scale + self.pulse.amplitude.abs()
    }
}

/// Per-node frequency override so neighbouring icons do not move in lockstep.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tempo {
    pub sway_frequency: f64,
    pub bob_frequency: f64,
}

/// The motion table. Scale grows strictly from idle to hovered to selected in
/// every category.
pub fn profile(category: MotionCategory, mode: AnimationMode) -> MotionProfile {
    use AnimationMode::*;
    use MotionCategory::*;

    let rest = MotionProfile::REST;
    match (category, mode) {
        (SkillOrb, Idle) => MotionProfile {
            spin_rate: 0.6,
            ..rest
        },
        (SkillOrb, Hovered) => MotionProfile {
            spin_rate: 0.9,
            scale: 1.1,
            ..rest
        },
        (SkillOrb, Selected) => MotionProfile {
            spin_rate: 0.5,
            scale: 1.2,
            pulse: Wave::new(0.1, 2.0),
            ..rest
        },

        (ProjectCard | CertificateFrame, Idle) => MotionProfile {
            spin_rate: 0.3,
            ..rest
        },
        (ProjectCard | CertificateFrame, Hovered) => MotionProfile {
            spin_rate: 0.6,
            scale: 1.1,
            ..rest
        },
        (ProjectCard, Selected) => MotionProfile {
            sway: Wave::new(0.1, 0.5),
            bob: Wave::new(0.1, 2.0),
            scale: 1.2,
            ..rest
        },
        (CertificateFrame, Selected) => MotionProfile {
            sway: Wave::new(0.1, 0.5),
            bob: Wave::new(0.1, 2.0),
            scale: 1.3,
            ..rest
        },

        (ShowcaseModel, mode) => MotionProfile {
            sway: Wave::new(0.05, 0.3),
            bob: Wave::new(0.1, 0.5),
            scale: match mode {
                Idle => 1.0,
                Hovered => 1.05,
                Selected => 1.1,
            },
            ..rest
        },

        (ContactIcon, Idle) => MotionProfile {
            sway: Wave::new(0.1, 0.5),
            bob: Wave::new(0.2, 1.2),
            ..rest
        },
        (ContactIcon, Hovered) => MotionProfile {
            sway: Wave::new(0.1, 0.5),
            bob: Wave::new(0.2, 1.2),
            scale: 1.1,
            ..rest
        },
        (ContactIcon, Selected) => MotionProfile {
            sway: Wave::new(0.15, 0.5),
            bob: Wave::new(0.3, 1.2),
            scale: 1.2,
            ..rest
        },
    }
}

/// The floating icons beside the contact form. Each bobs at its own rate
/// around its own height.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContactIconKind {
    Phone,
    Email,
    Location,
}

impl ContactIconKind {
    pub const ALL: [ContactIconKind; 3] = [
        ContactIconKind::Phone,
        ContactIconKind::Email,
        ContactIconKind::Location,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContactIconKind::Phone => "phone",
            ContactIconKind::Email => "email",
            ContactIconKind::Location => "location",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == s)
    }

    pub fn anchor(self) -> Vec3 {
        match self {
            ContactIconKind::Phone => Vec3::new(-3.0, -1.0, 0.0),
            ContactIconKind::Email => Vec3::new(0.0, 1.0, 0.0),
            ContactIconKind::Location => Vec3::new(3.0, 0.0, 0.0),
        }
    }

    pub fn tempo(self) -> Tempo {
        let (sway_frequency, bob_frequency) = match self {
            ContactIconKind::Phone => (0.5, 1.2),
            ContactIconKind::Email => (0.7, 1.5),
            ContactIconKind::Location => (0.3, 1.8),
        };
        Tempo {
            sway_frequency,
            bob_frequency,
        }
    }
}

/// Background motion that ignores hover and selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Decoration {
    /// The hero star field: slow tumble about X and Y.
    ParticleField,
    /// The logo above the internship desk: rolls about Z and bobs.
    InternshipLogo,
}

impl Decoration {
    pub fn transform(self, t: f64, anchor: Vec3) -> Transform {
        match self {
            Decoration::ParticleField => Transform {
                position: anchor,
                rotation: Vec3::new(0.05 * t, 0.075 * t, 0.0),
                scale: 1.0,
            },
            Decoration::InternshipLogo => Transform {
                position: anchor + Vec3::UNIT_Y * Wave::new(0.2, 2.0).at(t),
                rotation: Vec3::new(0.0, 0.0, 0.5 * t),
                scale: 1.0,
            },
        }
    }
}

/// Position, yaw and uniform scale for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation_y: f64,
    pub scale: f64,
}

impl Pose {
    pub fn rest(position: Vec3) -> Self {
        Self {
            position,
            rotation_y: 0.0,
            scale: 1.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation_y.is_finite() && self.scale.is_finite()
    }
}

/// Pose of a `category` object resting at `anchor`, `t` seconds into the
/// scene.
pub fn pose(category: MotionCategory, mode: AnimationMode, t: Time, anchor: Vec3) -> Pose {
    profile(category, mode).pose(t.seconds(), anchor)
}

/// Ties a render-graph node to a motion category.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub node: NodeId,
    pub category: MotionCategory,
    /// The item whose selection drives this node. `None` follows the section
    /// as a whole: selected when anything is selected, hovered when anything
    /// is hovered.
    pub item: Option<ItemId>,
    pub anchor: Vec3,
    pub tempo: Option<Tempo>,
}

impl Binding {
    pub fn new(node: NodeId, category: MotionCategory, anchor: Vec3) -> Self {
        Self {
            node,
            category,
            item: None,
            anchor,
            tempo: None,
        }
    }

    pub fn for_item(mut self, item: impl Into<ItemId>) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn with_tempo(mut self, tempo: Tempo) -> Self {
        self.tempo = Some(tempo);
        self
    }

    pub fn mode(&self, selection: &SelectionState) -> AnimationMode {
        match &self.item {
            Some(id) => selection.mode_for(id),
            None => AnimationMode::from_flags(
                selection.selected().is_some(),
                selection.hovered().is_some(),
            ),
        }
    }

    pub fn pose(&self, t: Time, selection: &SelectionState) -> Pose {
        let mut profile = profile(self.category, self.mode(selection));
        if let Some(tempo) = self.tempo {
            profile = profile.retimed(tempo);
        }
        profile.pose(t.seconds(), self.anchor)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Decorated {
    node: NodeId,
    decoration: Decoration,
    anchor: Vec3,
}

/// Writes every bound node's pose once per frame.
#[derive(Debug, Default)]
pub struct Animator {
    bindings: Vec<Binding>,
    decorations: Vec<Decorated>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    pub fn decorate(&mut self, node: NodeId, decoration: Decoration, anchor: Vec3) {
        self.decorations.push(Decorated {
            node,
            decoration,
            anchor,
        });
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn update(&self, world: &mut World, t: Time, selection: &SelectionState) {
        for binding in &self.bindings {
            let pose = binding.pose(t, selection);
            trace!(node = binding.node.index(), ?pose, "pose");
            world.apply_pose(binding.node, pose);
        }
        for d in &self.decorations {
            world.set_transform(d.node, d.decoration.transform(t.seconds(), d.anchor));
        }
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
        self.decorations.clear();
    }
}
