use foundation::ids::ItemId;
use foundation::math::Vec3;
use runtime::event_bus::EventBus;
use runtime::frame::Frame;
use tracing::{debug, info};

use crate::animation::{Animator, Binding, Decoration, MotionCategory};
use crate::components::{Drawable3D, Transform};
use crate::entity::NodeId;
use crate::selection::{CloseBehavior, SelectionState};
use crate::world::World;

/// The page sections, in scroll order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Hero,
    Education,
    Skills,
    Projects,
    Internship,
    Certificates,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Hero,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Internship,
        SectionKind::Certificates,
        SectionKind::Contact,
    ];

    /// Element id used as the scroll target.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Internship => "internship",
            SectionKind::Certificates => "certificates",
            SectionKind::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Hero => "Home",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Internship => "Experience",
            SectionKind::Certificates => "Certificates",
            SectionKind::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.anchor() == anchor)
    }

    /// Detail modals over a list of items deselect on close; panels that
    /// keep an item highlighted (skill categories, the education timeline)
    /// keep it.
    pub fn close_behavior(self) -> CloseBehavior {
        match self {
            SectionKind::Projects | SectionKind::Certificates | SectionKind::Contact => {
                CloseBehavior::ClearSelection
            }
            SectionKind::Hero
            | SectionKind::Education
            | SectionKind::Skills
            | SectionKind::Internship => CloseBehavior::KeepSelection,
        }
    }

    /// Whether clicking an item also opens its detail modal.
    pub fn click_opens_modal(self) -> bool {
        matches!(self, SectionKind::Projects | SectionKind::Certificates)
    }
}

/// Discrete user input delivered to a section between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click(ItemId),
    HoverEnter(ItemId),
    /// Clears hover only if `id` is still the hovered item, so a late leave
    /// from the previous card cannot cancel the enter of the next.
    HoverLeave(ItemId),
    OpenModal,
    CloseModal,
}

/// A mounted page section: owns its selection state, its queued input and
/// the render-graph nodes it animates.
#[derive(Debug)]
pub struct Section {
    kind: SectionKind,
    selection: SelectionState,
    events: EventBus<UiEvent>,
    animator: Animator,
    nodes: Vec<NodeId>,
    mounted: bool,
    next_frame: u64,
}

impl Section {
    pub fn mount(kind: SectionKind) -> Self {
        info!(section = kind.anchor(), "mount");
        Self {
            kind,
            selection: SelectionState::new(),
            events: EventBus::new(),
            animator: Animator::new(),
            nodes: Vec::new(),
            mounted: true,
            next_frame: 0,
        }
    }

    /// Mounts with `id` preselected.
    pub fn mount_with_selection(kind: SectionKind, id: impl Into<ItemId>) -> Self {
        let mut section = Self::mount(kind);
        section.selection = SelectionState::with_selected(id);
        section
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Spawns a node showing `drawable` at the binding's anchor and animates
    /// it from the next frame on.
    pub fn spawn_animated(
        &mut self,
        world: &mut World,
        drawable: Drawable3D,
        category: MotionCategory,
        anchor: Vec3,
        configure: impl FnOnce(Binding) -> Binding,
    ) -> NodeId {
        let node = world.spawn();
        world.set_transform(node, Transform::translate(anchor));
        world.set_drawable(node, drawable);
        self.animator.bind(configure(Binding::new(node, category, anchor)));
        self.nodes.push(node);
        node
    }

    /// Spawns a node whose motion depends only on the clock.
    pub fn spawn_decoration(
        &mut self,
        world: &mut World,
        drawable: Drawable3D,
        decoration: Decoration,
        anchor: Vec3,
    ) -> NodeId {
        let node = world.spawn();
        world.set_transform(node, Transform::translate(anchor));
        world.set_drawable(node, drawable);
        self.animator.decorate(node, decoration, anchor);
        self.nodes.push(node);
        node
    }

    /// Queues `event` for the next frame. Returns `false` once unmounted.
    pub fn dispatch(&mut self, event: UiEvent) -> bool {
        if !self.mounted {
            debug!(section = self.kind.anchor(), ?event, "event after unmount dropped");
            return false;
        }
        self.events.emit(self.next_frame, event);
        true
    }

    /// Applies queued input, then writes this frame's poses.
    pub fn on_frame(&mut self, world: &mut World, frame: Frame) {
        if !self.mounted {
            return;
        }
        for stamped in self.events.drain() {
            self.apply(stamped.event);
        }
        self.animator.update(world, frame.time, &self.selection);
        self.next_frame = frame.index + 1;
    }

    /// Stops animation, hides the section's nodes and discards its state.
    pub fn unmount(&mut self, world: &mut World) {
        if !self.mounted {
            return;
        }
        info!(section = self.kind.anchor(), "unmount");
        for node in &self.nodes {
            world.set_visible(*node, false);
        }
        self.events.clear();
        self.animator.clear();
        self.selection = SelectionState::new();
        self.mounted = false;
    }

    fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Click(id) => {
                self.selection.select(id);
                if self.kind.click_opens_modal() {
                    self.selection.open_modal();
                }
            }
            UiEvent::HoverEnter(id) => {
                self.selection.hover(Some(id));
            }
            UiEvent::HoverLeave(id) => {
                if self.selection.is_hovered(&id) {
                    self.selection.hover(None);
                }
            }
            UiEvent::OpenModal => {
                self.selection.open_modal();
            }
            UiEvent::CloseModal => {
                self.selection.close_modal(self.kind.close_behavior());
            }
        }
    }
}
