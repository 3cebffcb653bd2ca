use crate::animation::Pose;
use crate::components::{Drawable3D, PolylineId, Transform};
use crate::entity::NodeId;
use foundation::math::Vec3;

/// The render graph a section writes into: one transform, an optional
/// drawable and a visibility bit per node.
#[derive(Debug, Default)]
pub struct World {
    transforms: Vec<Transform>,
    drawables: Vec<Option<Drawable3D>>,
    visible: Vec<bool>,
    polylines: Vec<Vec<Vec3>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> NodeId {
        let id = NodeId(self.transforms.len() as u32);
        self.transforms.push(Transform::identity());
        self.drawables.push(None);
        self.visible.push(true);
        id
    }

    pub fn node_count(&self) -> usize {
        self.transforms.len()
    }

    pub fn set_transform(&mut self, node: NodeId, transform: Transform) {
        if let Some(slot) = self.transforms.get_mut(node.index() as usize) {
            *slot = transform;
        }
    }

    pub fn transform(&self, node: NodeId) -> Option<Transform> {
        self.transforms.get(node.index() as usize).copied()
    }

    /// Writes an animated pose onto `node`. Unknown nodes are ignored.
    pub fn apply_pose(&mut self, node: NodeId, pose: Pose) {
        if let Some(slot) = self.transforms.get_mut(node.index() as usize) {
            *slot = slot.with_pose(pose);
        }
    }

    pub fn set_drawable(&mut self, node: NodeId, drawable: Drawable3D) {
        if let Some(slot) = self.drawables.get_mut(node.index() as usize) {
            *slot = Some(drawable);
        }
    }

    pub fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(slot) = self.visible.get_mut(node.index() as usize) {
            *slot = visible;
        }
    }

    pub fn is_visible(&self, node: NodeId) -> bool {
        self.visible
            .get(node.index() as usize)
            .copied()
            .unwrap_or(false)
    }

    pub fn add_polyline(&mut self, points: Vec<Vec3>) -> PolylineId {
        let id = PolylineId(self.polylines.len() as u32);
        self.polylines.push(points);
        id
    }

    pub fn polyline(&self, id: PolylineId) -> Option<&[Vec3]> {
        self.polylines.get(id.0 as usize).map(Vec::as_slice)
    }

    /// Visible drawables in node order.
    pub fn drawables(&self) -> Vec<(NodeId, Transform, Drawable3D)> {
        let mut out = Vec::new();
        for (idx, drawable) in self.drawables.iter().enumerate() {
            let Some(drawable) = drawable else { continue };
            if !self.visible[idx] {
                continue;
            }
            out.push((NodeId(idx as u32), self.transforms[idx], *drawable));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::animation::Pose;
    use crate::components::{Drawable3D, Shape3D};
    use crate::entity::NodeId;
    use foundation::math::Vec3;

    #[test]
    fn spawn_and_collect_drawables() {
        let mut world = World::new();
        let node = world.spawn();
        world.set_drawable(node, Drawable3D::cube(1.0));

        let drawables = world.drawables();
        assert_eq!(drawables.len(), 1);
        assert_eq!(drawables[0].0, node);
    }

    #[test]
    fn hidden_nodes_are_filtered() {
        let mut world = World::new();
        let node = world.spawn();
        world.set_drawable(node, Drawable3D::cube(1.0));
        world.set_visible(node, false);

        assert!(world.drawables().is_empty());
        assert!(!world.is_visible(node));
    }

    #[test]
    fn apply_pose_updates_transform() {
        let mut world = World::new();
        let node = world.spawn();
        world.apply_pose(
            node,
            Pose {
                position: Vec3::new(0.0, 0.5, 0.0),
                rotation_y: 1.0,
                scale: 1.1,
            },
        );
        let t = world.transform(node).unwrap();
        assert_eq!(t.position.y, 0.5);
        assert_eq!(t.rotation.y, 1.0);
        assert_eq!(t.scale, 1.1);
    }

    #[test]
    fn unknown_nodes_are_ignored() {
        let mut world = World::new();
        world.apply_pose(NodeId(7), Pose::rest(Vec3::ZERO));
        world.set_visible(NodeId(7), true);
        assert_eq!(world.transform(NodeId(7)), None);
        assert!(!world.is_visible(NodeId(7)));
    }

    #[test]
    fn polylines_are_stored_by_id() {
        let mut world = World::new();
        let id = world.add_polyline(vec![Vec3::ZERO, Vec3::UNIT_Y]);
        let node = world.spawn();
        world.set_drawable(node, Drawable3D::polyline(id));
        assert_eq!(world.polyline(id).map(|p| p.len()), Some(2));
        assert!(matches!(
            world.drawables()[0].2.shape,
            Shape3D::Polyline { .. }
        ));
    }
}
