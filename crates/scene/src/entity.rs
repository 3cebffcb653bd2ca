/// Index of a node in the render graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(&self) -> u32 {
        self.0
    }
}
