use crate::{BvhNode, Triangle};

/// Read-only view over a flattened BVH, i.e. the node buffer together with
/// the triangle buffer its leaves point into.
#[derive(Clone, Copy, Debug)]
pub struct BvhView<'a> {
    nodes: &'a [BvhNode],
    triangles: &'a [Triangle],
}

impl<'a> BvhView<'a> {
    pub fn new(nodes: &'a [BvhNode], triangles: &'a [Triangle]) -> Self {
        Self { nodes, triangles }
    }

    pub fn root(&self) -> Option<BvhNode> {
        self.nodes.first().copied()
    }

    pub fn get(&self, id: u32) -> Option<BvhNode> {
        self.nodes.get(id as usize).copied()
    }

    pub fn children(&self, node: BvhNode) -> Option<[BvhNode; 2]> {
        let [left, right] = node.children()?;

        Some([self.get(left)?, self.get(right)?])
    }

    /// Returns triangles owned by given node; internal nodes own none.
    pub fn triangles(&self, node: BvhNode) -> &'a [Triangle] {
        node.triangles()
            .and_then(|range| self.triangles.get(range))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
