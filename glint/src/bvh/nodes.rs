use std::ops;

use crate::gpu;

/// Flat storage for BVH nodes.
///
/// The root always lives at index zero, and children are always appended in
/// pairs - the right child directly follows the left one. Nodes never move, so
/// ids handed out by [`Self::add_pair()`] remain valid for the whole lifetime
/// of the list.
#[derive(Clone, Debug)]
pub struct BvhNodes {
    nodes: Vec<gpu::BvhNode>,
}

impl BvhNodes {
    pub fn new(root: gpu::BvhNode) -> Self {
        Self { nodes: vec![root] }
    }

    /// Appends a pair of siblings, returning the id of the left one.
    pub fn add_pair(
        &mut self,
        left: gpu::BvhNode,
        right: gpu::BvhNode,
    ) -> BvhNodeId {
        let id = BvhNodeId::new(self.nodes.len() as u32);

        self.nodes.push(left);
        self.nodes.push(right);

        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn as_slice(&self) -> &[gpu::BvhNode] {
        &self.nodes
    }

    pub fn into_vec(self) -> Vec<gpu::BvhNode> {
        self.nodes
    }
}

impl ops::Index<BvhNodeId> for BvhNodes {
    type Output = gpu::BvhNode;

    fn index(&self, index: BvhNodeId) -> &Self::Output {
        &self.nodes[index.get() as usize]
    }
}

impl ops::IndexMut<BvhNodeId> for BvhNodes {
    fn index_mut(&mut self, index: BvhNodeId) -> &mut Self::Output {
        &mut self.nodes[index.get() as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BvhNodeId(u32);

impl BvhNodeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn root() -> Self {
        Self::new(0)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Returns id of the sibling that directly follows this node.
    pub fn next(&self) -> Self {
        Self::new(self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn leaf(start: i32) -> gpu::BvhNode {
        gpu::BvhNode::leaf(Vec3::ZERO, Vec3::ONE, start, 1)
    }

    #[test]
    fn test() {
        let mut target = BvhNodes::new(leaf(0));

        assert_eq!(1, target.len());
        assert_eq!(leaf(0), target[BvhNodeId::root()]);

        let a = target.add_pair(leaf(1), leaf(2));
        let b = target.add_pair(leaf(3), leaf(4));

        assert_eq!(BvhNodeId::new(1), a);
        assert_eq!(BvhNodeId::new(3), b);
        assert_eq!(BvhNodeId::new(2), a.next());

        assert_eq!(leaf(1), target[a]);
        assert_eq!(leaf(2), target[a.next()]);
        assert_eq!(leaf(3), target[b]);
        assert_eq!(leaf(4), target[b.next()]);
        assert_eq!(5, target.len());
    }

    #[test]
    fn ids_survive_growth() {
        let mut target = BvhNodes::new(leaf(0));
        let first = target.add_pair(leaf(1), leaf(2));

        target[first].make_internal(123);

        for i in 0..1000 {
            target.add_pair(leaf(i), leaf(i));
        }

        assert_eq!(Some([123, 124]), target[first].children());
        assert_eq!(leaf(2), target[first.next()]);
        assert_eq!(leaf(0), target[BvhNodeId::root()]);
        assert_eq!(2003, target.len());
    }
}
