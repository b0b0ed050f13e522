use core::ops::Range;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Node of the flattened BVH.
///
/// The meaning of `index` depends on the node's kind:
///
/// - for leaves (`triangle_count >= 0`) it's the first triangle of the
///   contiguous range owned by this node,
///
/// - for internal nodes (`triangle_count == BvhNode::INTERNAL`) it's the id of
///   the left child; the right child always lives at `index + 1`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct BvhNode {
    pub min: Vec3,
    pub max: Vec3,
    pub index: i32,
    pub triangle_count: i32,
}

impl BvhNode {
    /// Value of `triangle_count` marking an internal node.
    pub const INTERNAL: i32 = -1;

    pub fn leaf(min: Vec3, max: Vec3, start: i32, count: i32) -> Self {
        Self {
            min,
            max,
            index: start,
            triangle_count: count,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.triangle_count >= 0
    }

    pub fn is_internal(&self) -> bool {
        self.triangle_count == Self::INTERNAL
    }

    /// Turns this node into an internal one, pointing at a pair of children
    /// starting at `left_id`.
    pub fn make_internal(&mut self, left_id: u32) {
        self.index = left_id as i32;
        self.triangle_count = Self::INTERNAL;
    }

    /// Returns ids of the left and right child, if this is an internal node.
    pub fn children(&self) -> Option<[u32; 2]> {
        if self.is_internal() {
            let left = self.index as u32;

            Some([left, left + 1])
        } else {
            None
        }
    }

    /// Returns the range of triangles owned by this node, if it's a leaf.
    pub fn triangles(&self) -> Option<Range<usize>> {
        if self.is_leaf() {
            let start = self.index as usize;

            Some(start..(start + self.triangle_count as usize))
        } else {
            None
        }
    }
}
