use std::ops::Range;

use super::{BvhNodeId, BvhNodes};
use crate::utils::TriangleExt;
use crate::{gpu, Axis, BoundingBox, BvhConfig};

/// Builds BVH by recursively splitting nodes at the spatial midpoint of their
/// longest axis.
///
/// Triangles get reordered in place, so that each leaf ends up owning a
/// contiguous range of them.
pub fn run(
    config: &BvhConfig,
    triangles: &mut [gpu::Triangle],
    bounds: BoundingBox,
) -> BvhNodes {
    let mut nodes = BvhNodes::new(leaf(bounds, 0..triangles.len()));

    if !triangles.is_empty() {
        split(config, &mut nodes, triangles, BvhNodeId::root(), 0);
    }

    nodes
}

fn split(
    config: &BvhConfig,
    nodes: &mut BvhNodes,
    triangles: &mut [gpu::Triangle],
    id: BvhNodeId,
    depth: u32,
) {
    if depth >= config.max_depth {
        return;
    }

    let node = nodes[id];

    let Some(range) = node.triangles() else {
        unreachable!();
    };

    if range.len() < config.min_split_triangles as usize {
        return;
    }

    let bounds = BoundingBox::new(node.min, node.max);
    let split_by = bounds.longest_axis();
    let split_at = (bounds.min()[split_by] + bounds.max()[split_by]) / 2.0;

    let (pivot, left_bounds, right_bounds) =
        partition(&mut triangles[range.clone()], split_by, split_at);

    let pivot = range.start + pivot;

    log::trace!(
        "Splitting node {}; depth={depth}, axis={split_by:?}, at={split_at}, \
         left={}, right={}",
        id.get(),
        pivot - range.start,
        range.end - pivot,
    );

    let left_id = nodes.add_pair(
        leaf(left_bounds, range.start..pivot),
        leaf(right_bounds, pivot..range.end),
    );

    nodes[id].make_internal(left_id.get());

    split(config, nodes, triangles, left_id, depth + 1);
    split(config, nodes, triangles, left_id.next(), depth + 1);
}

/// Moves triangles whose centers lie below `split_at` to the front of the
/// slice, returning how many of them there are together with bounds of both
/// halves.
///
/// Relative order within either half is not preserved.
fn partition(
    triangles: &mut [gpu::Triangle],
    split_by: Axis,
    split_at: f32,
) -> (usize, BoundingBox, BoundingBox) {
    let mut pivot = 0;
    let mut left_bounds = BoundingBox::default();
    let mut right_bounds = BoundingBox::default();

    for idx in 0..triangles.len() {
        let triangle = triangles[idx];

        if triangle.center[split_by] < split_at {
            left_bounds += triangle.bounds();
            triangles.swap(pivot, idx);
            pivot += 1;
        } else {
            right_bounds += triangle.bounds();
        }
    }

    (pivot, left_bounds, right_bounds)
}

fn leaf(bounds: BoundingBox, triangles: Range<usize>) -> gpu::BvhNode {
    gpu::BvhNode::leaf(
        bounds.min(),
        bounds.max(),
        triangles.start as i32,
        triangles.len() as i32,
    )
}
