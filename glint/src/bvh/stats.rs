use std::fmt;

use crate::gpu;

/// Shape of a built tree, mostly useful for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BvhStats {
    pub nodes: usize,
    pub leaves: usize,
    pub empty_leaves: usize,
    pub max_depth: u32,
    pub max_leaf_size: usize,
}

impl BvhStats {
    pub fn collect(nodes: &[gpu::BvhNode]) -> Self {
        let mut this = Self {
            nodes: nodes.len(),
            ..Default::default()
        };

        if nodes.is_empty() {
            return this;
        }

        let mut stack = vec![(0, 0)];

        while let Some((id, depth)) = stack.pop() {
            let node: gpu::BvhNode = nodes[id as usize];

            this.max_depth = this.max_depth.max(depth);

            if let Some([left_id, right_id]) = node.children() {
                stack.push((right_id, depth + 1));
                stack.push((left_id, depth + 1));
            } else {
                let size = node.triangle_count as usize;

                this.leaves += 1;
                this.empty_leaves += (size == 0) as usize;
                this.max_leaf_size = this.max_leaf_size.max(size);
            }
        }

        this
    }
}

impl fmt::Display for BvhStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={}, leaves={}, empty-leaves={}, max-depth={}, \
             max-leaf-size={}",
            self.nodes,
            self.leaves,
            self.empty_leaves,
            self.max_depth,
            self.max_leaf_size
        )
    }
}
