use std::fmt::Write;

use crate::gpu;

/// Dumps BVH as a Graphviz graph.
pub struct BvhPrinter;

impl BvhPrinter {
    pub fn print(nodes: &[gpu::BvhNode]) -> String {
        let mut out = String::new();

        _ = writeln!(&mut out, "digraph {{");

        if !nodes.is_empty() {
            Self::process(&mut out, nodes, 0);
        }

        _ = writeln!(&mut out, "}}");

        out
    }

    fn process(out: &mut String, nodes: &[gpu::BvhNode], id: u32) {
        let node = nodes[id as usize];

        if let Some(children) = node.children() {
            _ = writeln!(
                out,
                "  n{} [label=\"node({} : {})\"]",
                id, node.min, node.max
            );

            for child_id in children {
                Self::process(out, nodes, child_id);
            }

            for child_id in children {
                _ = writeln!(out, "  n{} -> n{}", id, child_id);
            }
        } else {
            _ = writeln!(
                out,
                "  n{} [label=\"leaf({}..{})\"]",
                id,
                node.index,
                node.index + node.triangle_count
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{vec3, Vec3};

    use super::*;

    #[test]
    fn test() {
        let mut root =
            gpu::BvhNode::leaf(Vec3::ZERO, vec3(2.0, 1.0, 0.0), 0, 3);

        root.make_internal(1);

        let nodes = [
            root,
            gpu::BvhNode::leaf(Vec3::ZERO, Vec3::ONE, 0, 1),
            gpu::BvhNode::leaf(Vec3::ONE, vec3(2.0, 1.0, 0.0), 1, 2),
        ];

        let expected = "\
            digraph {\n\
            \x20 n0 [label=\"node([0, 0, 0] : [2, 1, 0])\"]\n\
            \x20 n1 [label=\"leaf(0..1)\"]\n\
            \x20 n2 [label=\"leaf(1..3)\"]\n\
            \x20 n0 -> n1\n\
            \x20 n0 -> n2\n\
            }\n";

        assert_eq!(expected, BvhPrinter::print(&nodes));
    }
}
