use std::fmt::Write;

use super::{Bvh, BvhNode, BvhNodeId};

/// Renders a tree as a Graphviz digraph, handy when debugging splits:
///
/// ```text
/// $ dot -Tsvg bvh.dot > bvh.svg
/// ```
pub struct BvhPrinter;

impl BvhPrinter {
    pub fn print(bvh: &Bvh) -> String {
        let mut out = String::new();

        _ = writeln!(&mut out, "digraph {{");

        if let Some(root) = bvh.root() {
            Self::process(&mut out, bvh, root);
        }

        _ = writeln!(&mut out, "}}");

        out
    }

    fn process(out: &mut String, bvh: &Bvh, root: BvhNodeId) {
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            let node = &bvh.nodes()[id];
            let bounds = node.bounds();

            match node {
                BvhNode::Internal {
                    left_id, right_id, ..
                } => {
                    _ = writeln!(
                        out,
                        "  n{} [label=\"node({} : {})\"]",
                        id.get(),
                        bounds.min(),
                        bounds.max(),
                    );

                    for child_id in [left_id, right_id] {
                        _ = writeln!(
                            out,
                            "  n{} -> n{}",
                            id.get(),
                            child_id.get()
                        );
                    }

                    stack.push(*right_id);
                    stack.push(*left_id);
                }

                BvhNode::Leaf { triangles_ref, .. } => {
                    _ = writeln!(
                        out,
                        "  n{} [label=\"leaf({}..{})\"]",
                        id.get(),
                        triangles_ref.start(),
                        triangles_ref.end(),
                    );
                }
            }
        }
    }
}
