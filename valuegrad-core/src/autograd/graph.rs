use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Builds a topological order of every node reachable from `root` through operands.
///
/// Depth-first post-order: a node is appended only after all of its operands, so
/// walking the result back-to-front visits each consumer before its producers.
/// A visited set guarantees that a node shared by several consumers is emitted
/// exactly once, keeping the traversal O(V+E) on diamond-shaped graphs.
///
/// The traversal uses an explicit stack, so long chains (deep sequential models)
/// cannot overflow the call stack.
pub fn topological_sort<T: Scalar>(graph: &Graph<T>, root: NodeId) -> Vec<NodeId> {
    let mut sorted = Vec::new();
    let mut visited = vec![false; graph.len()];
    // (node, operands already expanded)
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            log::trace!("[topological_sort] Emitting node {}", node.0);
            sorted.push(node);
            continue;
        }
        if visited[node.0] {
            continue;
        }
        visited[node.0] = true;
        stack.push((node, true));
        // Reversed so that operands are expanded in argument order.
        for operand in graph.op(node).operands().into_iter().rev() {
            if !visited[operand.0] {
                stack.push((operand, false));
            }
        }
    }
    sorted
}
