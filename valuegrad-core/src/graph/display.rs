use crate::graph::{Graph, NodeId};
use crate::types::Scalar;
use std::fmt;

/// Borrowed view of a single node, used for rendering.
///
/// Renders as `Value(<value>[ (<label>)][ <tag>][ grad: <grad>])`. Integral
/// numbers keep one decimal (`8.0`), others print at full precision, and the
/// gradient only appears when it is nonzero.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'g, T: Scalar> {
    graph: &'g Graph<T>,
    id: NodeId,
}

impl<'g, T: Scalar> NodeView<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>, id: NodeId) -> Self {
        NodeView { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> T {
        self.graph.value(self.id)
    }

    pub fn grad(&self) -> T {
        self.graph.grad(self.id)
    }
}

impl<T: Scalar> fmt::Display for NodeView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({}", FormatNumber(self.value()))?;
        if let Some(label) = self.graph.label(self.id) {
            if !label.is_empty() {
                write!(f, " ({})", label)?;
            }
        }
        let tag = self.graph.op_tag(self.id);
        if !tag.is_empty() {
            write!(f, " {}", tag)?;
        }
        let grad = self.grad();
        if grad != T::zero() {
            write!(f, " grad: {}", FormatNumber(grad))?;
        }
        write!(f, ")")
    }
}

/// Magnitude from which numbers switch to exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Fixed-point with one decimal for integral values, full precision otherwise.
/// Magnitudes of `1e21` and above use exponent notation.
struct FormatNumber<T>(T);

impl<T: Scalar> fmt::Display for FormatNumber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let huge = T::from_f64(EXPONENT_THRESHOLD).is_some_and(|limit| value.abs() >= limit);
        if value.is_finite() && huge {
            write!(f, "{:e}", value)
        } else if value.is_finite() && value.fract() == T::zero() {
            write!(f, "{:.1}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}

/// Indented tree of a node and, recursively, its operands.
struct ComputationTree<'g, T: Scalar> {
    graph: &'g Graph<T>,
    root: NodeId,
}

impl<T: Scalar> fmt::Display for ComputationTree<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pre-order walk with an explicit stack; operands pushed in reverse so
        // they print in operand order.
        let mut stack: Vec<(NodeId, usize)> = vec![(self.root, 0)];
        while let Some((node, indent)) = stack.pop() {
            writeln!(f, "{:indent$}{}", "", self.graph.node(node), indent = indent)?;
            for operand in self.graph.operands(node).into_iter().rev() {
                stack.push((operand, indent + 2));
            }
        }
        Ok(())
    }
}

impl<T: Scalar> Graph<T> {
    /// Renders `root` and, recursively, its operands, one node per line, each
    /// level indented by two more spaces.
    ///
    /// Shared sub-graphs are NOT deduplicated: a node reachable along several
    /// edges is printed once per edge, so output grows exponentially on deeply
    /// nested diamonds. This is a debugging aid only.
    pub fn render_computation_graph(&self, root: NodeId) -> String {
        ComputationTree { graph: self, root }.to_string()
    }

    /// Prints [`render_computation_graph`](Graph::render_computation_graph) to stdout.
    pub fn print_computation_graph(&self, root: NodeId) {
        print!("{}", ComputationTree { graph: self, root });
    }
}
