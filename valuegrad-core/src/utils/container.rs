use crate::graph::NodeId;
use std::collections::HashSet;

/// Arbitrarily nested structure of node handles.
///
/// Layers describe their parameters with it (e.g. a record
/// `{ weights: [w0, w1, ...], bias: b }`) and optimizers consume it flattened.
/// The set of shapes is closed: a single node, an ordered sequence, or a record
/// of named entries kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueContainer {
    Node(NodeId),
    Sequence(Vec<ValueContainer>),
    Record(Vec<(String, ValueContainer)>),
}

impl ValueContainer {
    /// A container holding nothing.
    pub fn empty() -> Self {
        ValueContainer::Sequence(Vec::new())
    }

    /// Builds a record from `(name, container)` pairs, keeping their order.
    pub fn record<K, C, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<ValueContainer>,
    {
        ValueContainer::Record(
            entries
                .into_iter()
                .map(|(name, container)| (name.into(), container.into()))
                .collect(),
        )
    }

    /// Returns `true` if this is a single node rather than a container of nodes.
    pub fn is_node(&self) -> bool {
        matches!(self, ValueContainer::Node(_))
    }

    /// Looks up a record entry by name. `None` for nodes, sequences and unknown names.
    pub fn get(&self, name: &str) -> Option<&ValueContainer> {
        match self {
            ValueContainer::Record(entries) => entries
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, container)| container),
            _ => None,
        }
    }

    /// Iterates over the nodes of the container. See [`get_values`].
    ///
    /// The iterator can be recreated at will; every call yields the same sequence.
    pub fn iter(&self) -> std::vec::IntoIter<NodeId> {
        get_values(self).into_iter()
    }

    pub fn len(&self) -> usize {
        get_values(self).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<NodeId> for ValueContainer {
    fn from(node: NodeId) -> Self {
        ValueContainer::Node(node)
    }
}

impl<C: Into<ValueContainer>> From<Vec<C>> for ValueContainer {
    fn from(items: Vec<C>) -> Self {
        ValueContainer::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<&[NodeId]> for ValueContainer {
    fn from(nodes: &[NodeId]) -> Self {
        ValueContainer::Sequence(nodes.iter().copied().map(ValueContainer::Node).collect())
    }
}

impl<C: Into<ValueContainer>> From<Option<C>> for ValueContainer {
    fn from(item: Option<C>) -> Self {
        item.map_or_else(ValueContainer::empty, Into::into)
    }
}

impl<C: Into<ValueContainer>> FromIterator<C> for ValueContainer {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        ValueContainer::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for &ValueContainer {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Flattens a container into its nodes.
///
/// Depth-first, in sequence / record insertion order. A node reachable several
/// times (e.g. a weight shared between two layers) is yielded only at its first
/// occurrence, so optimizers never update a parameter twice per step.
pub fn get_values(container: &ValueContainer) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut stack: Vec<&ValueContainer> = vec![container];
    while let Some(current) = stack.pop() {
        match current {
            ValueContainer::Node(node) => {
                if seen.insert(*node) {
                    out.push(*node);
                }
            }
            ValueContainer::Sequence(items) => stack.extend(items.iter().rev()),
            ValueContainer::Record(entries) => {
                stack.extend(entries.iter().rev().map(|(_, container)| container))
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_single_node() {
        let mut graph = Graph::<f64>::new();
        let a = graph.leaf(1.0);
        let container = ValueContainer::from(a);
        assert!(container.is_node());
        assert_eq!(get_values(&container), vec![a]);
    }

    #[test]
    fn test_nested_order_is_depth_first_insertion_order() {
        let mut graph = Graph::<f64>::new();
        let ids: Vec<NodeId> = (0..6).map(|i| graph.leaf(i as f64)).collect();
        let container = ValueContainer::from(vec![
            ValueContainer::record([
                ("weights", ValueContainer::from(vec![ids[3], ids[1]])),
                ("bias", ValueContainer::from(ids[0])),
            ]),
            ValueContainer::from(vec![vec![ids[5]], vec![], vec![ids[2], ids[4]]]),
        ]);
        assert_eq!(
            get_values(&container),
            vec![ids[3], ids[1], ids[0], ids[5], ids[2], ids[4]]
        );
        assert_eq!(container.len(), 6);
    }

    #[test]
    fn test_duplicates_are_yielded_once() {
        let mut graph = Graph::<f64>::new();
        let a = graph.leaf(1.0);
        let b = graph.leaf(2.0);
        let container = ValueContainer::from(vec![
            ValueContainer::from(vec![a, b]),
            ValueContainer::record([("shared", a)]),
        ]);
        assert_eq!(get_values(&container), vec![a, b]);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let mut graph = Graph::<f64>::new();
        let nodes = vec![graph.leaf(1.0), graph.leaf(2.0)];
        let container: ValueContainer = nodes.iter().copied().collect();
        let first: Vec<_> = container.iter().collect();
        let second: Vec<_> = (&container).into_iter().collect();
        assert_eq!(first, nodes);
        assert_eq!(first, second);
    }

    #[test]
    fn test_record_lookup_and_empty() {
        let mut graph = Graph::<f64>::new();
        let bias = graph.leaf(0.0);
        let record = ValueContainer::record([("bias", Some(bias)), ("scale", None)]);
        assert_eq!(record.get("bias"), Some(&ValueContainer::Node(bias)));
        assert!(record.get("scale").unwrap().is_empty());
        assert_eq!(record.get("missing"), None);
        assert!(ValueContainer::empty().is_empty());
    }
}
