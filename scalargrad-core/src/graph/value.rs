use crate::graph::{Graph, Node, NodeId};
use std::fmt;

/// Lightweight handle to a node of a [`Graph`].
///
/// `Value` is `Copy`; it carries the graph reference so the operator
/// overloads (`+`, `-`, `*`, `/`, unary `-`) and the activation methods can
/// append to the right arena without the caller threading it through.
#[derive(Clone, Copy)]
pub struct Value<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Value<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn graph(self) -> &'g Graph {
        self.graph
    }

    /// Forward value.
    pub fn data(self) -> f64 {
        self.graph.data(self.id)
    }

    /// Gradient accumulated by backward passes so far.
    pub fn grad(self) -> f64 {
        self.graph.grad(self.id)
    }

    /// Snapshot of the underlying node.
    pub fn node(self) -> Node {
        self.graph.nodes.borrow()[self.id.0]
    }

    /// Runs the backward pass with this value as the root.
    ///
    /// See [`Graph::backward`].
    pub fn backward(self) -> usize {
        self.graph.backward(self.id)
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(self) {
        self.graph.zero_grad(self.id)
    }

    /// True if both handles point at the same node of the same graph.
    pub fn same_node(self, other: Value<'_>) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        write!(f, "Value({} | {})", node.data, node.grad)
    }
}
