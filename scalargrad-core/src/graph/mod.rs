//! Arena-backed computation graph.
//!
//! Every node produced while evaluating an expression lives in one growable
//! buffer owned by a [`Graph`]. Edges are [`NodeId`] indices into that buffer,
//! so fan-in and fan-out never create shared ownership, and a child always has
//! a smaller index than any node built from it.

mod autograd_methods;
mod node;
mod value;

pub use node::Node;
pub use value::Value;

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use log::debug;
use num_traits::ToPrimitive;
use std::cell::RefCell;
use std::fmt::Debug;

/// Identity of a node inside its [`Graph`].
///
/// Two nodes holding equal data are still distinct if their ids differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single computation graph: the arena plus the operations that grow it.
///
/// Building happens through `&Graph` so any number of [`Value`] handles can
/// extend the same graph. Dropping nodes ([`Graph::truncate`]) needs
/// `&mut Graph`, which guarantees no handle into the dropped tail survives.
///
/// Node accessors taking a [`NodeId`] panic if the id does not belong to this
/// graph (or was truncated away), the same way slice indexing does.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a node and returns its id.
    pub(crate) fn push(&self, data: f64, op: BackwardOp) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        debug_assert!(
            op.children().all(|child| child.0 < id.0),
            "children must be created before their parent"
        );
        nodes.push(Node::new(data, op));
        id
    }

    /// Creates a leaf node holding `data` with a zero gradient.
    pub fn leaf(&self, data: f64) -> Value<'_> {
        let id = self.push(data, BackwardOp::Leaf);
        Value::new(self, id)
    }

    /// Promotes any primitive number to a leaf node.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::NonNumericLiteral`] if `literal` has no finite
    /// `f64` representation (NaN, infinities, or a custom `ToPrimitive` that
    /// refuses the conversion).
    pub fn from_literal<T>(&self, literal: T) -> Result<Value<'_>, ScalarGradError>
    where
        T: ToPrimitive + Debug,
    {
        match literal.to_f64() {
            Some(data) if data.is_finite() => Ok(self.leaf(data)),
            _ => Err(ScalarGradError::NonNumericLiteral(format!("{:?}", literal))),
        }
    }

    /// Returns a handle to an existing node.
    pub fn value(&self, id: NodeId) -> Value<'_> {
        assert!(id.0 < self.len(), "node {} is not part of this graph", id.0);
        Value::new(self, id)
    }

    /// Returns a copy of the node stored at `id`.
    pub fn get(&self, id: NodeId) -> Result<Node, ScalarGradError> {
        let nodes = self.nodes.borrow();
        nodes
            .get(id.0)
            .copied()
            .ok_or(ScalarGradError::IndexOutOfBounds {
                index: id.0,
                len: nodes.len(),
            })
    }

    /// Copy of every node in the arena, in creation order.
    pub fn snapshot(&self) -> Vec<Node> {
        self.nodes.borrow().clone()
    }

    /// Forward value of the node.
    pub fn data(&self, id: NodeId) -> f64 {
        self.nodes.borrow()[id.0].data
    }

    /// Accumulated gradient of the node.
    pub fn grad(&self, id: NodeId) -> f64 {
        self.nodes.borrow()[id.0].grad
    }

    /// Overwrites the data of a leaf node, e.g. a parameter update.
    ///
    /// # Errors
    /// [`ScalarGradError::NotALeaf`] if the node was produced by an operation,
    /// [`ScalarGradError::IndexOutOfBounds`] if `id` is not in the arena.
    pub fn set_data(&self, id: NodeId, data: f64) -> Result<(), ScalarGradError> {
        let mut nodes = self.nodes.borrow_mut();
        let len = nodes.len();
        let node = nodes
            .get_mut(id.0)
            .ok_or(ScalarGradError::IndexOutOfBounds { index: id.0, len })?;
        if !node.is_leaf() {
            return Err(ScalarGradError::NotALeaf { index: id.0 });
        }
        node.data = data;
        Ok(())
    }

    /// Resets the gradient accumulator of one node.
    pub fn zero_grad(&self, id: NodeId) {
        self.nodes.borrow_mut()[id.0].grad = 0.0;
    }

    /// Resets the gradient accumulator of every listed node.
    pub fn zero_grads(&self, ids: impl IntoIterator<Item = NodeId>) {
        let mut nodes = self.nodes.borrow_mut();
        for id in ids {
            nodes[id.0].grad = 0.0;
        }
    }

    /// Watermark for a later [`Graph::truncate`].
    pub fn checkpoint(&self) -> usize {
        self.len()
    }

    /// Drops every node created after `mark`.
    ///
    /// Nodes below the mark (typically parameters) keep their data and grad.
    pub fn truncate(&mut self, mark: usize) {
        let nodes = self.nodes.get_mut();
        let dropped = nodes.len().saturating_sub(mark);
        nodes.truncate(mark);
        debug!("Graph::truncate: dropped {} nodes, {} remain", dropped, nodes.len());
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
