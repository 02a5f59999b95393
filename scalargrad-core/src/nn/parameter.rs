use crate::graph::{Graph, NodeId, Value};

/// A learnable leaf node of a module: a weight or a bias.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    id: NodeId,
    name: Option<String>,
}

impl Parameter {
    pub fn new(id: NodeId, name: Option<String>) -> Self {
        Parameter { id, name }
    }

    pub fn new_unnamed(id: NodeId) -> Self {
        Parameter { id, name: None }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Handle for building expressions with this parameter.
    pub fn value<'g>(&self, graph: &'g Graph) -> Value<'g> {
        graph.value(self.id)
    }

    pub fn data(&self, graph: &Graph) -> f64 {
        graph.data(self.id)
    }

    pub fn grad(&self, graph: &Graph) -> f64 {
        graph.grad(self.id)
    }
}
