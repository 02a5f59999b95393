use crate::autograd::graph::topological_sort;
use crate::graph::{Graph, NodeId};
use log::{debug, trace};

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// Adds `d(root)/d(n)` to the gradient of every node `n` reachable from
    /// `root`, summed over all paths. Gradients are accumulated, never
    /// assigned: callers that want fresh gradients must zero them first, and
    /// calling this twice without zeroing doubles every reachable gradient.
    ///
    /// The pass propagates its own adjoints in a scratch buffer and adds them
    /// to the stored gradients at the end, so residual gradients from earlier
    /// passes never feed back into the chain rule.
    ///
    /// The graph must be acyclic, which the arena guarantees for anything built
    /// through the public operations. Exclusive access is assumed for the
    /// duration of the call.
    ///
    /// Returns the number of nodes visited.
    pub fn backward(&self, root: NodeId) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        let sorted = topological_sort(&nodes, root);

        // Children always have smaller indices, so nothing reachable exceeds root.
        let mut adjoint = vec![0.0; root.0 + 1];
        adjoint[root.0] = 1.0;
        for &id in sorted.iter().rev() {
            let node = nodes[id.0];
            let upstream = adjoint[id.0];
            trace!("backward: node {} op {:?} upstream {}", id.0, node.op, upstream);
            node.op.apply(node.data, upstream, &nodes, &mut adjoint);
        }

        for &id in &sorted {
            nodes[id.0].grad += adjoint[id.0];
        }

        debug!(
            "Graph::backward: propagated through {} of {} nodes from root {}",
            sorted.len(),
            nodes.len(),
            root.0
        );
        sorted.len()
    }
}
