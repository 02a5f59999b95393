use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::optim::optimizer_trait::Optimizer;
use log::debug;

/// Plain gradient descent: `p = p - lr * grad(p)`.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<NodeId>,
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd` optimizer over `params`.
    ///
    /// # Errors
    /// [`ScalarGradError::InvalidConfig`] if `lr` is not a positive finite number.
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: f64) -> Result<Self, ScalarGradError> {
        if !(lr.is_finite() && lr > 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "learning rate must be positive and finite, got {}",
                lr
            )));
        }
        Ok(Sgd {
            params: params.into_iter().collect(),
            lr,
        })
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &Graph) -> Result<(), ScalarGradError> {
        for &id in &self.params {
            let updated = graph.data(id) - self.lr * graph.grad(id);
            graph.set_data(id, updated)?;
        }
        debug!("Sgd::step: updated {} parameters (lr = {})", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self, graph: &Graph) {
        graph.zero_grads(self.params.iter().copied());
    }

    fn params(&self) -> &[NodeId] {
        &self.params
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
