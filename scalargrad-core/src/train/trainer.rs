use crate::config::TrainConfig;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::model::{Mlp, MlpOutput};
use crate::nn::losses::sum_squared_error;
use crate::nn::module::Module;
use crate::optim::{Optimizer, Sgd};
use crate::train::history::TrainingHistory;
use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Owns the graph, a single-output network, and its optimizer.
///
/// Parameters sit at the bottom of the arena. Every step appends the forward
/// and loss nodes above them and truncates back to the parameter watermark
/// once the update is done.
#[derive(Debug)]
pub struct Trainer<O: Optimizer = Sgd> {
    graph: Graph,
    model: Mlp,
    optimizer: O,
    mark: usize,
    log_every: usize,
}

impl Trainer<Sgd> {
    /// Builds the network and an [`Sgd`] optimizer from a validated config.
    ///
    /// The parameter RNG is a [`StdRng`] seeded from `config.seed`.
    pub fn new(config: &TrainConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(config.seed);
        let model = Mlp::new(
            &graph,
            &mut rng,
            config.n_inputs,
            &config.layer_sizes,
            config.activation,
        )?;
        let optimizer = Sgd::new(model.parameter_ids(), config.learning_rate)?;
        let mut trainer = Trainer::with_optimizer(graph, model, optimizer)?;
        trainer.log_every = config.log_every;
        Ok(trainer)
    }
}

impl<O: Optimizer> Trainer<O> {
    /// Assembles a trainer from parts. `graph` must hold the model's parameters.
    ///
    /// # Errors
    /// [`ScalarGradError::InvalidArchitecture`] unless the model has exactly one output.
    pub fn with_optimizer(graph: Graph, model: Mlp, optimizer: O) -> Result<Self, ScalarGradError> {
        if model.n_outputs() != 1 {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "trainer needs a single-output network, got {} outputs",
                model.n_outputs()
            )));
        }
        let mark = graph.checkpoint();
        Ok(Trainer {
            graph,
            model,
            optimizer,
            mark,
            log_every: 0,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn model(&self) -> &Mlp {
        &self.model
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    /// One gradient-descent step over the whole dataset.
    ///
    /// Forward for every example, sum-of-squares loss, zero the parameter
    /// gradients, backward from the loss, update. Returns the loss computed
    /// before the update.
    ///
    /// # Errors
    /// [`ScalarGradError::DatasetMismatch`] if `xs` and `ys` differ in length,
    /// [`ScalarGradError::InputSizeMismatch`] for a malformed input row.
    pub fn train_step(&mut self, xs: &[Vec<f64>], ys: &[f64]) -> Result<f64, ScalarGradError> {
        if xs.len() != ys.len() {
            return Err(ScalarGradError::DatasetMismatch {
                inputs: xs.len(),
                targets: ys.len(),
            });
        }

        let result = Self::step_on(&self.graph, &self.model, &mut self.optimizer, xs, ys);
        self.graph.truncate(self.mark);
        result
    }

    fn step_on(
        graph: &Graph,
        model: &Mlp,
        optimizer: &mut O,
        xs: &[Vec<f64>],
        ys: &[f64],
    ) -> Result<f64, ScalarGradError> {
        let predictions = xs
            .iter()
            .map(|x| model.predict(graph, x).map(MlpOutput::into_vec))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        let loss = sum_squared_error(graph, &predictions, ys)?;

        optimizer.zero_grad(graph);
        let visited = loss.backward();
        optimizer.step(graph)?;

        trace!("train_step: loss {} over {} nodes", loss.data(), visited);
        Ok(loss.data())
    }

    /// Runs `epochs` training steps and records every loss.
    pub fn fit(
        &mut self,
        xs: &[Vec<f64>],
        ys: &[f64],
        epochs: usize,
    ) -> Result<TrainingHistory, ScalarGradError> {
        let mut history = TrainingHistory::new();
        for epoch in 0..epochs {
            let loss = self.train_step(xs, ys)?;
            history.push(loss);
            if self.log_every > 0 && (epoch % self.log_every == 0 || epoch + 1 == epochs) {
                info!(
                    "[{}] epoch {}/{}: loss {:.6}",
                    self.model.activation(),
                    epoch + 1,
                    epochs,
                    loss
                );
            }
        }
        Ok(history)
    }

    /// Evaluates the network on one input without touching any gradient.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<f64, ScalarGradError> {
        let result = self
            .model
            .predict(&self.graph, inputs)
            .map(|output| output.data()[0]);
        self.graph.truncate(self.mark);
        result
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
