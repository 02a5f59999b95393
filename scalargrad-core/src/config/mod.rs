//! Training configuration.
//!
//! [`TrainConfig`] holds every knob of a training run. Values start from
//! [`TrainConfig::default`], can be set with the `with_*` builder methods, and
//! can be overridden from `SCALARGRAD_*` environment variables via
//! [`TrainConfig::from_env`].

mod env;

pub use env::{
    env_key, ENV_ACTIVATION, ENV_EPOCHS, ENV_LAYER_SIZES, ENV_LEARNING_RATE, ENV_LOG_EVERY,
    ENV_PREFIX, ENV_SEED,
};

use crate::error::ScalarGradError;
use crate::ops::activation::Activation;

/// Hyperparameters for one training run of an [`Mlp`](crate::model::Mlp).
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Width of each input vector.
    pub n_inputs: usize,
    /// Width of each layer; the last entry is the output width.
    pub layer_sizes: Vec<usize>,
    pub activation: Activation,
    pub learning_rate: f64,
    /// Number of full passes over the training set.
    pub epochs: usize,
    /// Seed for parameter initialisation.
    pub seed: u64,
    /// Log progress every this many epochs (0 disables).
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            n_inputs: 3,
            layer_sizes: vec![10, 5, 4, 1],
            activation: Activation::Sigmoid,
            learning_rate: 0.001,
            epochs: 1000,
            seed: 23,
            log_every: 100,
        }
    }
}

impl TrainConfig {
    pub fn with_n_inputs(mut self, n_inputs: usize) -> Self {
        self.n_inputs = n_inputs;
        self
    }

    pub fn with_layer_sizes(mut self, layer_sizes: impl Into<Vec<usize>>) -> Self {
        self.layer_sizes = layer_sizes.into();
        self
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    /// Checks that the values describe a trainable run.
    ///
    /// # Errors
    /// [`ScalarGradError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.n_inputs == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "n_inputs must be at least 1".to_string(),
            ));
        }
        if self.layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "layer_sizes must not be empty".to_string(),
            ));
        }
        if self.layer_sizes.contains(&0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "layer_sizes must not contain zero: {:?}",
                self.layer_sizes
            )));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "epochs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
