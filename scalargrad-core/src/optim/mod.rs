// scalargrad-core/src/optim/mod.rs

//! Optimizers for training networks built on the engine.
//!
//! An optimizer holds the ids of the parameter leaves it manages and updates
//! their data in place from the gradients accumulated by the last backward pass.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
