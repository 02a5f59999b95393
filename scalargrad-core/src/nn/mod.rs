// src/nn/mod.rs
// Neurons, fully-connected layers, parameters, and losses built on the engine.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use layers::{Dense, Neuron};
pub use losses::sum_squared_error;
pub use module::Module;
pub use parameter::Parameter;
