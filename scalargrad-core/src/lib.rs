// Core modules of the crate
pub mod autograd;
pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod train;
pub mod utils;

// Re-export the graph handles so they are reachable as `scalargrad_core::Value` etc.
pub use error::ScalarGradError;
pub use graph::{Graph, Node, NodeId, Value};
pub use ops::activation::Activation;
pub use ops::Operand;
// Re-export traits required by public functions
pub use num_traits;
