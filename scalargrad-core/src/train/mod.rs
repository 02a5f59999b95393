//! Gradient-descent training of an [`Mlp`](crate::model::Mlp) on a small
//! in-memory dataset.

pub mod history;
pub mod trainer;

pub use history::TrainingHistory;
pub use trainer::Trainer;
