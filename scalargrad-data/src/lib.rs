//! Small in-memory datasets for training `scalargrad-core` networks.

pub mod datasets;
pub mod toy;

pub use datasets::{Dataset, Sample, VecDataset};
pub use toy::{split_xy, toy_dataset};
