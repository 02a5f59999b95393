//! Reverse-mode differentiation over the node arena.
//!
//! [`BackwardOp`] is the per-node record of how to push an output gradient
//! into the operands; [`graph::topological_sort`] orders the reachable nodes;
//! `Graph::backward` ties them together.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckError};
