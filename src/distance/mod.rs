//! Distance matrices.
//!
//! Provides the labelled, rounded Euclidean matrix every depot sub-problem
//! is solved against.

mod matrix;

pub use matrix::{round_to, DistanceMatrix};
