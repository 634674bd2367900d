// src/ops/reduction/mod.rs
// Reductions over a list of nodes (sum, mean).

pub mod mean;
pub mod sum;

pub use mean::mean_op;
pub use sum::sum_op;
