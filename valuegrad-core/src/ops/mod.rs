//! # Scalar Operations Module (`ops`)
//!
//! Every function here takes a [`Graph`](crate::graph::Graph) and operand
//! handles, computes the forward value, and records a brand-new node together
//! with its [`BackwardOp`](crate::autograd::BackwardOp). Operands are never
//! modified; they only receive gradient later, during `backward()`.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** the forward computation (`add_op`, `tanh_op`, ...).
//!   `Graph` exposes the same operations as methods (`graph.add(a, b)`).
//! - **`_backward` Functions:** the local derivative of each operation, called
//!   by `BackwardOp::propagate` during the backward pass.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, neg, mul, div, pow, exp.
//! - [`activation`]: identity, sigmoid, relu, tanh.
//! - [`reduction`]: sum (with optional seed), mean.

pub mod activation;
pub mod arithmetic;
pub mod reduction;
