//! Activation functions applied to a single node.

pub mod identity;
pub mod relu;
pub mod sigmoid;
pub mod tanh;

pub use identity::identity_op;
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
