//! Helpers shared by the graph consumers: node-container flattening,
//! conversion of plain numbers into leaves, and test utilities.

pub mod container;
pub mod conversion;
pub mod testing;

pub use container::{get_values, ValueContainer};
pub use conversion::{from_matrix, from_slice, values_of};
