//! Data utilities for valuegrad: datasets, samplers, batching, conversion of
//! batches into graph nodes, and column-wise feature scaling.

pub mod collate;
pub mod dataloader;
pub mod datasets;
pub mod normalization;
pub mod samplers;

// Re-export main components
pub use collate::{batch_to_nodes, NodeBatch};
pub use dataloader::DataLoader;
pub use datasets::{Dataset, VecDataset};
pub use normalization::{normalize_min_max, standardize, MinMaxScaled, Standardized};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
