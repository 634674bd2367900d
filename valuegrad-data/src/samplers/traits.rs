// valuegrad-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Defines the order in which a `DataLoader` visits the items of a dataset.
pub trait Sampler: Debug + Send + Sync {
    /// Returns the indices to visit for one epoch.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the number of indices `iter` yields for a dataset of `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize;
}
