// dataloader.rs
//! # DataLoader
//!
//! Groups the items of a [`Dataset`] into batches, visiting them in the order
//! chosen by a [`Sampler`]. Each call to [`DataLoader::iter`] is one epoch.
//!
//! ```rust
//! use valuegrad_data::dataloader::DataLoader;
//! use valuegrad_data::datasets::VecDataset;
//! use valuegrad_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! for batch in &loader {
//!     let batch = batch.unwrap();
//!     assert_eq!(batch.len(), 2);
//! }
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use valuegrad_core::ValueGradError;

/// Batches a dataset according to a sampler.
///
/// - `batch_size`: maximum number of items per batch, at least 1.
/// - `drop_last`: if true, a trailing incomplete batch is skipped.
#[derive(Debug)]
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    sampler: S,
    batch_size: usize,
    drop_last: bool,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// # Errors
    /// `InvalidHyperparameter` if `batch_size` is zero.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Result<Self, ValueGradError> {
        if batch_size == 0 {
            return Err(ValueGradError::InvalidHyperparameter {
                name: "batch_size".to_string(),
                value: 0.0,
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            dataset,
            sampler,
            batch_size,
            drop_last,
        })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches one epoch yields.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }

    /// Starts a new epoch.
    pub fn iter(&self) -> Batches<'_, D> {
        let indices = self.sampler.iter(self.dataset.len());
        log::debug!(
            "DataLoader epoch: {} items, batch_size {}, {} batches",
            self.dataset.len(),
            self.batch_size,
            self.num_batches()
        );
        Batches {
            dataset: &self.dataset,
            indices,
            batch_size: self.batch_size,
            drop_last: self.drop_last,
        }
    }
}

impl<'a, D: Dataset, S: Sampler> IntoIterator for &'a DataLoader<D, S> {
    type Item = Result<Vec<D::Item>, ValueGradError>;
    type IntoIter = Batches<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the batches of one epoch.
pub struct Batches<'a, D: Dataset> {
    dataset: &'a D,
    indices: Box<dyn Iterator<Item = usize> + Send + Sync>,
    batch_size: usize,
    drop_last: bool,
}

impl<D: Dataset> Iterator for Batches<'_, D> {
    type Item = Result<Vec<D::Item>, ValueGradError>;

    /// Yields `Some(Err(_))` when the dataset fails to produce an item; the
    /// rest of that batch is skipped and the next batch starts on its own
    /// indices.
    fn next(&mut self) -> Option<Self::Item> {
        let batch_indices: Vec<usize> = self.indices.by_ref().take(self.batch_size).collect();
        if batch_indices.is_empty() || (self.drop_last && batch_indices.len() < self.batch_size) {
            return None;
        }
        Some(batch_indices.into_iter().map(|idx| self.dataset.get(idx)).collect())
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
