use super::traits::Dataset;
use valuegrad_core::ValueGradError;

/// A simple dataset that wraps a `Vec` of items.
///
/// # Type Parameters
///
/// * `T`: The type of the items stored in the dataset. Must be `Clone + Send + 'static`.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone + Send + 'static> {
    data: Vec<T>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    /// Creates a new `VecDataset` from a vector of items.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn items(&self) -> &[T] {
        &self.data
    }
}

impl<F: Clone + Send + 'static> VecDataset<(Vec<F>, Vec<F>)> {
    /// Pairs feature rows with target rows.
    ///
    /// # Errors
    ///
    /// Returns `ValueGradError::InputSizeMismatch` if there are not as many
    /// target rows as feature rows.
    pub fn from_features_targets(features: Vec<Vec<F>>, targets: Vec<Vec<F>>) -> Result<Self, ValueGradError> {
        if features.len() != targets.len() {
            return Err(ValueGradError::InputSizeMismatch {
                expected: features.len(),
                actual: targets.len(),
                operation: "VecDataset::from_features_targets".to_string(),
            });
        }
        Ok(Self::new(features.into_iter().zip(targets).collect()))
    }
}

impl<T: Clone + Send + 'static> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns a clone of the item at the given index.
    fn get(&self, index: usize) -> Result<Self::Item, ValueGradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(ValueGradError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
