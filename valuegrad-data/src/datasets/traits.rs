use valuegrad_core::ValueGradError;

/// Represents a dataset that can be iterated over and accessed by index.
///
/// A dataset is a collection of items, where each item can be a feature row,
/// a `(features, targets)` pair, or any other custom type that implements
/// `Send + 'static`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ValueGradError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, ValueGradError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
