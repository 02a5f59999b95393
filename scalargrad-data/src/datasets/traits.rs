use scalargrad_core::ScalarGradError;

/// A collection of items accessible by index.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::IndexOutOfBounds` if `index >= len()`.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
