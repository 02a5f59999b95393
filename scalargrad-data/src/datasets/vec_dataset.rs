use super::traits::Dataset;
use scalargrad_core::ScalarGradError;

/// One supervised example: an input row and its scalar target.
pub type Sample = (Vec<f64>, f64);

/// A dataset backed by a `Vec` of items.
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset<T: Clone> {
    data: Vec<T>,
}

impl<T: Clone> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn items(&self) -> &[T] {
        &self.data
    }
}

impl VecDataset<Sample> {
    /// Pairs input rows with targets.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::DatasetMismatch` if the lengths differ.
    pub fn from_xy(xs: Vec<Vec<f64>>, ys: Vec<f64>) -> Result<Self, ScalarGradError> {
        if xs.len() != ys.len() {
            return Err(ScalarGradError::DatasetMismatch {
                inputs: xs.len(),
                targets: ys.len(),
            });
        }
        Ok(Self::new(xs.into_iter().zip(ys).collect()))
    }
}

impl<T: Clone> Dataset for VecDataset<T> {
    type Item = T;

    /// Clones the item before returning.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(ScalarGradError::IndexOutOfBounds {
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
