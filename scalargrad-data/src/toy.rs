use crate::datasets::{Dataset, Sample, VecDataset};
use scalargrad_core::ScalarGradError;

/// The four-example regression set: three inputs, targets of ±1.
pub fn toy_dataset() -> VecDataset<Sample> {
    VecDataset::new(vec![
        (vec![2.0, 3.0, -1.0], 1.0),
        (vec![3.0, -1.0, 0.5], -1.0),
        (vec![0.5, 1.0, 1.0], -1.0),
        (vec![1.0, 1.0, -1.0], 1.0),
    ])
}

/// Splits a dataset of samples into the input rows and targets the trainer takes.
pub fn split_xy<D>(dataset: &D) -> Result<(Vec<Vec<f64>>, Vec<f64>), ScalarGradError>
where
    D: Dataset<Item = Sample>,
{
    let mut xs = Vec::with_capacity(dataset.len());
    let mut ys = Vec::with_capacity(dataset.len());
    for index in 0..dataset.len() {
        let (x, y) = dataset.get(index)?;
        xs.push(x);
        ys.push(y);
    }
    Ok((xs, ys))
}

#[cfg(test)]
#[path = "toy_test.rs"]
mod tests;
