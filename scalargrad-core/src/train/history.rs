/// Loss recorded after every training step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    losses: Vec<f64>,
}

impl TrainingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, loss: f64) {
        self.losses.push(loss);
    }

    pub fn losses(&self) -> &[f64] {
        &self.losses
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    /// Loss of the first recorded step.
    pub fn initial(&self) -> Option<f64> {
        self.losses.first().copied()
    }

    /// Loss of the most recent step.
    pub fn last(&self) -> Option<f64> {
        self.losses.last().copied()
    }

    /// Trailing moving average: entry `i` averages losses `i .. i + window`.
    ///
    /// Empty if `window` is zero or longer than the history.
    pub fn moving_average(&self, window: usize) -> Vec<f64> {
        if window == 0 {
            return Vec::new();
        }
        self.losses
            .windows(window)
            .map(|w| w.iter().sum::<f64>() / window as f64)
            .collect()
    }

    /// Mean loss of consecutive, non-overlapping blocks of `block` steps.
    /// A trailing partial block is ignored.
    pub fn block_means(&self, block: usize) -> Vec<f64> {
        if block == 0 {
            return Vec::new();
        }
        self.losses
            .chunks_exact(block)
            .map(|c| c.iter().sum::<f64>() / block as f64)
            .collect()
    }
}

impl Extend<f64> for TrainingHistory {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.losses.extend(iter);
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
