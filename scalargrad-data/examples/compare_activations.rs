//! Trains the same network once per activation on the toy dataset and prints
//! the initial loss, the final loss, and the last 50-step moving average.
//!
//! Hyperparameters come from `SCALARGRAD_*` environment variables (see
//! `TrainConfig::from_env`); `SCALARGRAD_ACTIVATION` is ignored since every
//! activation is run. Set `RUST_LOG=info` to see per-epoch progress.

use scalargrad_core::config::TrainConfig;
use scalargrad_core::train::Trainer;
use scalargrad_core::{Activation, ScalarGradError};
use scalargrad_data::{split_xy, toy_dataset};

const MOVING_AVERAGE_WINDOW: usize = 50;

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let base = TrainConfig::from_env()?;
    let (xs, ys) = split_xy(&toy_dataset())?;
    println!(
        "layers {:?}, lr {}, {} epochs, seed {}",
        base.layer_sizes, base.learning_rate, base.epochs, base.seed
    );
    println!(
        "{:<10} {:>12} {:>12} {:>12}",
        "activation", "initial", "final", "avg(last 50)"
    );

    for activation in Activation::ALL {
        let config = base.clone().with_activation(activation);
        let mut trainer = Trainer::new(&config)?;
        let history = trainer.fit(&xs, &ys, config.epochs)?;

        let initial = history.initial().unwrap_or(f64::NAN);
        let last = history.last().unwrap_or(f64::NAN);
        let smoothed = history
            .moving_average(MOVING_AVERAGE_WINDOW)
            .last()
            .copied()
            .unwrap_or(last);
        println!(
            "{:<10} {:>12.6} {:>12.6} {:>12.6}",
            activation.name(),
            initial,
            last,
            smoothed
        );
    }
    Ok(())
}
