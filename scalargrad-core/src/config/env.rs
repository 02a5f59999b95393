use super::TrainConfig;
use crate::error::ScalarGradError;
use crate::ops::activation::Activation;
use std::str::FromStr;

/// Prefix shared by every environment variable read by [`TrainConfig::from_env`].
pub const ENV_PREFIX: &str = "SCALARGRAD_";
pub const ENV_SEED: &str = "SEED";
pub const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub const ENV_EPOCHS: &str = "EPOCHS";
/// Comma-separated widths, e.g. `10,5,4,1`.
pub const ENV_LAYER_SIZES: &str = "LAYER_SIZES";
pub const ENV_ACTIVATION: &str = "ACTIVATION";
pub const ENV_LOG_EVERY: &str = "LOG_EVERY";

/// Full variable name for a suffix (`SEED` -> `SCALARGRAD_SEED`).
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

fn parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    suffix: &str,
) -> Result<Option<T>, ScalarGradError> {
    let key = env_key(suffix);
    let value = match lookup(&key) {
        Some(value) => value,
        None => return Ok(None),
    };
    match value.trim().parse() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ScalarGradError::ConfigParse { key, value }),
    }
}

fn parse_layer_sizes(key: String, value: String) -> Result<Vec<usize>, ScalarGradError> {
    let sizes: Result<Vec<usize>, _> = value
        .split(',')
        .map(|part| part.trim().parse::<usize>())
        .collect();
    match sizes {
        Ok(sizes) => Ok(sizes),
        Err(_) => Err(ScalarGradError::ConfigParse { key, value }),
    }
}

impl TrainConfig {
    /// Builds a config from `SCALARGRAD_*` environment variables, keeping the
    /// default for every unset variable, then validates it.
    ///
    /// # Errors
    /// [`ScalarGradError::ConfigParse`] if a set variable does not parse,
    /// [`ScalarGradError::InvalidConfig`] if the result fails [`TrainConfig::validate`].
    pub fn from_env() -> Result<TrainConfig, ScalarGradError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TrainConfig::from_env`] with a custom variable source.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<TrainConfig, ScalarGradError> {
        let mut config = TrainConfig::default();

        if let Some(seed) = parsed(&lookup, ENV_SEED)? {
            config.seed = seed;
        }
        if let Some(learning_rate) = parsed(&lookup, ENV_LEARNING_RATE)? {
            config.learning_rate = learning_rate;
        }
        if let Some(epochs) = parsed(&lookup, ENV_EPOCHS)? {
            config.epochs = epochs;
        }
        if let Some(log_every) = parsed(&lookup, ENV_LOG_EVERY)? {
            config.log_every = log_every;
        }
        let key = env_key(ENV_LAYER_SIZES);
        if let Some(value) = lookup(&key) {
            config.layer_sizes = parse_layer_sizes(key, value)?;
        }
        if let Some(name) = lookup(&env_key(ENV_ACTIVATION)) {
            config.activation = Activation::resolve(name.trim());
        }

        config.validate()?;
        Ok(config)
    }
}
