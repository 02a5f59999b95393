use crate::error::ScalarGradError;
use crate::ops::activation::Activation;
use log::warn;
use std::fmt;
use std::str::FromStr;

impl Activation {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Activation::Identity => "identity",
            Activation::Heaviside => "heaviside",
            Activation::Sigmoid => "sigmoid",
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Gelu => "gelu",
            Activation::Softplus => "softplus",
            Activation::Selu => "selu",
            Activation::LeakyRelu => "leakyRelu",
            Activation::Silu => "silu",
            Activation::Gaussian => "gaussian",
        }
    }

    /// Lenient lookup used where a network is configured by name: anything
    /// unrecognised becomes [`Activation::Sigmoid`].
    pub fn resolve(name: &str) -> Activation {
        name.parse().unwrap_or_else(|err: ScalarGradError| {
            warn!("{}; falling back to sigmoid", err);
            Activation::Sigmoid
        })
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activation::ALL
            .into_iter()
            .find(|activation| activation.name() == s)
            .ok_or_else(|| ScalarGradError::UnknownActivation(s.to_string()))
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
