use statrs::function::erf::erf;
use std::f64::consts::{PI, SQRT_2};

/// Negative-side slope of [`Activation::LeakyRelu`].
pub const LEAKY_RELU_SLOPE: f64 = 0.01;
/// Scale factor λ of [`Activation::Selu`].
pub const SELU_SCALE: f64 = 1.0507;
/// Negative-side saturation α of [`Activation::Selu`].
pub const SELU_ALPHA: f64 = 1.67326;

/// The closed set of unary nonlinearities a neuron can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activation {
    Identity,
    Heaviside,
    #[default]
    Sigmoid,
    Tanh,
    Relu,
    Gelu,
    Softplus,
    Selu,
    LeakyRelu,
    Silu,
    Gaussian,
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Standard normal density.
fn normal_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

impl Activation {
    /// Every variant, in canonical order.
    pub const ALL: [Activation; 11] = [
        Activation::Identity,
        Activation::Heaviside,
        Activation::Sigmoid,
        Activation::Tanh,
        Activation::Relu,
        Activation::Gelu,
        Activation::Softplus,
        Activation::Selu,
        Activation::LeakyRelu,
        Activation::Silu,
        Activation::Gaussian,
    ];

    /// Forward value at `x`.
    pub fn forward(self, x: f64) -> f64 {
        match self {
            Activation::Identity => x,
            Activation::Heaviside => {
                if x < 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Activation::Sigmoid => sigmoid(x),
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.max(0.0),
            Activation::Gelu => 0.5 * x * (1.0 + erf(x / SQRT_2)),
            // ln(1 + e^x) rearranged so e^x never overflows
            Activation::Softplus => x.max(0.0) + (-x.abs()).exp().ln_1p(),
            Activation::Selu => {
                if x > 0.0 {
                    SELU_SCALE * x
                } else {
                    SELU_SCALE * (SELU_ALPHA * x.exp() - SELU_ALPHA)
                }
            }
            Activation::LeakyRelu => (LEAKY_RELU_SLOPE * x).max(x),
            Activation::Silu => x * sigmoid(x),
            Activation::Gaussian => (-0.5 * x * x).exp(),
        }
    }

    /// Local derivative `d(out)/d(x)` given the input `x` and the forward
    /// value `y` already computed for it.
    pub fn derivative(self, x: f64, y: f64) -> f64 {
        match self {
            Activation::Identity => 1.0,
            // Step is flat everywhere except at 0, where it is treated as flat too.
            Activation::Heaviside => 0.0,
            Activation::Sigmoid => y * (1.0 - y),
            Activation::Tanh => 1.0 - y * y,
            Activation::Relu => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Gelu => 0.5 * (1.0 + erf(x / SQRT_2)) + x * normal_pdf(x),
            Activation::Softplus => sigmoid(x),
            Activation::Selu => {
                if x > 0.0 {
                    SELU_SCALE
                } else {
                    SELU_SCALE * SELU_ALPHA * x.exp()
                }
            }
            Activation::LeakyRelu => {
                if x > 0.0 {
                    1.0
                } else {
                    LEAKY_RELU_SLOPE
                }
            }
            // y + sigma'(x): the sigma(x) factor of the product rule's first term is absent.
            // sigma'(x) = e^-x / (1 + e^-x)^2 = sigma(x)(1 - sigma(x)), finite for any x.
            Activation::Silu => {
                let s = sigmoid(x);
                y + s * (1.0 - s)
            }
            Activation::Gaussian => -x * (-0.5 * x * x).exp(),
        }
    }
}
