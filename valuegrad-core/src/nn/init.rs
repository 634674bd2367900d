use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::types::{scalar_from_f64, Scalar};
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// How freshly created parameters are filled.
///
/// Sampling always goes through a caller-provided random number generator so
/// that runs can be reproduced with a seeded `StdRng`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    Constant(f64),
}

impl Default for Init {
    /// Uniform over `[-1, 1)`.
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks that the distribution can be sampled.
    pub fn validate(&self) -> Result<(), ValueGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() || low >= high {
                    return Err(ValueGradError::InvalidHyperparameter {
                        name: "uniform range".to_string(),
                        value: high - low,
                        reason: format!("low ({}) must be finite and smaller than high ({})", low, high),
                    });
                }
                Ok(())
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() {
                    return Err(ValueGradError::InvalidHyperparameter {
                        name: "mean".to_string(),
                        value: mean,
                        reason: "must be finite".to_string(),
                    });
                }
                Normal::new(mean, std)
                    .map(|_| ())
                    .map_err(|e| ValueGradError::InvalidHyperparameter {
                        name: "std".to_string(),
                        value: std,
                        reason: e.to_string(),
                    })
            }
            Init::Constant(value) => {
                if !value.is_finite() {
                    return Err(ValueGradError::InvalidHyperparameter {
                        name: "constant".to_string(),
                        value,
                        reason: "must be finite".to_string(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Draws `count` values from the distribution.
    pub fn sample<T, R>(&self, count: usize, rng: &mut R) -> Result<Vec<T>, ValueGradError>
    where
        T: Scalar,
        R: Rng + ?Sized,
    {
        self.validate()?;
        let raw: Vec<f64> = match *self {
            Init::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..count).map(|_| dist.sample(&mut *rng)).collect()
            }
            Init::Normal { mean, std } => {
                let dist = Normal::new(mean, std).map_err(|e| ValueGradError::InvalidHyperparameter {
                    name: "std".to_string(),
                    value: std,
                    reason: e.to_string(),
                })?;
                (0..count).map(|_| dist.sample(&mut *rng)).collect()
            }
            Init::Constant(value) => vec![value; count],
        };
        raw.into_iter()
            .map(|value| scalar_from_f64(value, "initial value"))
            .collect()
    }

    /// Creates `count` parameter leaves in `graph`, filled from the distribution.
    pub fn create_parameters<T, R>(
        &self,
        graph: &mut Graph<T>,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<NodeId>, ValueGradError>
    where
        T: Scalar,
        R: Rng + ?Sized,
    {
        let values: Vec<T> = self.sample(count, rng)?;
        Ok(values.into_iter().map(|value| graph.leaf(value)).collect())
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
