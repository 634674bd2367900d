use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::Module;
use crate::optim::optimizer_trait::Optimizer;
use crate::types::{scalar_from_f64, Scalar};
use std::collections::{HashMap, HashSet};

/// Hyperparameters of [`Sgd`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdConfig {
    /// Learning rate (default: 1e-3).
    pub lr: f64,
    /// Momentum factor (default: 0.0).
    pub momentum: f64,
    /// Weight decay (L2 penalty) factor (default: 0.0).
    pub weight_decay: f64,
    /// Enables Nesterov momentum (default: false).
    pub nesterov: bool,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            lr: 1e-3,
            momentum: 0.0,
            weight_decay: 0.0,
            nesterov: false,
        }
    }
}

impl SgdConfig {
    /// Plain SGD with the given learning rate.
    pub fn new(lr: f64) -> Self {
        SgdConfig {
            lr,
            ..Default::default()
        }
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn with_nesterov(mut self, nesterov: bool) -> Self {
        self.nesterov = nesterov;
        self
    }

    /// Checks every hyperparameter.
    pub fn validate(&self) -> Result<(), ValueGradError> {
        check_non_negative("lr", self.lr)?;
        check_non_negative("momentum", self.momentum)?;
        check_non_negative("weight_decay", self.weight_decay)?;
        if self.nesterov && self.momentum == 0.0 {
            return Err(ValueGradError::InvalidHyperparameter {
                name: "momentum".to_string(),
                value: self.momentum,
                reason: "Nesterov momentum requires a positive momentum".to_string(),
            });
        }
        Ok(())
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), ValueGradError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValueGradError::InvalidHyperparameter {
            name: name.to_string(),
            value,
            reason: "must be finite and non-negative".to_string(),
        });
    }
    Ok(())
}

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Without momentum or weight decay each step is `value -= lr * grad`.
/// Supports momentum, weight decay, and Nesterov momentum.
#[derive(Debug, Clone)]
pub struct Sgd<T: Scalar> {
    params: Vec<NodeId>,
    config: SgdConfig,
    momentum_buffers: HashMap<NodeId, T>,
    step_count: usize,
}

impl<T: Scalar> Sgd<T> {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Arguments
    ///
    /// * `params`: Parameter handles to optimize. Duplicates are kept once.
    /// * `config`: Hyperparameters, validated here.
    pub fn new(params: impl IntoIterator<Item = NodeId>, config: SgdConfig) -> Result<Self, ValueGradError> {
        config.validate()?;
        let mut seen = HashSet::new();
        let params: Vec<NodeId> = params.into_iter().filter(|p| seen.insert(*p)).collect();
        Ok(Sgd {
            params,
            config,
            momentum_buffers: HashMap::new(),
            step_count: 0,
        })
    }

    /// Optimizes every parameter of `module`.
    pub fn for_module<M: Module<T> + ?Sized>(module: &M, config: SgdConfig) -> Result<Self, ValueGradError> {
        Self::new(module.parameters(), config)
    }

    pub fn config(&self) -> &SgdConfig {
        &self.config
    }

    /// Number of completed steps.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Momentum buffer of a parameter, present once a momentum step has touched it.
    pub fn momentum_buffer(&self, param: NodeId) -> Option<T> {
        self.momentum_buffers.get(&param).copied()
    }
}

impl<T: Scalar> Optimizer<T> for Sgd<T> {
    fn step(&mut self, graph: &mut Graph<T>) -> Result<(), ValueGradError> {
        let lr: T = scalar_from_f64(self.config.lr, "lr")?;
        let momentum: T = scalar_from_f64(self.config.momentum, "momentum")?;
        let weight_decay: T = scalar_from_f64(self.config.weight_decay, "weight_decay")?;
        let use_momentum = self.config.momentum != 0.0;

        for &param in &self.params {
            let value = graph.value(param);
            let mut d_p = graph.grad(param);

            if self.config.weight_decay != 0.0 {
                d_p += weight_decay * value;
            }

            if use_momentum {
                // First step: the buffer starts as the gradient itself.
                let buffer = self
                    .momentum_buffers
                    .entry(param)
                    .and_modify(|buf| *buf = momentum * *buf + d_p)
                    .or_insert(d_p);
                d_p = if self.config.nesterov {
                    d_p + momentum * *buffer
                } else {
                    *buffer
                };
            }

            graph.set_value(param, value - lr * d_p);
        }

        self.step_count += 1;
        log::debug!(
            "SGD step {} updated {} parameters (lr={})",
            self.step_count,
            self.params.len(),
            self.config.lr
        );
        Ok(())
    }

    fn parameters(&self) -> &[NodeId] {
        &self.params
    }

    fn learning_rate(&self) -> f64 {
        self.config.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ValueGradError> {
        check_non_negative("lr", lr)?;
        self.config.lr = lr;
        Ok(())
    }
}
