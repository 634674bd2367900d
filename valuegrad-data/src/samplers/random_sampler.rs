// valuegrad-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};

/// A sampler that randomly samples indices from a dataset.
///
/// Without a seed every epoch draws from entropy. With a seed, epoch `k` uses
/// the seed `seed + k`, so a run is reproducible while epochs still differ.
#[derive(Debug)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
    epoch: AtomicU64,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
            epoch: AtomicU64::new(0),
        }
    }

    /// Makes the sequence of epochs reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn next_rng(&self) -> StdRng {
        let epoch = self.epoch.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(epoch)),
            None => StdRng::from_entropy(),
        }
    }

    /// Whether more samples than the dataset holds were requested without
    /// replacement. Such requests are clamped to the dataset size.
    fn is_oversampling(&self, dataset_len: usize) -> bool {
        !self.replacement && self.num_samples.is_some_and(|n| n > dataset_len)
    }
}

impl Clone for RandomSampler {
    fn clone(&self) -> Self {
        RandomSampler {
            replacement: self.replacement,
            num_samples: self.num_samples,
            seed: self.seed,
            epoch: AtomicU64::new(self.epoch.load(Ordering::Relaxed)),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }
        let mut rng = self.next_rng();
        let count = self.len(dataset_len);
        if self.is_oversampling(dataset_len) {
            log::warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement, drawing {} samples",
                self.num_samples.unwrap_or(dataset_len),
                dataset_len,
                count
            );
        }

        if self.replacement {
            let indices: Vec<usize> = (0..count).map(|_| rng.gen_range(0..dataset_len)).collect();
            Box::new(indices.into_iter())
        } else {
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(&mut rng);
            indices.truncate(count);
            Box::new(indices.into_iter())
        }
    }

    fn len(&self, dataset_len: usize) -> usize {
        if dataset_len == 0 {
            return 0;
        }
        if self.is_oversampling(dataset_len) {
            return dataset_len;
        }
        self.num_samples.unwrap_or(dataset_len)
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
