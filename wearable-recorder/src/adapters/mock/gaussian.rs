use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Functionality to add some Gaussian noise.
#[derive(Clone, Debug)]
pub struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    /// Creates new distribution from mean and stdev. Returns None if `stdev` is negative or not finite.
    pub(super) fn new(mean: f64, stdev: f64) -> Option<Self> {
        Normal::new(mean, stdev).ok().map(|normal| Self { normal })
    }

    /// Sample from distribution
    pub(super) fn draw_sample(&self, rng: &mut StdRng) -> f64 {
        self.normal.sample(rng)
    }

    // Adds noise to vector of samples
    pub(super) fn add_noise_vec(&self, rng: &mut StdRng, data: Vec<f64>) -> Vec<f64> {
        data.into_iter()
            .map(|d| d + self.draw_sample(rng))
            .collect()
    }
}
