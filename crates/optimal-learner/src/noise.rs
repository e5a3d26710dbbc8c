//! Gaussian evaluation noise.

use rand::Rng;

/// Zero-mean Gaussian noise sampled with the Box-Muller transform.
///
/// # Example
///
/// ```
/// use optimal_learner::noise::GaussianNoise;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let silent = GaussianNoise::new(0.0);
/// assert_eq!(silent.sample(&mut rng), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianNoise {
    std_dev: f64,
}

impl GaussianNoise {
    pub fn new(std_dev: f64) -> Self {
        Self { std_dev }
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// True if sampling always yields zero.
    pub fn is_silent(&self) -> bool {
        self.std_dev == 0.0
    }

    /// Draws one sample. Silent noise consumes no randomness.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.is_silent() {
            return 0.0;
        }
        // u1 in (0, 1] keeps the logarithm finite
        let u1 = 1.0 - rng.random::<f64>();
        let u2 = rng.random::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        self.std_dev * z
    }
}
