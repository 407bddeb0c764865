//! Annealing schedule configuration.

/// Configuration for a simulated annealing run.
///
/// All fields default independently; a `Default` config is a short,
/// gentle schedule suited to small combinatorial states.
///
/// The engine performs no runtime validation of these values (see
/// [`validate`](AnnealConfig::validate) for an opt-in check). In
/// particular, a `cooling_factor >= 1.0` makes the outer loop
/// non-terminating, and a `cooling_factor <= 0.0` collapses the schedule
/// after a single temperature step; keeping the factor in `(0, 1)` is the
/// caller's responsibility.
///
/// # Examples
///
/// ```
/// use annealer::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(10.0)
///     .with_min_temperature(0.001)
///     .with_cooling_factor(0.95)
///     .with_swaps_per_temperature(50);
/// assert_eq!(config.swaps_per_temperature, 50);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Multiplicative decay applied to the temperature after each batch
    /// of swaps. Must lie in (0, 1) for the run to terminate sensibly.
    pub cooling_factor: f64,

    /// The run stops once the temperature falls to or below this value.
    pub min_temperature: f64,

    /// Number of neighbor trials evaluated at each temperature level.
    pub swaps_per_temperature: usize,

    /// Random seed for reproducibility. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            cooling_factor: 0.99,
            min_temperature: 1e-5,
            swaps_per_temperature: 10,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_swaps_per_temperature(mut self, n: usize) -> Self {
        self.swaps_per_temperature = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Opt-in: [`AnnealRunner::run`](crate::AnnealRunner::run) does not
    /// call this, so callers constructing schedules from untrusted input
    /// should invoke it themselves.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            ));
        }
        Ok(())
    }
}
