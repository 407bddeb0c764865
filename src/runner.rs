//! Annealing execution loop.

use crate::config::AnnealConfig;
use crate::types::AnnealProblem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a simulated annealing run.
///
/// The engine's answer is [`best`](AnnealResult::best); the remaining
/// fields are run statistics.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult<S: Clone> {
    /// The lowest-cost state observed across all generated neighbors,
    /// including the initial state. An independent copy: the engine
    /// holds no alias to it after returning.
    pub best: S,

    /// Cost of the best state.
    pub best_cost: f64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals; non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes simulated annealing.
///
/// The loop cools a temperature geometrically from
/// `initial_temperature` toward `min_temperature`, evaluating
/// `swaps_per_temperature` neighbors per level and accepting each by the
/// Metropolis criterion: improving moves always, worsening moves with
/// probability `exp(-delta / temperature)`.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the annealing loop, building an RNG from `config.seed` (or
    /// from entropy when unseeded).
    ///
    /// `initial` is read, never mutated; the returned best state is an
    /// independent copy. The config is taken as-is: a
    /// `cooling_factor >= 1.0` never terminates (see
    /// [`AnnealConfig::validate`]). Panics raised by the problem's
    /// `cost`/`neighbor` propagate unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use annealer::{AnnealConfig, AnnealProblem, AnnealRunner};
    /// use rand::Rng;
    ///
    /// struct Quadratic;
    /// impl AnnealProblem for Quadratic {
    ///     type State = f64;
    ///     fn cost(&self, x: &f64) -> f64 { x * x }
    ///     fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
    ///         x + rng.random_range(-1.0..1.0)
    ///     }
    /// }
    ///
    /// let config = AnnealConfig::default().with_seed(42);
    /// let result = AnnealRunner::run(&Quadratic, &8.0, &config);
    /// assert!(result.best_cost <= 64.0);
    /// ```
    pub fn run<P: AnnealProblem>(
        problem: &P,
        initial: &P::State,
        config: &AnnealConfig,
    ) -> AnnealResult<P::State> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(problem, initial, config, &mut rng)
    }

    /// Runs the annealing loop with a caller-supplied randomness source.
    ///
    /// Useful for tests that need exact trajectory reproducibility or a
    /// non-default generator; `config.seed` is ignored here.
    pub fn run_with_rng<P: AnnealProblem, R: Rng>(
        problem: &P,
        initial: &P::State,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> AnnealResult<P::State> {
        let mut current = initial.clone();
        let mut current_cost = problem.cost(initial);
        let mut best = initial.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        // Cost history: sample every N iterations
        let history_interval = 100.max(config.swaps_per_temperature);
        let mut cost_history = vec![best_cost];

        while temperature > config.min_temperature {
            for _ in 0..config.swaps_per_temperature {
                let neighbor = problem.neighbor(&current, rng);
                let neighbor_cost = problem.cost(&neighbor);
                let delta = neighbor_cost - current_cost;

                // Best tracking covers every generated neighbor, accepted
                // or not, and stores a defensive copy: later perturbations
                // of the current state must not reach a recorded best.
                if neighbor_cost < best_cost {
                    best = neighbor.clone();
                    best_cost = neighbor_cost;
                }

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else if temperature > 0.0 {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                } else {
                    false
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;
                }

                total_iterations += 1;

                if total_iterations.is_multiple_of(history_interval) {
                    cost_history.push(best_cost);
                }
            }

            temperature *= config.cooling_factor;
        }

        // Final history entry
        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        AnnealResult {
            best,
            best_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        }
    }
}
