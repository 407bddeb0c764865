//! Domain-agnostic simulated annealing engine.
//!
//! A single-solution trajectory optimizer inspired by the physical
//! annealing process: it accepts worsening moves with a probability that
//! decays with temperature, letting the search escape local optima before
//! cooling toward greedy descent. The engine contains no domain concepts;
//! the state type, its cost, and its neighborhood move are all supplied
//! by the caller through the [`AnnealProblem`] trait, and the engine only
//! copies states, scores them, and asks for neighbors.
//!
//! - [`AnnealProblem`] — the capability seam: state, cost, neighbor.
//! - [`AnnealConfig`] — the temperature schedule: initial and minimum
//!   temperature, geometric cooling factor, swaps per temperature level.
//! - [`AnnealRunner`] — the loop: Metropolis acceptance plus best-state
//!   tracking over every generated neighbor.
//!
//! Execution is single-threaded and synchronous; the run length is a pure
//! function of the schedule parameters, never of the state's content.
//!
//! # Example
//!
//! ```
//! use annealer::{AnnealConfig, AnnealProblem, AnnealRunner};
//! use rand::Rng;
//!
//! /// Sort a permutation by annealing over random swaps.
//! struct PermSort;
//!
//! impl AnnealProblem for PermSort {
//!     type State = Vec<usize>;
//!
//!     fn cost(&self, perm: &Vec<usize>) -> f64 {
//!         perm.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64
//!     }
//!
//!     fn neighbor<R: Rng>(&self, perm: &Vec<usize>, rng: &mut R) -> Vec<usize> {
//!         let mut next = perm.clone();
//!         if next.len() >= 2 {
//!             let i = rng.random_range(0..next.len());
//!             let j = rng.random_range(0..next.len());
//!             next.swap(i, j);
//!         }
//!         next
//!     }
//! }
//!
//! let initial = vec![4, 2, 0, 3, 1];
//! let config = AnnealConfig::default()
//!     .with_initial_temperature(5.0)
//!     .with_swaps_per_temperature(20)
//!     .with_seed(42);
//! let result = AnnealRunner::run(&PermSort, &initial, &config);
//! assert!(result.best_cost <= PermSort.cost(&initial));
//! ```
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
pub use types::AnnealProblem;
