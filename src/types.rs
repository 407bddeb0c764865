//! Core trait for simulated annealing problems.

use rand::Rng;

/// Defines a simulated annealing problem.
///
/// The user supplies the state representation, neighbor generation, and
/// cost evaluation. The engine handles temperature management, the
/// Metropolis acceptance criterion, cooling, and best-state tracking.
///
/// The `Clone` bound on [`State`](AnnealProblem::State) is the engine's
/// copy capability: a clone must share no mutable structure with its
/// source, since the engine relies on cloning to keep its current and
/// best states independent of each other and of the caller's initial
/// state.
///
/// # Minimization
///
/// The engine minimizes the cost function. For maximization, negate the
/// cost. Costs may be negative.
///
/// # Examples
///
/// ```
/// use annealer::AnnealProblem;
/// use rand::Rng;
///
/// /// Balance group sums; swapping two items across groups is the
/// /// local move.
/// struct GroupSwap;
///
/// impl AnnealProblem for GroupSwap {
///     type State = Vec<Vec<u32>>;
///
///     fn cost(&self, groups: &Vec<Vec<u32>>) -> f64 {
///         let sums: Vec<f64> = groups
///             .iter()
///             .map(|g| g.iter().sum::<u32>() as f64)
///             .collect();
///         let mean = sums.iter().sum::<f64>() / sums.len().max(1) as f64;
///         sums.iter().map(|s| (s - mean).powi(2)).sum()
///     }
///
///     fn neighbor<R: Rng>(&self, groups: &Vec<Vec<u32>>, rng: &mut R) -> Vec<Vec<u32>> {
///         let mut next = groups.clone();
///         if next.len() >= 2 {
///             let a = rng.random_range(0..next.len());
///             let b = rng.random_range(0..next.len());
///             if a != b && !next[a].is_empty() && !next[b].is_empty() {
///                 let i = rng.random_range(0..next[a].len());
///                 let j = rng.random_range(0..next[b].len());
///                 let item = next[a][i];
///                 next[a][i] = next[b][j];
///                 next[b][j] = item;
///             }
///         }
///         next
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick, Gelatt & Vecchi (1983), Cerny (1985)
pub trait AnnealProblem: Send + Sync {
    /// The state representation type.
    type State: Clone + Send;

    /// Computes the cost of a state. Lower is better.
    ///
    /// Must be a deterministic, pure function of the state.
    fn cost(&self, state: &Self::State) -> f64;

    /// Generates a neighbor of the current state.
    ///
    /// A neighbor differs from its source by exactly one randomized local
    /// perturbation (e.g., one pairwise swap); the source state itself
    /// must be left unmodified. The neighborhood must be connected (any
    /// state reachable from any other via a sequence of moves) for the
    /// stochastic guarantees to hold.
    ///
    /// If the state is degenerate — no two distinct perturbation points
    /// exist (empty or single-element structures) — return an unchanged
    /// copy. The engine still terminates: its iteration count depends
    /// only on the temperature schedule, never on the state's content.
    fn neighbor<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Self::State;
}
