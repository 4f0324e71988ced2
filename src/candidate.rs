//! # Candidate Traits
//!
//! The [`Candidate`] trait is the capability contract between the engine and
//! the user-supplied solution representation: evaluable fitness plus crossover
//! and mutation operators. [`MemeticCandidate`] extends it with an in-place
//! local-optimization step for use with [`crate::engine::MemeticEngine`].
//!
//! ## Example
//!
//! ```rust
//! use memetic::candidate::Candidate;
//! use memetic::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug, Default)]
//! struct MyCandidate {
//!     value: f64,
//! }
//!
//! impl Candidate for MyCandidate {
//!     fn evaluate(&self) -> f64 {
//!         1.0 / (1.0 + self.value.powi(2))
//!     }
//!
//!     fn crossover(&self, other: &Self) -> Self {
//!         MyCandidate { value: (self.value + other.value) / 2.0 }
//!     }
//!
//!     fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
//!         MyCandidate { value: self.value + rng.uniform(-0.1, 0.1) }
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in the evolutionary engine.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `Send`,
/// and `Sync` so generations can be bred on a rayon pool.
pub trait Candidate: Clone + Debug + Send + Sync {
    /// Computes the fitness of this candidate. Higher is better.
    ///
    /// Must be pure and deterministic given the candidate state, and must
    /// return a finite value; the engine rejects NaN and infinite scores.
    /// Fitness-proportionate (roulette) selection additionally requires
    /// non-negative fitness across the population.
    fn evaluate(&self) -> f64;

    /// Combines this candidate with another, producing an offspring.
    fn crossover(&self, other: &Self) -> Self;

    /// Produces a perturbed copy of this candidate.
    ///
    /// The engine hands each reproduction slot its own derived RNG stream, so
    /// mutation stays deterministic under a fixed engine seed even when slots
    /// are bred in parallel.
    fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self;
}

/// Trait for candidates that can refine themselves toward a local optimum.
///
/// This is the capability the memetic refinement pass depends on. A typical
/// implementation runs a [`crate::solver::BoundedSolver`] over the candidate's
/// underlying real vector.
///
/// ## Example
///
/// ```rust
/// use memetic::candidate::{Candidate, MemeticCandidate};
/// use memetic::rng::RandomNumberGenerator;
/// use memetic::solver::{BoundedSolver, GradientDescent};
///
/// #[derive(Clone, Debug, Default)]
/// struct MyCandidate {
///     point: [f64; 2],
/// }
///
/// impl Candidate for MyCandidate {
///     fn evaluate(&self) -> f64 {
///         1.0 / (1.0 + self.point.iter().map(|v| v * v).sum::<f64>())
///     }
///
///     fn crossover(&self, other: &Self) -> Self {
///         MyCandidate {
///             point: [
///                 (self.point[0] + other.point[0]) / 2.0,
///                 (self.point[1] + other.point[1]) / 2.0,
///             ],
///         }
///     }
///
///     fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
///         let mut next = self.clone();
///         next.point[0] += rng.uniform(-0.1, 0.1);
///         next.point[1] += rng.uniform(-0.1, 0.1);
///         next
///     }
/// }
///
/// impl MemeticCandidate for MyCandidate {
///     fn optimize(&mut self) -> f64 {
///         let cost = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
///         let mut solver = BoundedSolver::new(cost, GradientDescent::new(), 2)
///             .with_max_iterations(20)
///             .unwrap();
///         if let Ok(result) = solver.solve(&mut self.point) {
///             let _ = result.cost;
///         }
///         self.evaluate()
///     }
/// }
/// ```
pub trait MemeticCandidate: Candidate {
    /// Refines this candidate in place toward a local optimum and returns its
    /// new fitness.
    ///
    /// Refinement runs independently per candidate and may execute on a rayon
    /// pool; any stateful solver must be owned by the candidate or constructed
    /// inside this call, never shared across candidates.
    fn optimize(&mut self) -> f64;
}
