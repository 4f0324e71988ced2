//! # memetic
//!
//! A generic evolutionary-optimization engine: population-based genetic/memetic
//! search combined with a gradient-based local-refinement solver.
//!
//! The caller supplies a candidate-solution type with evaluable fitness,
//! crossover, and mutation operators (the [`Candidate`] trait). The
//! [`GeneticEngine`] evolves a population of such candidates one generation per
//! call; the [`MemeticEngine`] adds a caller-triggered local-refinement pass
//! over every individual between generations. For candidates backed by real
//! vectors, the [`solver`] module provides a bounded gradient-descent optimizer
//! with finite-difference gradients and adaptive step control.
//!
//! ## Example
//!
//! ```rust
//! use memetic::candidate::Candidate;
//! use memetic::engine::{GaParams, GeneticEngine};
//! use memetic::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Point {
//!     x: f64,
//! }
//!
//! impl Candidate for Point {
//!     fn evaluate(&self) -> f64 {
//!         1.0 / (1.0 + (self.x - 3.0).powi(2))
//!     }
//!
//!     fn crossover(&self, other: &Self) -> Self {
//!         Point { x: (self.x + other.x) / 2.0 }
//!     }
//!
//!     fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
//!         Point { x: self.x + rng.uniform(-0.5, 0.5) }
//!     }
//! }
//!
//! fn main() -> memetic::Result<()> {
//!     let mut engine: GeneticEngine<Point> = GeneticEngine::with_seed(42);
//!     engine.initialize(32)?;
//!
//!     let params = GaParams::builder()
//!         .population_size(32)
//!         .crossover_rate(0.8)
//!         .mutation_rate(0.1)
//!         .build()?;
//!
//!     for _ in 0..50 {
//!         engine.next_generation(&params)?;
//!     }
//!
//!     let best = engine.best_candidate()?;
//!     assert!(best.evaluate() > 0.1);
//!     Ok(())
//! }
//! ```

pub mod candidate;
pub mod engine;
pub mod error;
pub mod rng;
pub mod selection;
pub mod solver;

// Re-export commonly used types for convenience
pub use candidate::{Candidate, MemeticCandidate};
pub use engine::{GaParams, GeneticEngine, MemeticEngine};
pub use error::{MemeticError, Result};
pub use selection::{RouletteSelection, SelectionStrategy, TournamentSelection};
pub use solver::{BoundedSolver, Bounds, CostFunction, GradientDescent, SolveResult};
