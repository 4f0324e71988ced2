//! # Selection Strategies
//!
//! Selection strategies map a fitness sequence to the index of a chosen
//! individual. The engine draws parents through the configured strategy; the
//! default is fitness-proportionate (roulette) selection.

pub mod roulette;
pub mod tournament;

use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

pub use roulette::RouletteSelection;
pub use tournament::TournamentSelection;

/// Trait for selection strategies.
///
/// A strategy is any total function from a non-empty fitness sequence to an
/// index into that sequence. Implementations may impose additional
/// preconditions (roulette selection requires non-negative fitness) and must
/// report violations as errors rather than self-heal.
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects the index of one individual based on the fitness sequence.
    ///
    /// # Arguments
    ///
    /// * `fitness` - The fitness scores of the current population.
    /// * `rng` - The random number generator to draw from.
    ///
    /// # Errors
    ///
    /// Returns an error if `fitness` is empty or violates a precondition of
    /// the concrete strategy.
    fn select(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize>;
}
