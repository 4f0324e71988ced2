//! # Tournament Selection
//!
//! An alternate selection strategy: draw a fixed number of individuals
//! uniformly at random and return the fittest of them. Unlike roulette
//! selection it tolerates negative fitness values, since only the ordering
//! matters.

use crate::error::{MemeticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

/// A selection strategy that holds a tournament among uniformly drawn
/// individuals and selects the fittest.
///
/// Larger tournament sizes increase selection pressure; a size of 1 is
/// uniform random selection.
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new tournament selection strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size == 0 {
            return Err(MemeticError::Configuration(
                "tournament size must be greater than 0".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 2 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if fitness.is_empty() {
            return Err(MemeticError::EmptyPopulation);
        }

        let mut best = rng.index(fitness.len());
        for _ in 1..self.tournament_size {
            let contender = rng.index(fitness.len());
            if fitness[contender] > fitness[best] {
                best = contender;
            }
        }

        Ok(best)
    }
}
