//! # Roulette Wheel Selection
//!
//! Fitness-proportionate selection: each individual is chosen with probability
//! equal to its share of the total fitness. This is the engine's default
//! strategy.

use crate::error::{MemeticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

/// A selection strategy that selects individuals with probability proportional
/// to their fitness.
///
/// All fitness values must be non-negative; a negative value breaks the
/// cumulative-sum invariant and is reported as a precondition failure. If you
/// have negative fitness values, use [`crate::selection::TournamentSelection`]
/// or rescale your fitness function.
///
/// # Examples
///
/// ```
/// use memetic::rng::RandomNumberGenerator;
/// use memetic::selection::{RouletteSelection, SelectionStrategy};
///
/// let fitness = vec![1.0, 2.0, 3.0, 4.0];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selection = RouletteSelection::new();
/// let index = selection.select(&fitness, &mut rng).unwrap();
/// assert!(index < fitness.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteSelection;

impl RouletteSelection {
    /// Creates a new roulette wheel selection strategy.
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for RouletteSelection {
    fn select(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if fitness.is_empty() {
            return Err(MemeticError::EmptyPopulation);
        }

        if fitness.iter().any(|&f| f < 0.0) {
            return Err(MemeticError::FitnessCalculation(
                "roulette wheel selection requires non-negative fitness values".to_string(),
            ));
        }

        let total: f64 = fitness.iter().sum();
        if total <= 0.0 {
            return Err(MemeticError::Selection(
                "roulette wheel selection requires at least one individual with non-zero fitness"
                    .to_string(),
            ));
        }

        let r = rng.uniform(0.0, total);

        let mut running = 0.0;
        for (i, &f) in fitness.iter().enumerate() {
            running += f;
            if running >= r {
                return Ok(i);
            }
        }

        // Floating rounding can leave the running sum just short of the total;
        // the last index is the correct degenerate answer.
        Ok(fitness.len() - 1)
    }
}
