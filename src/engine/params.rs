//! # GaParams
//!
//! Configuration for one generation step: population size, reproduction
//! rates, and the selection strategy.
//!
//! The crossover and mutation rates partition the unit interval; the
//! remainder `1 - crossover_rate - mutation_rate` is the probability of
//! carrying a selected parent over unchanged. Rates whose sum exceeds 1 are a
//! configuration error and are rejected before any breeding work starts.
//!
//! ## Example
//!
//! ```rust
//! use memetic::engine::GaParams;
//! use memetic::selection::TournamentSelection;
//!
//! let params = GaParams::builder()
//!     .population_size(64)
//!     .crossover_rate(0.8)
//!     .mutation_rate(0.02)
//!     .selection(TournamentSelection::new(3).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.population_size(), 64);
//! ```

use std::sync::Arc;

use crate::error::{MemeticError, Result};
use crate::selection::{RouletteSelection, SelectionStrategy};

/// Configuration options for a generation step of the genetic engine.
#[derive(Debug, Clone)]
pub struct GaParams {
    population_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    selection: Arc<dyn SelectionStrategy>,
}

impl GaParams {
    /// Creates parameters with the given rates and the default roulette
    /// selection strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters violate the rate invariant; see
    /// [`GaParams::validate`].
    pub fn new(population_size: usize, crossover_rate: f64, mutation_rate: f64) -> Result<Self> {
        let params = Self {
            population_size,
            crossover_rate,
            mutation_rate,
            selection: Arc::new(RouletteSelection::new()),
        };
        params.validate()?;
        Ok(params)
    }

    /// Returns a builder for constructing a `GaParams` instance.
    pub fn builder() -> GaParamsBuilder {
        GaParamsBuilder::default()
    }

    /// The number of slots to fill in the next generation.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// The probability that a slot is filled by crossover of two parents.
    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    /// The probability that a slot is filled by mutating one parent.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// The selection strategy used to draw parents.
    pub fn selection(&self) -> &Arc<dyn SelectionStrategy> {
        &self.selection
    }

    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if:
    /// - `population_size` is 0
    /// - either rate lies outside `[0, 1]`
    /// - `crossover_rate + mutation_rate` exceeds 1
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(MemeticError::Configuration(
                "population size cannot be zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(MemeticError::Configuration(format!(
                "crossover rate ({}) must lie in [0, 1]",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(MemeticError::Configuration(format!(
                "mutation rate ({}) must lie in [0, 1]",
                self.mutation_rate
            )));
        }
        if self.crossover_rate + self.mutation_rate > 1.0 {
            return Err(MemeticError::Configuration(format!(
                "crossover rate ({}) + mutation rate ({}) exceeds 1.0",
                self.crossover_rate, self.mutation_rate
            )));
        }
        Ok(())
    }
}

/// Builder for [`GaParams`].
///
/// Provides a fluent interface with validated construction.
#[derive(Debug, Clone, Default)]
pub struct GaParamsBuilder {
    population_size: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    selection: Option<Arc<dyn SelectionStrategy>>,
}

impl GaParamsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the crossover rate.
    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the selection strategy.
    pub fn selection<S: SelectionStrategy + 'static>(mut self, strategy: S) -> Self {
        self.selection = Some(Arc::new(strategy));
        self
    }

    /// Builds and validates the `GaParams` instance.
    ///
    /// Defaults: population size 20, crossover rate 0.5, mutation rate 0.1,
    /// roulette selection.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the resulting parameters violate
    /// the rate invariant.
    pub fn build(self) -> Result<GaParams> {
        let params = GaParams {
            population_size: self.population_size.unwrap_or(20),
            crossover_rate: self.crossover_rate.unwrap_or(0.5),
            mutation_rate: self.mutation_rate.unwrap_or(0.1),
            selection: self
                .selection
                .unwrap_or_else(|| Arc::new(RouletteSelection::new())),
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GaParams::builder().build().unwrap();
        assert_eq!(params.population_size(), 20);
        assert!((params.crossover_rate() - 0.5).abs() < f64::EPSILON);
        assert!((params.mutation_rate() - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rate_sum_above_one_is_rejected() {
        let result = GaParams::new(10, 0.9, 0.2);
        assert!(matches!(result, Err(MemeticError::Configuration(_))));

        let result = GaParams::builder()
            .crossover_rate(0.9)
            .mutation_rate(0.2)
            .build();
        assert!(matches!(result, Err(MemeticError::Configuration(_))));
    }

    #[test]
    fn test_rate_sum_of_exactly_one_is_accepted() {
        let params = GaParams::new(10, 0.8, 0.2).unwrap();
        assert!((params.crossover_rate() + params.mutation_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_population_size_is_rejected() {
        let result = GaParams::builder().population_size(0).build();
        assert!(matches!(result, Err(MemeticError::Configuration(_))));
    }

    #[test]
    fn test_out_of_range_rates_are_rejected() {
        assert!(GaParams::new(10, -0.1, 0.2).is_err());
        assert!(GaParams::new(10, 0.5, 1.1).is_err());
    }

    #[test]
    fn test_custom_selection_strategy() {
        let params = GaParams::builder()
            .selection(crate::selection::TournamentSelection::new(3).unwrap())
            .build()
            .unwrap();
        let debug = format!("{:?}", params.selection());
        assert!(debug.contains("TournamentSelection"));
    }
}
