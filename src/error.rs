//! # Error Types
//!
//! This module defines the error types for the engine and the solver. The
//! taxonomy follows a fail-fast policy: configuration and precondition
//! violations are reported to the caller before any population or solver state
//! is mutated. A local optimizer exhausting its iteration budget without
//! meeting its convergence criterion is *not* an error; it is a normal terminal
//! state reported through [`crate::solver::SolveResult`].
//!
//! ## Examples
//!
//! ```rust
//! use memetic::error::{MemeticError, Result};
//!
//! fn check_rates(crossover: f64, mutation: f64) -> Result<()> {
//!     if crossover + mutation > 1.0 {
//!         return Err(MemeticError::Configuration(format!(
//!             "crossover rate ({}) + mutation rate ({}) exceeds 1.0",
//!             crossover, mutation
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_rates(0.9, 0.2).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic engine or the local solver.
#[derive(Error, Debug)]
pub enum MemeticError {
    /// Error that occurs when an invalid configuration is provided, e.g. a
    /// rate sum above 1.0, a zero population size, a bound index outside the
    /// solver dimension, or a point whose length does not match it.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is queried or advanced.
    #[error("Empty population error: cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a selection strategy cannot choose an index,
    /// e.g. roulette selection over an all-zero fitness sequence.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when a fitness or cost evaluation violates a
    /// precondition: non-finite scores, or negative fitness supplied to
    /// fitness-proportionate selection.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized `Result` type for engine and solver operations.
pub type Result<T> = std::result::Result<T, MemeticError>;
