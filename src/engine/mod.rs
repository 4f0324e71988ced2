//! # Evolutionary Engines
//!
//! The [`GeneticEngine`] owns a population of candidates and their cached
//! fitness values and advances one generation per call, reproducing slots via
//! crossover, mutation, or copy according to [`GaParams`]. The
//! [`MemeticEngine`] composes a genetic engine with a caller-triggered
//! local-refinement pass over every individual.

pub mod genetic;
pub mod memetic;
pub mod params;

pub use genetic::GeneticEngine;
pub use memetic::MemeticEngine;
pub use params::{GaParams, GaParamsBuilder};
