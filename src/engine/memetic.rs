//! # MemeticEngine
//!
//! Memetic search interleaves the global generational step with per-individual
//! local refinement. The `MemeticEngine` composes a [`GeneticEngine`] with a
//! caller-triggered [`MemeticEngine::optimize`] pass: the caller realizes the
//! memetic loop by alternating `next_generation()` (global search) and
//! `optimize()` (local refinement). The refinement pass never runs implicitly
//! inside the generation step.

use rayon::prelude::*;
use tracing::debug;

use crate::candidate::MemeticCandidate;
use crate::engine::genetic::GeneticEngine;
use crate::engine::params::GaParams;
use crate::error::Result;

/// A genetic engine extended with a per-individual local-refinement pass.
///
/// ## Example
///
/// ```rust
/// use memetic::candidate::{Candidate, MemeticCandidate};
/// use memetic::engine::{GaParams, MemeticEngine};
/// use memetic::rng::RandomNumberGenerator;
///
/// #[derive(Clone, Debug, Default)]
/// struct Point {
///     x: f64,
/// }
///
/// impl Candidate for Point {
///     fn evaluate(&self) -> f64 {
///         1.0 / (1.0 + (self.x - 3.0).powi(2))
///     }
///     fn crossover(&self, other: &Self) -> Self {
///         Point { x: (self.x + other.x) / 2.0 }
///     }
///     fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
///         Point { x: self.x + rng.uniform(-0.5, 0.5) }
///     }
/// }
///
/// impl MemeticCandidate for Point {
///     fn optimize(&mut self) -> f64 {
///         // A closed-form local step for illustration; real candidates
///         // typically run a BoundedSolver here.
///         self.x = (self.x + 3.0) / 2.0;
///         self.evaluate()
///     }
/// }
///
/// fn main() -> memetic::Result<()> {
///     let mut engine: MemeticEngine<Point> = MemeticEngine::with_seed(42);
///     engine.initialize(16)?;
///     let params = GaParams::builder().population_size(16).build()?;
///
///     for _ in 0..10 {
///         engine.next_generation(&params)?;
///         engine.optimize()?;
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MemeticEngine<G>
where
    G: MemeticCandidate,
{
    engine: GeneticEngine<G>,
}

impl<G> MemeticEngine<G>
where
    G: MemeticCandidate,
{
    /// Creates an engine seeded from system entropy.
    pub fn new() -> Self {
        Self {
            engine: GeneticEngine::new(),
        }
    }

    /// Creates an engine with a fixed seed; see [`GeneticEngine::with_seed`].
    pub fn with_seed(seed: u64) -> Self {
        Self {
            engine: GeneticEngine::with_seed(seed),
        }
    }

    /// Wraps an existing genetic engine.
    pub fn from_engine(engine: GeneticEngine<G>) -> Self {
        Self { engine }
    }

    /// Sets the minimum population size for parallel work.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.engine.set_parallel_threshold(threshold);
    }

    /// Applies each candidate's local-optimization capability in place, then
    /// recomputes the fitness cache and returns the new average fitness.
    ///
    /// Candidates refine independently; the pass runs on the rayon pool when
    /// the population size reaches the parallel threshold.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if the engine was never initialized, or a
    /// `FitnessCalculation` error if a refined candidate evaluates to a
    /// non-finite score.
    pub fn optimize(&mut self) -> Result<f64> {
        if self.engine.is_empty() {
            return Err(crate::error::MemeticError::EmptyPopulation);
        }

        let threshold = self.engine.parallel_threshold();
        let population = self.engine.population_mut();
        if population.len() >= threshold {
            population.par_iter_mut().for_each(|candidate| {
                candidate.optimize();
            });
        } else {
            for candidate in population.iter_mut() {
                candidate.optimize();
            }
        }

        self.engine.mark_dirty();
        let average = self.engine.average_fitness()?;
        debug!(average_fitness = average, "applied local refinement pass");
        Ok(average)
    }

    /// See [`GeneticEngine::initialize`].
    pub fn initialize(&mut self, n: usize) -> Result<()>
    where
        G: Default,
    {
        self.engine.initialize(n)
    }

    /// See [`GeneticEngine::initialize_with`].
    pub fn initialize_with<F>(&mut self, n: usize, f: F) -> Result<()>
    where
        F: FnMut(usize) -> G,
    {
        self.engine.initialize_with(n, f)
    }

    /// See [`GeneticEngine::next_generation`].
    pub fn next_generation(&mut self, params: &GaParams) -> Result<f64> {
        self.engine.next_generation(params)
    }

    /// See [`GeneticEngine::best_candidate`].
    pub fn best_candidate(&mut self) -> Result<&G> {
        self.engine.best_candidate()
    }

    /// See [`GeneticEngine::average_fitness`].
    pub fn average_fitness(&mut self) -> Result<f64> {
        self.engine.average_fitness()
    }

    /// See [`GeneticEngine::candidates`].
    pub fn candidates(&self) -> &[G] {
        self.engine.candidates()
    }

    /// Returns a reference to the underlying genetic engine.
    pub fn engine(&self) -> &GeneticEngine<G> {
        &self.engine
    }

    /// Returns a mutable reference to the underlying genetic engine.
    pub fn engine_mut(&mut self) -> &mut GeneticEngine<G> {
        &mut self.engine
    }

    /// Consumes the memetic engine, returning the underlying genetic engine.
    pub fn into_inner(self) -> GeneticEngine<G> {
        self.engine
    }
}

impl<G> Default for MemeticEngine<G>
where
    G: MemeticCandidate,
{
    fn default() -> Self {
        Self::new()
    }
}
