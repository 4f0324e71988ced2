//! # GeneticEngine
//!
//! The generational evolutionary loop. The engine owns the population and an
//! index-aligned fitness cache; one call to [`GeneticEngine::next_generation`]
//! replaces the population wholesale with offspring produced by crossover,
//! mutation, or copy, according to the configured rates and selection
//! strategy.
//!
//! Every reproduction slot is an independent unit of work: its decisions are a
//! pure function of the current population, the fitness cache, and an RNG
//! stream derived from the engine seed, the generation counter, and the slot
//! index. Slots are bred on a rayon pool once the population size reaches the
//! parallel threshold, and a fixed seed reproduces bit-identical populations
//! either way.

use rayon::prelude::*;
use tracing::debug;

use crate::candidate::Candidate;
use crate::engine::params::GaParams;
use crate::error::{MemeticError, Result};
use crate::rng::RandomNumberGenerator;

/// Minimum population size for dispatching work to the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

// Odd multiplier spreading (generation, slot) pairs over distinct streams.
const STREAM_STRIDE: u64 = 0x51_7C_C1_B7_27_22_0A_95;

/// A population-based genetic optimizer over a user-supplied candidate type.
///
/// The engine performs no scheduling of its own: one call to
/// [`GeneticEngine::next_generation`] advances exactly one generation, and the
/// caller drives the outer loop.
#[derive(Debug, Clone)]
pub struct GeneticEngine<G>
where
    G: Candidate,
{
    population: Vec<G>,
    fitness: Vec<f64>,
    /// Set on every population mutation, cleared when the cache is recomputed.
    dirty: bool,
    seed: u64,
    generation: u64,
    parallel_threshold: usize,
}

impl<G> GeneticEngine<G>
where
    G: Candidate,
{
    /// Creates an engine seeded from system entropy.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Creates an engine with a fixed seed.
    ///
    /// Given the same seed, the same initial population, and the same
    /// parameters, the engine reproduces bit-identical population sequences
    /// across runs, sequential or parallel.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            population: Vec::new(),
            fitness: Vec::new(),
            dirty: false,
            seed,
            generation: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the minimum population size for parallel breeding and evaluation.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Fills the population with `n` default-constructed candidates and
    /// evaluates their fitness.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `n` is 0 (no valid best or average
    /// fitness can be defined over an empty population), or a
    /// `FitnessCalculation` error if any candidate evaluates to a non-finite
    /// score.
    pub fn initialize(&mut self, n: usize) -> Result<()>
    where
        G: Default,
    {
        self.initialize_with(n, |_| G::default())
    }

    /// Fills the population with `n` candidates produced by `f(slot_index)`
    /// and evaluates their fitness.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`GeneticEngine::initialize`].
    pub fn initialize_with<F>(&mut self, n: usize, f: F) -> Result<()>
    where
        F: FnMut(usize) -> G,
    {
        if n == 0 {
            return Err(MemeticError::Configuration(
                "population size cannot be zero".to_string(),
            ));
        }

        self.population = (0..n).map(f).collect();
        self.generation = 0;
        self.dirty = true;
        self.refresh_fitness()?;
        Ok(())
    }

    /// Advances the engine by one generation and returns the new average
    /// fitness.
    ///
    /// For each of `params.population_size()` slots, a uniform draw
    /// `u ∈ [0, 1)` picks the reproduction operator:
    /// - `u ≤ crossover_rate`: two parents drawn independently through the
    ///   selection strategy, child = `parent1.crossover(parent2)`;
    /// - `u ≤ crossover_rate + mutation_rate`: one parent, child =
    ///   `parent.mutate(rng)`;
    /// - otherwise: a direct copy of a selected parent.
    ///
    /// The population is replaced wholesale and the fitness cache recomputed.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error for invalid parameters (fail fast, the
    /// population is left untouched), `EmptyPopulation` if the engine was
    /// never initialized, or any error raised by the selection strategy or a
    /// non-finite fitness evaluation.
    pub fn next_generation(&mut self, params: &GaParams) -> Result<f64> {
        params.validate()?;
        if self.population.is_empty() {
            return Err(MemeticError::EmptyPopulation);
        }
        self.refresh_fitness()?;

        let population = &self.population;
        let fitness = &self.fitness;
        let selection = params.selection();
        let seed = self.seed;
        let generation = self.generation;
        let crossover_rate = params.crossover_rate();
        let mutation_rate = params.mutation_rate();

        let breed_slot = |slot: usize| -> Result<G> {
            let stream = generation.wrapping_mul(STREAM_STRIDE).wrapping_add(slot as u64);
            let mut rng = RandomNumberGenerator::derive(seed, stream);
            let u = rng.probability();

            if u <= crossover_rate {
                let first = selection.select(fitness, &mut rng)?;
                let second = selection.select(fitness, &mut rng)?;
                Ok(population[first].crossover(&population[second]))
            } else if u <= crossover_rate + mutation_rate {
                let parent = selection.select(fitness, &mut rng)?;
                Ok(population[parent].mutate(&mut rng))
            } else {
                let parent = selection.select(fitness, &mut rng)?;
                Ok(population[parent].clone())
            }
        };

        let size = params.population_size();
        let next: Result<Vec<G>> = if size >= self.parallel_threshold {
            (0..size).into_par_iter().map(breed_slot).collect()
        } else {
            (0..size).map(breed_slot).collect()
        };

        self.population = next?;
        self.generation += 1;
        self.dirty = true;
        self.refresh_fitness()?;

        let average = self.average_fitness()?;
        debug!(
            generation = self.generation,
            average_fitness = average,
            "advanced generation"
        );
        Ok(average)
    }

    /// Returns the candidate with maximal fitness, recomputing the cache if
    /// it is stale. Ties are broken by first occurrence in population order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if the engine was never initialized.
    pub fn best_candidate(&mut self) -> Result<&G> {
        self.refresh_fitness()?;

        let mut best = 0;
        for (i, &f) in self.fitness.iter().enumerate() {
            if f > self.fitness[best] {
                best = i;
            }
        }

        self.population.get(best).ok_or(MemeticError::EmptyPopulation)
    }

    /// Returns the mean fitness over the population, recomputing the cache if
    /// it is stale.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if the engine was never initialized.
    pub fn average_fitness(&mut self) -> Result<f64> {
        self.refresh_fitness()?;
        if self.fitness.is_empty() {
            return Err(MemeticError::EmptyPopulation);
        }
        Ok(self.fitness.iter().sum::<f64>() / self.fitness.len() as f64)
    }

    /// Returns a read-only view of the current population, in insertion
    /// order. The view is valid until the next `next_generation` call.
    pub fn candidates(&self) -> &[G] {
        &self.population
    }

    /// Returns the cached fitness values, index-aligned with
    /// [`GeneticEngine::candidates`]. May be stale if the population was
    /// mutated since the last recomputation.
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Returns the number of candidates in the population.
    pub fn len(&self) -> usize {
        self.population.len()
    }

    /// Returns `true` if the engine holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// Returns the number of completed generation steps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn population_mut(&mut self) -> &mut [G] {
        &mut self.population
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Recomputes the fitness cache if it is stale.
    fn refresh_fitness(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let scores: Result<Vec<f64>> = if self.population.len() >= self.parallel_threshold {
            self.population.par_iter().map(Self::score).collect()
        } else {
            self.population.iter().map(Self::score).collect()
        };

        self.fitness = scores?;
        self.dirty = false;
        Ok(())
    }

    fn score(candidate: &G) -> Result<f64> {
        let score = candidate.evaluate();
        if !score.is_finite() {
            return Err(MemeticError::FitnessCalculation(format!(
                "non-finite fitness score encountered: {}",
                score
            )));
        }
        Ok(score)
    }
}

impl<G> Default for GeneticEngine<G>
where
    G: Candidate,
{
    fn default() -> Self {
        Self::new()
    }
}
