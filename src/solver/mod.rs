//! # Bounded Local Solver
//!
//! An iterative optimizer over fixed-dimension real vectors with per-dimension
//! optional bounds and a convergence criterion. The driver loop is generic
//! over a [`StepStrategy`] that proposes the next point; the concrete strategy
//! shipped with this crate is [`GradientDescent`], which estimates the
//! gradient by central finite differences and adapts its step size.
//!
//! The solver walks a simple state machine per [`BoundedSolver::solve`] call:
//! evaluate the starting cost, reset the strategy, then iterate up to
//! `max_iterations` times, clamping every proposal to the bounds. An iteration
//! whose improvement falls below the cost criterion terminates the loop as
//! converged; exhausting the iteration budget is a normal outcome, not an
//! error, and reports the best cost reached.
//!
//! ## Example
//!
//! ```rust
//! use memetic::solver::{BoundedSolver, GradientDescent};
//!
//! let cost = |x: &[f64]| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2);
//! let mut solver = BoundedSolver::new(cost, GradientDescent::new(), 2)
//!     .with_max_iterations(200)
//!     .unwrap();
//!
//! let mut x = [5.0, 5.0];
//! let result = solver.solve(&mut x).unwrap();
//! assert!(result.cost <= cost(&[5.0, 5.0]));
//! ```

pub mod bounds;
pub mod gradient;

use std::fmt::Debug;

use tracing::trace;

use crate::error::{MemeticError, Result};

pub use bounds::Bounds;
pub use gradient::{gradient, GradientDescent};

/// A scalar cost function over an N-dimensional point.
///
/// Implemented for any `Fn(&[f64]) -> f64` closure. The solver may call it
/// many times per `solve`: 2N evaluations per gradient estimate, times up to
/// `max_iterations × inner_iterations` steps.
pub trait CostFunction: Send + Sync {
    /// Evaluates the cost at `x`.
    fn cost(&self, x: &[f64]) -> f64;
}

impl<F> CostFunction for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn cost(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// A strategy that proposes the next point of the iterative solver.
///
/// The driver owns the convergence decision; the strategy only moves `x`.
/// Strategies may carry adaptive state between steps (step sizes, momentum-
/// free bookkeeping); `init` resets that state at the start of each solve.
pub trait StepStrategy<F>: Debug
where
    F: CostFunction,
{
    /// Resets any adaptive state before a new solve.
    fn init(&mut self);

    /// Proposes a new `x` in place.
    ///
    /// `last_cost` is the cost of the current `x`; `minimize` gives the
    /// optimization sense. The strategy must leave `x` at a point no worse
    /// than where it started or revert its own proposal; the driver clamps
    /// and re-evaluates after every step.
    fn step(&mut self, cost: &F, x: &mut [f64], bounds: &Bounds, last_cost: f64, minimize: bool);
}

/// The outcome of one [`BoundedSolver::solve`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// The best cost reached.
    pub cost: f64,
    /// The number of outer iterations performed.
    pub iterations: usize,
    /// Whether the improvement criterion terminated the loop. `false` means
    /// the iteration budget was exhausted, which is a normal terminal state.
    pub converged: bool,
}

/// An iterative optimizer over fixed-dimension real vectors with
/// per-dimension optional bounds.
#[derive(Debug, Clone)]
pub struct BoundedSolver<F, S>
where
    F: CostFunction,
    S: StepStrategy<F>,
{
    cost: F,
    step: S,
    bounds: Bounds,
    minimize: bool,
    max_iterations: usize,
    cost_criteria: f64,
}

impl<F, S> BoundedSolver<F, S>
where
    F: CostFunction,
    S: StepStrategy<F>,
{
    /// Creates a solver for points of the given dimension.
    ///
    /// Defaults: minimization, 100 iterations, cost criterion `1e-9`, no
    /// bounds.
    pub fn new(cost: F, step: S, dimension: usize) -> Self {
        Self {
            cost,
            step,
            bounds: Bounds::new(dimension),
            minimize: true,
            max_iterations: 100,
            cost_criteria: 1e-9,
        }
    }

    /// Sets the optimization sense; `true` minimizes, `false` maximizes.
    pub fn minimize(mut self, minimize: bool) -> Self {
        self.minimize = minimize;
        self
    }

    /// Sets the iteration budget.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `max_iterations` is 0.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Result<Self> {
        if max_iterations == 0 {
            return Err(MemeticError::Configuration(
                "maximum iterations must be greater than 0".to_string(),
            ));
        }
        self.max_iterations = max_iterations;
        Ok(self)
    }

    /// Sets the minimum improvement required to continue iterating.
    pub fn with_cost_criteria(mut self, cost_criteria: f64) -> Self {
        self.cost_criteria = cost_criteria;
        self
    }

    /// Enables a lower bound on dimension `index`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `index` is outside the dimension.
    pub fn set_lower_bound(&mut self, index: usize, value: f64) -> Result<()> {
        self.bounds.set_lower(index, value)
    }

    /// Enables an upper bound on dimension `index`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `index` is outside the dimension.
    pub fn set_upper_bound(&mut self, index: usize, value: f64) -> Result<()> {
        self.bounds.set_upper(index, value)
    }

    /// Removes the lower bound on dimension `index`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `index` is outside the dimension.
    pub fn clear_lower_bound(&mut self, index: usize) -> Result<()> {
        self.bounds.clear_lower(index)
    }

    /// Removes the upper bound on dimension `index`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `index` is outside the dimension.
    pub fn clear_upper_bound(&mut self, index: usize) -> Result<()> {
        self.bounds.clear_upper(index)
    }

    /// Returns the configured bounds.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Optimizes `x` in place and returns the final cost.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `x` does not match the solver
    /// dimension, or a `FitnessCalculation` error if the cost function
    /// returns a non-finite value at the starting point. Numeric edge cases
    /// during iteration are absorbed by the bound clamp and the strategy's
    /// own reverts; loop exhaustion is reported through
    /// [`SolveResult::converged`], never as an error.
    pub fn solve(&mut self, x: &mut [f64]) -> Result<SolveResult> {
        if x.len() != self.bounds.dimension() {
            return Err(MemeticError::Configuration(format!(
                "point dimension {} does not match solver dimension {}",
                x.len(),
                self.bounds.dimension()
            )));
        }

        self.bounds.clamp(x);
        let mut last_cost = self.cost.cost(x);
        if !last_cost.is_finite() {
            return Err(MemeticError::FitnessCalculation(format!(
                "non-finite cost at starting point: {}",
                last_cost
            )));
        }

        self.step.init();

        let mut iterations = 0;
        let mut converged = false;
        for iteration in 0..self.max_iterations {
            self.step
                .step(&self.cost, x, &self.bounds, last_cost, self.minimize);
            self.bounds.clamp(x);
            let new_cost = self.cost.cost(x);

            let improvement = if self.minimize {
                last_cost - new_cost
            } else {
                new_cost - last_cost
            };

            iterations = iteration + 1;
            trace!(iteration, cost = new_cost, improvement, "solver iteration");

            if improvement < self.cost_criteria {
                converged = true;
                break;
            }
            last_cost = new_cost;
        }

        Ok(SolveResult {
            cost: last_cost,
            iterations,
            converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A strategy that moves x[0] a fixed amount toward zero per step.
    #[derive(Debug)]
    struct FixedStep {
        size: f64,
        initialized: bool,
    }

    impl FixedStep {
        fn new(size: f64) -> Self {
            Self {
                size,
                initialized: false,
            }
        }
    }

    impl<F: CostFunction> StepStrategy<F> for FixedStep {
        fn init(&mut self) {
            self.initialized = true;
        }

        fn step(
            &mut self,
            _cost: &F,
            x: &mut [f64],
            _bounds: &Bounds,
            _last_cost: f64,
            _minimize: bool,
        ) {
            assert!(self.initialized);
            let direction = -x[0].signum();
            x[0] += direction * self.size.min(x[0].abs());
        }
    }

    fn quadratic(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let mut solver = BoundedSolver::new(quadratic, FixedStep::new(1.0), 2);
        let mut x = [1.0, 2.0, 3.0];
        assert!(matches!(
            solver.solve(&mut x),
            Err(MemeticError::Configuration(_))
        ));
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let result =
            BoundedSolver::new(quadratic, FixedStep::new(1.0), 1).with_max_iterations(0);
        assert!(matches!(result, Err(MemeticError::Configuration(_))));
    }

    #[test]
    fn test_non_finite_starting_cost_is_rejected() {
        let cost = |_: &[f64]| f64::NAN;
        let mut solver = BoundedSolver::new(cost, FixedStep::new(1.0), 1);
        let mut x = [1.0];
        assert!(matches!(
            solver.solve(&mut x),
            Err(MemeticError::FitnessCalculation(_))
        ));
    }

    #[test]
    fn test_converges_on_simple_descent() {
        let mut solver = BoundedSolver::new(quadratic, FixedStep::new(1.0), 1)
            .with_max_iterations(100)
            .unwrap();
        let mut x = [10.0];
        let result = solver.solve(&mut x).unwrap();

        assert!(result.converged);
        assert!(result.cost < 1e-9);
        assert!(x[0].abs() < 1e-9);
    }

    #[test]
    fn test_exhaustion_is_not_an_error() {
        // A step too small to reach the criterion within the budget.
        let mut solver = BoundedSolver::new(quadratic, FixedStep::new(0.5), 1)
            .with_max_iterations(3)
            .unwrap()
            .with_cost_criteria(0.0);
        let mut x = [100.0];
        let result = solver.solve(&mut x).unwrap();

        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
        assert!(result.cost < quadratic(&[100.0]));
    }

    #[test]
    fn test_starting_point_is_clamped() {
        let mut solver = BoundedSolver::new(quadratic, FixedStep::new(0.0), 1);
        solver.set_lower_bound(0, -1.0).unwrap();
        solver.set_upper_bound(0, 1.0).unwrap();

        let mut x = [25.0];
        solver.solve(&mut x).unwrap();
        assert!(x[0] <= 1.0);
    }

    #[test]
    fn test_bound_setter_index_validation() {
        let mut solver = BoundedSolver::new(quadratic, FixedStep::new(1.0), 2);
        assert!(solver.set_lower_bound(1, 0.0).is_ok());
        assert!(matches!(
            solver.set_upper_bound(2, 0.0),
            Err(MemeticError::Configuration(_))
        ));
    }

    #[test]
    fn test_maximize_sense() {
        // Maximize -x^2: FixedStep moves toward 0, which increases -x^2.
        let cost = |x: &[f64]| -(x[0] * x[0]);
        let mut solver = BoundedSolver::new(cost, FixedStep::new(1.0), 1)
            .minimize(false)
            .with_max_iterations(50)
            .unwrap();
        let mut x = [10.0];
        let result = solver.solve(&mut x).unwrap();
        assert!(result.cost > -100.0);
    }
}
