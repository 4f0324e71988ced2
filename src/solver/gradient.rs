//! # Gradient Descent
//!
//! Central-difference gradient estimation and the adaptive-step gradient
//! descent strategy for the bounded solver.

use crate::solver::bounds::Bounds;
use crate::solver::{CostFunction, StepStrategy};

/// Default perturbation for the central-difference gradient.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Default reset value of the adaptive step size.
pub const INITIAL_ALPHA: f64 = 1e-5;

/// Estimates the gradient of `cost` at `x` by central finite differences.
///
/// For each dimension `i` the estimate is
/// `(f(x + ε·eᵢ) − f(x − ε·eᵢ)) / (2ε)`. Pure function of the cost functor
/// and the point; costs `2N` evaluations.
pub fn gradient<F>(cost: &F, x: &[f64], epsilon: f64) -> Vec<f64>
where
    F: CostFunction + ?Sized,
{
    let mut grad = vec![0.0; x.len()];
    let mut probe = x.to_vec();
    for i in 0..x.len() {
        let original = probe[i];
        probe[i] = original + epsilon;
        let forward = cost.cost(&probe);
        probe[i] = original - epsilon;
        let backward = cost.cost(&probe);
        probe[i] = original;
        grad[i] = (forward - backward) / (2.0 * epsilon);
    }
    grad
}

/// Gradient descent (or ascent) with an adaptive step size.
///
/// Each outer step estimates the gradient once, then takes up to
/// `inner_iterations` sub-steps of `x += alpha * direction`, clamped to the
/// solver bounds, accepting only monotone improvement. The first sub-step
/// that fails to improve is reverted and adjusts `alpha`: small steps are
/// halved to back off, already-large steps are doubled to escape a regime
/// where the budget was spent making negligible progress. There is no
/// momentum and no line search beyond this binary adjustment.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    alpha: f64,
    epsilon: f64,
    inner_iterations: usize,
}

impl GradientDescent {
    /// Creates a strategy with the default perturbation (`1e-10`) and inner
    /// iteration budget (100).
    pub fn new() -> Self {
        Self {
            alpha: INITIAL_ALPHA,
            epsilon: DEFAULT_EPSILON,
            inner_iterations: 100,
        }
    }

    /// Sets the finite-difference perturbation.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the inner sub-step budget per gradient estimate.
    pub fn with_inner_iterations(mut self, inner_iterations: usize) -> Self {
        self.inner_iterations = inner_iterations;
        self
    }

    /// The current adaptive step size.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> StepStrategy<F> for GradientDescent
where
    F: CostFunction,
{
    fn init(&mut self) {
        self.alpha = INITIAL_ALPHA;
    }

    fn step(&mut self, cost: &F, x: &mut [f64], bounds: &Bounds, last_cost: f64, minimize: bool) {
        let mut direction = gradient(cost, x, self.epsilon);
        if minimize {
            for component in &mut direction {
                *component = -*component;
            }
        }

        let mut best = last_cost;
        let mut previous = vec![0.0; x.len()];
        for _ in 0..self.inner_iterations {
            previous.copy_from_slice(x);
            for (value, component) in x.iter_mut().zip(&direction) {
                *value += self.alpha * component;
            }
            bounds.clamp(x);

            let tentative = cost.cost(x);
            let improved = if minimize {
                tentative < best
            } else {
                tentative > best
            };

            if improved {
                best = tentative;
            } else {
                x.copy_from_slice(&previous);
                if self.alpha < 10.0 {
                    self.alpha /= 2.0;
                } else {
                    self.alpha *= 2.0;
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BoundedSolver;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    #[test]
    fn test_gradient_of_sphere() {
        // d/dx_i of sum(x^2) is 2*x_i. The tiny default epsilon loses
        // precision on f64, so use a looser one for the accuracy check.
        let x = [1.0, -2.0, 0.5];
        let grad = gradient(&sphere, &x, 1e-6);
        let expected = [2.0, -4.0, 1.0];
        for (g, e) in grad.iter().zip(expected) {
            assert!((g - e).abs() < 1e-3, "gradient {} vs expected {}", g, e);
        }
    }

    #[test]
    fn test_gradient_is_pure() {
        let x = [1.0, 2.0];
        let before = x;
        let _ = gradient(&sphere, &x, 1e-6);
        assert_eq!(x, before);
    }

    #[test]
    fn test_init_resets_alpha() {
        let mut gd = GradientDescent::new();
        <GradientDescent as StepStrategy<fn(&[f64]) -> f64>>::init(&mut gd);
        assert!((gd.alpha() - INITIAL_ALPHA).abs() < f64::EPSILON);
    }

    #[test]
    fn test_descent_never_returns_worse_cost() {
        let start = [4.0, -3.0];
        let start_cost = sphere(&start);

        let mut solver = BoundedSolver::new(
            sphere,
            GradientDescent::new().with_epsilon(1e-6),
            2,
        )
        .with_max_iterations(200)
        .unwrap();

        let mut x = start;
        let result = solver.solve(&mut x).unwrap();
        assert!(result.cost <= start_cost);
    }

    #[test]
    fn test_descent_approaches_minimum() {
        let cost = |x: &[f64]| (x[0] - 1.5).powi(2);
        let mut solver = BoundedSolver::new(
            cost,
            GradientDescent::new()
                .with_epsilon(1e-6)
                .with_inner_iterations(1000),
            1,
        )
        .with_max_iterations(500)
        .unwrap()
        .with_cost_criteria(1e-12);

        let mut x = [10.0];
        let result = solver.solve(&mut x).unwrap();
        assert!(result.cost < cost(&[10.0]));
        assert!((x[0] - 1.5).abs() < 1.0, "x = {}", x[0]);
    }

    #[test]
    fn test_ascent_on_concave_cost() {
        let cost = |x: &[f64]| -(x[0] * x[0]);
        let mut solver = BoundedSolver::new(
            cost,
            GradientDescent::new().with_epsilon(1e-6),
            1,
        )
        .minimize(false)
        .with_max_iterations(200)
        .unwrap();

        let mut x = [2.0];
        let result = solver.solve(&mut x).unwrap();
        assert!(result.cost >= -4.0);
    }

    #[test]
    fn test_descent_respects_bounds() {
        // Unconstrained minimum at 0; lower bound keeps x at or above 1.
        let mut solver = BoundedSolver::new(
            sphere,
            GradientDescent::new().with_epsilon(1e-6),
            1,
        )
        .with_max_iterations(200)
        .unwrap();
        solver.set_lower_bound(0, 1.0).unwrap();

        let mut x = [5.0];
        let result = solver.solve(&mut x).unwrap();
        assert!(x[0] >= 1.0);
        assert!(result.cost >= 1.0);
    }
}
