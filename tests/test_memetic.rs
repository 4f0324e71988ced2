use memetic::{
    candidate::{Candidate, MemeticCandidate},
    engine::{GaParams, MemeticEngine},
    rng::RandomNumberGenerator,
    solver::{BoundedSolver, GradientDescent},
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// One-dimensional candidate whose fitness peaks at x = 3. The memetic
/// refinement step runs a bounded gradient descent over the squared distance
/// to the peak.
#[derive(Clone, Debug, Default, PartialEq)]
struct XCoordinate {
    x: f64,
}

impl XCoordinate {
    fn new(x: f64) -> Self {
        Self { x }
    }
}

impl Candidate for XCoordinate {
    fn evaluate(&self) -> f64 {
        1.0 / (1.0 + (self.x - 3.0).powi(2))
    }

    fn crossover(&self, other: &Self) -> Self {
        XCoordinate::new((self.x + other.x) / 2.0)
    }

    fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
        XCoordinate::new(self.x + rng.uniform(-0.25, 0.25))
    }
}

impl MemeticCandidate for XCoordinate {
    fn optimize(&mut self) -> f64 {
        let cost = |p: &[f64]| (p[0] - 3.0).powi(2);
        let mut solver = BoundedSolver::new(
            cost,
            GradientDescent::new()
                .with_epsilon(1e-6)
                .with_inner_iterations(500),
            1,
        )
        .with_max_iterations(50)
        .expect("non-zero iteration budget");

        let mut point = [self.x];
        if solver.solve(&mut point).is_ok() {
            self.x = point[0];
        }
        self.evaluate()
    }
}

#[test]
fn test_memetic_pass_does_not_decrease_best_fitness() {
    init_tracing();

    let mut engine: MemeticEngine<XCoordinate> = MemeticEngine::with_seed(17);
    engine
        .initialize_with(32, |i| XCoordinate::new(i as f64 * 0.5 - 16.25))
        .unwrap();

    let params = GaParams::builder()
        .population_size(32)
        .crossover_rate(0.8)
        .mutation_rate(0.02)
        .build()
        .unwrap();

    for _ in 0..10 {
        engine.next_generation(&params).unwrap();
        let best_before = engine.best_candidate().unwrap().evaluate();
        engine.optimize().unwrap();
        let best_after = engine.best_candidate().unwrap().evaluate();
        assert!(
            best_after >= best_before,
            "refinement degraded best fitness: {} -> {}",
            best_before,
            best_after
        );
    }
}

#[test]
fn test_memetic_loop_outperforms_its_own_start() {
    let mut engine: MemeticEngine<XCoordinate> = MemeticEngine::with_seed(23);
    engine
        .initialize_with(32, |i| XCoordinate::new(i as f64 * 0.5 - 16.25))
        .unwrap();

    let params = GaParams::builder()
        .population_size(32)
        .crossover_rate(0.8)
        .mutation_rate(0.02)
        .build()
        .unwrap();

    let initial_average = engine.average_fitness().unwrap();
    let mut average = initial_average;
    for _ in 0..20 {
        engine.next_generation(&params).unwrap();
        average = engine.optimize().unwrap();
    }

    assert!(
        average > initial_average,
        "average fitness {} -> {}",
        initial_average,
        average
    );
}

#[test]
fn test_refinement_moves_candidates_toward_local_optimum() {
    let mut engine: MemeticEngine<XCoordinate> = MemeticEngine::with_seed(29);
    engine
        .initialize_with(8, |i| XCoordinate::new(i as f64))
        .unwrap();

    let distance = |engine: &MemeticEngine<XCoordinate>| -> f64 {
        engine
            .candidates()
            .iter()
            .map(|c| (c.x - 3.0).abs())
            .sum::<f64>()
    };

    let before = distance(&engine);
    engine.optimize().unwrap();
    let after = distance(&engine);

    assert!(
        after < before,
        "total distance to optimum {} -> {}",
        before,
        after
    );
}

#[test]
fn test_memetic_engine_delegates_generation_stepping() {
    let mut engine: MemeticEngine<XCoordinate> = MemeticEngine::with_seed(31);
    engine.initialize(16).unwrap();

    let params = GaParams::builder().population_size(16).build().unwrap();
    engine.next_generation(&params).unwrap();

    assert_eq!(engine.candidates().len(), 16);
    assert_eq!(engine.engine().generation(), 1);
}
