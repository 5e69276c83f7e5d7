use crate::ansatz::Ansatz;
use crate::error::VqeError;
use crate::estimator::{Estimator, StatevectorEstimator};
use crate::history::EnergyHistory;
use argmin::core::{CostFunction, Error, Executor, IterState, OptimizationResult};
use argmin::solver::neldermead::NelderMead;
use argmin::solver::simulatedannealing::{Anneal, SimulatedAnnealing};
use pauliop::PauliSum;
use rand::Rng;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::time::{Duration, Instant};

/// Gradient-free optimizer choice for the variational loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptimizerKind {
    /// Nelder-Mead downhill simplex; `step` is the offset of each initial
    /// simplex vertex from the initial point.
    NelderMead { step: f64 },
    /// Simulated annealing starting at the given temperature.
    SimulatedAnnealing { init_temp: f64 },
}

impl Default for OptimizerKind {
    fn default() -> Self {
        OptimizerKind::NelderMead { step: 0.5 }
    }
}

/// Runner configuration. Defaults: 200 iterations, Nelder-Mead with step
/// 0.5, and a zero vector sized to the ansatz as the initial point.
#[derive(Debug, Clone)]
pub struct VqeConfig {
    pub maxiter: u64,
    pub initial_point: Option<Vec<f64>>,
    pub optimizer: OptimizerKind,
}

impl Default for VqeConfig {
    fn default() -> Self {
        Self {
            maxiter: 200,
            initial_point: None,
            optimizer: OptimizerKind::default(),
        }
    }
}

impl VqeConfig {
    pub fn with_maxiter(mut self, maxiter: u64) -> Self {
        self.maxiter = maxiter;
        self
    }

    pub fn with_initial_point(mut self, initial_point: Vec<f64>) -> Self {
        self.initial_point = Some(initial_point);
        self
    }

    pub fn with_optimizer(mut self, optimizer: OptimizerKind) -> Self {
        self.optimizer = optimizer;
        self
    }
}

/// Terminal state of the optimization.
#[derive(Debug, Clone, Serialize)]
pub struct VqeResult {
    /// Best energy found.
    pub eigenvalue: f64,
    /// Parameters at the best energy, when the solver reported them.
    pub optimal_point: Option<Vec<f64>>,
    /// Optimizer iterations performed.
    pub iterations: u64,
}

/// Everything one Runner invocation produces.
#[derive(Debug, Serialize)]
pub struct VqeRun {
    pub result: VqeResult,
    pub history: EnergyHistory,
    pub runtime: Duration,
}

impl VqeRun {
    pub fn runtime_seconds(&self) -> f64 {
        self.runtime.as_secs_f64()
    }
}

/// Observer invoked once per cost evaluation with (evaluation count,
/// parameters, energy), after the sample has been appended to the history.
pub type VqeCallback<'a> = &'a mut dyn FnMut(u64, &[f64], f64);

/// Links the variational problem to the argmin optimizer. The estimator
/// and the history accumulator live behind interior mutability because
/// argmin only hands out `&self` during cost evaluation.
struct CostProblem<'a, E: Estimator> {
    ansatz: &'a Ansatz,
    hamiltonian: &'a PauliSum,
    estimator: RefCell<E>,
    history: RefCell<EnergyHistory>,
    evals: Cell<u64>,
    callback: RefCell<Option<VqeCallback<'a>>>,
}

impl<E: Estimator> CostFunction for CostProblem<'_, E> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, Error> {
        let circuit = self.ansatz.bind(params)?;
        let energy = self
            .estimator
            .borrow_mut()
            .expectation(&circuit, self.hamiltonian)?;

        let count = self.evals.get() + 1;
        self.evals.set(count);
        // Record first, then notify: the sample must exist in the history
        // before the user callback observes it.
        self.history.borrow_mut().push(count, energy);
        if let Some(callback) = self.callback.borrow_mut().as_mut() {
            callback(count, params, energy);
        }
        Ok(energy)
    }
}

impl<E: Estimator> Anneal for CostProblem<'_, E> {
    type Param = Vec<f64>;
    type Output = Vec<f64>;
    type Float = f64;

    /// Random neighbor: shift one coordinate by up to the current
    /// temperature in either direction.
    fn anneal(&self, params: &Self::Param, extent: Self::Float) -> Result<Self::Output, Error> {
        let mut next = params.clone();
        if next.is_empty() || extent <= 0.0 {
            return Ok(next);
        }
        let mut rng = rand::thread_rng();
        let idx = rng.gen_range(0..next.len());
        next[idx] += rng.gen_range(-extent..extent);
        Ok(next)
    }
}

/// Runs VQE with the default exact statevector estimator and no callback.
pub fn run_vqe(
    ansatz: &Ansatz,
    hamiltonian: &PauliSum,
    config: &VqeConfig,
) -> Result<VqeRun, VqeError> {
    run_vqe_with(
        ansatz,
        hamiltonian,
        config,
        StatevectorEstimator::new(ansatz.num_qubits()),
        None,
    )
}

/// Runs VQE with a caller-supplied estimator and optional per-evaluation
/// callback. Timing covers the solver invocation only, not setup.
pub fn run_vqe_with<'a, E: Estimator>(
    ansatz: &'a Ansatz,
    hamiltonian: &'a PauliSum,
    config: &VqeConfig,
    estimator: E,
    callback: Option<VqeCallback<'a>>,
) -> Result<VqeRun, VqeError> {
    let n = ansatz.num_parameters();
    let initial_point = match &config.initial_point {
        Some(point) if point.len() != n => {
            return Err(VqeError::ParameterCount {
                expected: n,
                got: point.len(),
            });
        }
        Some(point) => point.clone(),
        None => vec![0.0; n],
    };

    let problem = CostProblem {
        ansatz,
        hamiltonian,
        estimator: RefCell::new(estimator),
        history: RefCell::new(EnergyHistory::new()),
        evals: Cell::new(0),
        callback: RefCell::new(callback),
    };

    // A simplex needs n + 1 vertices, which a parameter-free ansatz cannot
    // provide; its energy is a constant, so one evaluation settles it.
    if n == 0 {
        let start = Instant::now();
        let energy = problem.cost(&initial_point)?;
        let runtime = start.elapsed();
        return Ok(VqeRun {
            result: VqeResult {
                eigenvalue: energy,
                optimal_point: Some(initial_point),
                iterations: 0,
            },
            history: problem.history.into_inner(),
            runtime,
        });
    }

    match config.optimizer {
        OptimizerKind::NelderMead { step } => {
            let mut simplex = vec![initial_point.clone()];
            for i in 0..n {
                let mut vertex = initial_point.clone();
                vertex[i] += step;
                simplex.push(vertex);
            }
            let solver = NelderMead::new(simplex);

            let start = Instant::now();
            let res = Executor::new(problem, solver)
                .configure(|state| state.max_iters(config.maxiter))
                .run()?;
            collect_run(res, start.elapsed())
        }
        OptimizerKind::SimulatedAnnealing { init_temp } => {
            let solver = SimulatedAnnealing::new(init_temp)?;

            let start = Instant::now();
            let res = Executor::new(problem, solver)
                .configure(|state| state.param(initial_point).max_iters(config.maxiter))
                .run()?;
            collect_run(res, start.elapsed())
        }
    }
}

fn collect_run<E: Estimator, S>(
    mut res: OptimizationResult<
        CostProblem<'_, E>,
        S,
        IterState<Vec<f64>, (), (), (), (), f64>,
    >,
    runtime: Duration,
) -> Result<VqeRun, VqeError> {
    let problem = res.problem.take_problem().ok_or(VqeError::MissingResult)?;
    Ok(VqeRun {
        result: VqeResult {
            eigenvalue: res.state.best_cost,
            optimal_point: res.state.best_param.clone(),
            iterations: res.state.iter,
        },
        history: problem.history.into_inner(),
        runtime,
    })
}
