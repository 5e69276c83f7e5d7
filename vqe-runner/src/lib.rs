//! Reusable VQE runner and convergence reporting.
//!
//! [`run_vqe`] drives a gradient-free argmin optimizer over a
//! parameterized [`Ansatz`] and a [`pauliop::PauliSum`] Hamiltonian,
//! recording a per-evaluation [`EnergyHistory`] and the solver wall-clock
//! time. [`report`] compares the found minimum against the exact
//! ground-state energy and renders a convergence chart plus a summary.

pub mod ansatz;
pub mod error;
pub mod estimator;
pub mod history;
pub mod report;
pub mod runner;

pub use ansatz::{Ansatz, AnsatzOp};
pub use error::VqeError;
pub use estimator::{Estimator, StatevectorEstimator};
pub use history::EnergyHistory;
pub use report::{exact_ground_energy, render_convergence, render_summary, report};
pub use runner::{run_vqe, run_vqe_with, OptimizerKind, VqeCallback, VqeConfig, VqeResult, VqeRun};
