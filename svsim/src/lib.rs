pub mod circuit;
pub mod gate;
pub mod simulator;
pub mod state;

// Re-export key components for easier access from dependent crates.
pub use circuit::Circuit;
pub use gate::Gate;
pub use simulator::{QuantumSimulator, SimError, Simulator};
pub use state::StateVector;
