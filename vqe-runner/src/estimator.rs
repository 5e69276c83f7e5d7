use crate::error::VqeError;
use pauliop::PauliSum;
use svsim::{Circuit, QuantumSimulator, Simulator};

/// Computes the expectation value of an operator for a prepared circuit.
/// The runner uses [`StatevectorEstimator`] unless the caller substitutes
/// a different backend.
pub trait Estimator {
    fn expectation(&mut self, circuit: &Circuit, hamiltonian: &PauliSum) -> Result<f64, VqeError>;
}

/// Exact expectation values from a statevector simulation.
pub struct StatevectorEstimator {
    simulator: QuantumSimulator,
}

impl StatevectorEstimator {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            simulator: QuantumSimulator::new(num_qubits),
        }
    }
}

impl Estimator for StatevectorEstimator {
    fn expectation(&mut self, circuit: &Circuit, hamiltonian: &PauliSum) -> Result<f64, VqeError> {
        self.simulator.reset();
        self.simulator.apply_circuit(circuit)?;

        let mut energy = 0.0;
        for term in &hamiltonian.terms {
            // An identity term has no gates; the expectation of an empty
            // Pauli string on a normalized state is 1.
            let value = self.simulator.pauli_expectation(&term.to_gates())?;
            energy += term.coefficient * value;
        }
        Ok(energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use pauliop::PauliTerm;
    use std::str::FromStr;
    use svsim::Gate;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_z_expectation_on_basis_states() {
        let hamiltonian = PauliSum::new().with_term(PauliTerm::from_str("0.5 * Z0").unwrap());
        let mut estimator = StatevectorEstimator::new(1);

        let empty = Circuit::new(1);
        assert!((estimator.expectation(&empty, &hamiltonian).unwrap() - 0.5).abs() < EPSILON);

        let mut flipped = Circuit::new(1);
        flipped.add_gate(Gate::X(0));
        assert!((estimator.expectation(&flipped, &hamiltonian).unwrap() + 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_identity_term_contributes_its_coefficient() {
        let hamiltonian = PauliSum::new().with_term(PauliTerm::from_str("-0.8126 * I0").unwrap());
        let mut estimator = StatevectorEstimator::new(1);
        let mut circuit = Circuit::new(1);
        circuit.add_gate(Gate::H(0));
        let energy = estimator.expectation(&circuit, &hamiltonian).unwrap();
        assert!((energy + 0.8126).abs() < EPSILON);
    }

    #[test]
    fn test_estimator_resets_between_calls() {
        let hamiltonian = PauliSum::new().with_term(PauliTerm::from_str("1.0 * Z0").unwrap());
        let mut estimator = StatevectorEstimator::new(1);

        let mut flipped = Circuit::new(1);
        flipped.add_gate(Gate::X(0));
        estimator.expectation(&flipped, &hamiltonian).unwrap();

        // A fresh empty circuit must see |0> again, not the leftover |1>.
        let empty = Circuit::new(1);
        assert!((estimator.expectation(&empty, &hamiltonian).unwrap() - 1.0).abs() < EPSILON);
        let amp = estimator.simulator.statevector().amplitudes[0];
        assert!((amp - Complex::new(1.0, 0.0)).norm() < EPSILON);
    }

    #[test]
    fn test_hamiltonian_wider_than_register_is_an_error() {
        let hamiltonian = PauliSum::new().with_term(PauliTerm::from_str("1.0 * Z3").unwrap());
        let mut estimator = StatevectorEstimator::new(1);
        let circuit = Circuit::new(1);
        assert!(estimator.expectation(&circuit, &hamiltonian).is_err());
    }
}
