use crate::circuit::Circuit;
use crate::gate::Gate;
use crate::state::StateVector;
use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

/// A lightweight error enum so callers don't rely on internals.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("qubit index {0} out of range")]
    Qubit(usize),
    #[error("`{0}` is not a Pauli operator")]
    NotPauli(String),
}

pub trait Simulator {
    /// Resets the simulator to the |0...0⟩ state.
    fn reset(&mut self);
    /// Applies a single quantum gate to the state.
    fn apply_gate(&mut self, gate: &Gate) -> Result<(), SimError>;
    /// Non-destructive expectation ⟨ψ|P|ψ⟩ for a Pauli string given as
    /// X/Y/Z gates. The internal state |ψ⟩ is not changed: the operators
    /// are applied to a copy and the inner product taken against it.
    fn pauli_expectation(&self, operators: &[Gate]) -> Result<f64, SimError>;
    fn statevector(&self) -> &StateVector;
    fn num_qubits(&self) -> usize;
}

pub struct QuantumSimulator {
    num_qubits: usize,
    state: StateVector,
}

impl QuantumSimulator {
    pub fn new(num_qubits: usize) -> Self {
        QuantumSimulator {
            num_qubits,
            state: StateVector::new(num_qubits),
        }
    }

    pub fn apply_circuit(&mut self, circuit: &Circuit) -> Result<(), SimError> {
        for gate in &circuit.gates {
            self.apply_gate(gate)?;
        }
        Ok(())
    }

    fn check_bounds(&self, gate: &Gate) -> Result<(), SimError> {
        let max = gate.max_qubit();
        if max >= self.num_qubits {
            return Err(SimError::Qubit(max));
        }
        Ok(())
    }

    fn apply_to(state: &mut StateVector, gate: &Gate) {
        match *gate {
            Gate::H(q) => state.apply_single_qubit_gate(&HADAMARD, q),
            Gate::X(q) => state.apply_single_qubit_gate(&PAULI_X, q),
            Gate::Y(q) => state.apply_single_qubit_gate(&PAULI_Y, q),
            Gate::Z(q) => state.apply_single_qubit_gate(&PAULI_Z, q),
            Gate::RX(q, theta) => {
                // Rx(θ) = cos(θ/2) I - i sin(θ/2) X
                let (ct, st) = ((theta * 0.5).cos(), (theta * 0.5).sin());
                let m = [
                    [Complex::new(ct, 0.0), Complex::new(0.0, -st)],
                    [Complex::new(0.0, -st), Complex::new(ct, 0.0)],
                ];
                state.apply_single_qubit_gate(&m, q)
            }
            Gate::RY(q, theta) => {
                // Ry(θ) = cos(θ/2) I - i sin(θ/2) Y  -> matrix is real
                let (ct, st) = ((theta * 0.5).cos(), (theta * 0.5).sin());
                let m = [
                    [Complex::new(ct, 0.0), Complex::new(-st, 0.0)],
                    [Complex::new(st, 0.0), Complex::new(ct, 0.0)],
                ];
                state.apply_single_qubit_gate(&m, q)
            }
            Gate::RZ(q, theta) => {
                // Rz(θ) = diag(e^{-iθ/2}, e^{+iθ/2})
                let (ct, st) = ((theta * 0.5).cos(), (theta * 0.5).sin());
                let m = [
                    [Complex::new(ct, -st), Complex::new(0.0, 0.0)],
                    [Complex::new(0.0, 0.0), Complex::new(ct, st)],
                ];
                state.apply_single_qubit_gate(&m, q)
            }
            Gate::CX(control, target) => state.apply_cx(control, target),
            Gate::CZ(control, target) => state.apply_cz(control, target),
        }
    }
}

impl Simulator for QuantumSimulator {
    fn reset(&mut self) {
        self.state.reset();
    }

    fn apply_gate(&mut self, gate: &Gate) -> Result<(), SimError> {
        self.check_bounds(gate)?;
        Self::apply_to(&mut self.state, gate);
        Ok(())
    }

    fn pauli_expectation(&self, operators: &[Gate]) -> Result<f64, SimError> {
        let mut phi = self.state.clone();
        for op in operators {
            self.check_bounds(op)?;
            match op {
                Gate::X(_) | Gate::Y(_) | Gate::Z(_) => Self::apply_to(&mut phi, op),
                other => return Err(SimError::NotPauli(other.to_string())),
            }
        }
        Ok(self.state.inner_product(&phi).re)
    }

    fn statevector(&self) -> &StateVector {
        &self.state
    }

    fn num_qubits(&self) -> usize {
        self.num_qubits
    }
}

// custom type for gate matrices
pub type GateMatrix = [[Complex<f64>; 2]; 2];

pub const HADAMARD: GateMatrix = [
    [
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(FRAC_1_SQRT_2, 0.0),
    ],
    [
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(-FRAC_1_SQRT_2, 0.0),
    ],
];

pub const PAULI_X: GateMatrix = [
    [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
];

pub const PAULI_Y: GateMatrix = [
    [Complex::new(0.0, 0.0), Complex::new(0.0, -1.0)],
    [Complex::new(0.0, 1.0), Complex::new(0.0, 0.0)],
];

pub const PAULI_Z: GateMatrix = [
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    [Complex::new(0.0, 0.0), Complex::new(-1.0, 0.0)],
];

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: Complex<f64>, b: Complex<f64>) -> bool {
        (a.re - b.re).abs() < EPSILON && (a.im - b.im).abs() < EPSILON
    }

    #[test]
    fn test_bell_state_simulation() {
        let mut sim = QuantumSimulator::new(2);
        sim.apply_gate(&Gate::H(0)).unwrap();
        sim.apply_gate(&Gate::CX(0, 1)).unwrap();
        let expected_amp = Complex::new(FRAC_1_SQRT_2, 0.0);
        let amps = &sim.statevector().amplitudes;
        assert!(approx_eq(amps[0], expected_amp));
        assert!(approx_eq(amps[1], Complex::new(0.0, 0.0)));
        assert!(approx_eq(amps[2], Complex::new(0.0, 0.0)));
        assert!(approx_eq(amps[3], expected_amp));
    }

    #[test]
    fn test_z_expectation_flips_sign_under_x() {
        let mut sim = QuantumSimulator::new(1);
        assert!((sim.pauli_expectation(&[Gate::Z(0)]).unwrap() - 1.0).abs() < EPSILON);
        sim.apply_gate(&Gate::X(0)).unwrap();
        assert!((sim.pauli_expectation(&[Gate::Z(0)]).unwrap() + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_x_expectation_on_plus_state() {
        let mut sim = QuantumSimulator::new(1);
        sim.apply_gate(&Gate::H(0)).unwrap();
        assert!((sim.pauli_expectation(&[Gate::X(0)]).unwrap() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_expectation_does_not_mutate_state() {
        let mut sim = QuantumSimulator::new(1);
        sim.apply_gate(&Gate::H(0)).unwrap();
        let before = sim.statevector().amplitudes.clone();
        sim.pauli_expectation(&[Gate::X(0)]).unwrap();
        let after = &sim.statevector().amplitudes;
        assert!(before.iter().zip(after.iter()).all(|(a, b)| approx_eq(*a, *b)));
    }

    #[test]
    fn test_ry_rotates_towards_one() {
        let mut sim = QuantumSimulator::new(1);
        sim.apply_gate(&Gate::RY(0, std::f64::consts::PI)).unwrap();
        let amps = &sim.statevector().amplitudes;
        assert!(approx_eq(amps[0], Complex::new(0.0, 0.0)));
        assert!(approx_eq(amps[1], Complex::new(1.0, 0.0)));
    }

    #[test]
    fn test_out_of_range_qubit_is_an_error() {
        let mut sim = QuantumSimulator::new(1);
        assert!(matches!(
            sim.apply_gate(&Gate::CX(0, 1)),
            Err(SimError::Qubit(1))
        ));
    }

    #[test]
    fn test_non_pauli_operator_rejected() {
        let sim = QuantumSimulator::new(1);
        assert!(matches!(
            sim.pauli_expectation(&[Gate::H(0)]),
            Err(SimError::NotPauli(_))
        ));
    }
}
