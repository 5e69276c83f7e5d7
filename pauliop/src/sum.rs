use crate::term::{Pauli, PauliTerm};
use nalgebra::DMatrix;
use num_complex::Complex;
use std::fmt;

/// A weighted sum of Pauli terms describing a quantum system.
#[derive(Debug, Clone, Default)]
pub struct PauliSum {
    pub terms: Vec<PauliTerm>,
}

impl PauliSum {
    pub fn new() -> Self {
        PauliSum { terms: Vec::new() }
    }

    pub fn add_term(&mut self, term: PauliTerm) {
        self.terms.push(term);
    }

    pub fn with_term(mut self, term: PauliTerm) -> Self {
        self.add_term(term);
        self
    }

    /// Number of qubits the operator acts on: highest referenced index
    /// plus one, never less than one (an identity-only sum is a one-qubit
    /// operator).
    pub fn num_qubits(&self) -> usize {
        self.terms
            .iter()
            .filter_map(PauliTerm::max_qubit)
            .max()
            .map_or(1, |q| q + 1)
    }

    /// Dense matrix realization, Σ coeff · ⊗ factors, with qubit 0 as the
    /// least significant bit of the row/column index.
    pub fn matrix(&self) -> DMatrix<Complex<f64>> {
        let n = self.num_qubits();
        let dim = 1 << n;
        let mut total = DMatrix::<Complex<f64>>::zeros(dim, dim);

        for term in &self.terms {
            let mut acc =
                DMatrix::<Complex<f64>>::from_element(1, 1, Complex::new(term.coefficient, 0.0));
            for q in (0..n).rev() {
                let pauli = term
                    .operators
                    .iter()
                    .find(|&&(_, idx)| idx == q)
                    .map_or(Pauli::I, |&(p, _)| p);
                let m = pauli.matrix();
                let factor = DMatrix::from_row_slice(2, 2, &[m[0][0], m[0][1], m[1][0], m[1][1]]);
                acc = acc.kronecker(&factor);
            }
            total += acc;
        }
        total
    }
}

impl fmt::Display for PauliSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "\n+ ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const EPSILON: f64 = 1e-12;

    fn h2_hamiltonian() -> PauliSum {
        PauliSum::new()
            .with_term(PauliTerm::from_str("-0.8126 * I0").unwrap())
            .with_term(PauliTerm::from_str("0.1712 * Z0").unwrap())
            .with_term(PauliTerm::from_str("-0.2228 * Z1").unwrap())
            .with_term(PauliTerm::from_str("0.1686 * Z0 Z1").unwrap())
            .with_term(PauliTerm::from_str("0.0453 * X0 X1").unwrap())
    }

    #[test]
    fn test_num_qubits() {
        assert_eq!(PauliSum::new().num_qubits(), 1);
        assert_eq!(h2_hamiltonian().num_qubits(), 2);
        let z5 = PauliSum::new().with_term(PauliTerm::new().with_pauli(5, Pauli::Z));
        assert_eq!(z5.num_qubits(), 6);
    }

    #[test]
    fn test_empty_sum_matrix_is_zero() {
        let m = PauliSum::new().matrix();
        assert_eq!(m.nrows(), 2);
        assert!(m.iter().all(|c| c.norm() < EPSILON));
    }

    #[test]
    fn test_z_matrix_is_diagonal() {
        let sum = PauliSum::new().with_term(PauliTerm::from_str("1.0 * Z0").unwrap());
        let m = sum.matrix();
        assert!((m[(0, 0)].re - 1.0).abs() < EPSILON);
        assert!((m[(1, 1)].re + 1.0).abs() < EPSILON);
        assert!(m[(0, 1)].norm() < EPSILON);
    }

    #[test]
    fn test_x_matrix_is_off_diagonal() {
        let sum = PauliSum::new().with_term(PauliTerm::from_str("0.5 * X0").unwrap());
        let m = sum.matrix();
        assert!((m[(0, 1)].re - 0.5).abs() < EPSILON);
        assert!((m[(1, 0)].re - 0.5).abs() < EPSILON);
        assert!(m[(0, 0)].norm() < EPSILON);
    }

    #[test]
    fn test_zz_matrix_diagonal_signs() {
        let sum = PauliSum::new().with_term(PauliTerm::from_str("1.0 * Z0 Z1").unwrap());
        let m = sum.matrix();
        // Index bit 0 is qubit 0: |00>, |01>, |10>, |11> -> +1, -1, -1, +1.
        let expected = [1.0, -1.0, -1.0, 1.0];
        for (i, want) in expected.iter().enumerate() {
            assert!((m[(i, i)].re - want).abs() < EPSILON);
        }
    }

    #[test]
    fn test_y_matrix_is_hermitian() {
        let sum = PauliSum::new().with_term(PauliTerm::from_str("1.0 * Y0").unwrap());
        let m = sum.matrix();
        assert!((m[(0, 1)] - Complex::new(0.0, -1.0)).norm() < EPSILON);
        assert!((m[(1, 0)] - Complex::new(0.0, 1.0)).norm() < EPSILON);
    }

    #[test]
    fn test_identity_term_scales_diagonal() {
        let sum = PauliSum::new().with_term(PauliTerm::from_str("-0.8126 * I0").unwrap());
        let m = sum.matrix();
        assert!((m[(0, 0)].re + 0.8126).abs() < EPSILON);
        assert!((m[(1, 1)].re + 0.8126).abs() < EPSILON);
    }

    #[test]
    fn test_hamiltonian_display() {
        let display_str = h2_hamiltonian().to_string();
        assert!(display_str.contains("-0.8126"));
        assert!(display_str.contains("X0 X1"));
    }
}
