use num_complex::Complex;
use std::fmt;
use std::str::FromStr;
use svsim::Gate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

impl Pauli {
    /// The simulator gate for this operator; identity has none.
    pub fn to_gate(self, qubit: usize) -> Option<Gate> {
        match self {
            Pauli::I => None,
            Pauli::X => Some(Gate::X(qubit)),
            Pauli::Y => Some(Gate::Y(qubit)),
            Pauli::Z => Some(Gate::Z(qubit)),
        }
    }

    /// The 2x2 matrix of this operator.
    pub fn matrix(self) -> [[Complex<f64>; 2]; 2] {
        let zero = Complex::new(0.0, 0.0);
        let one = Complex::new(1.0, 0.0);
        match self {
            Pauli::I => [[one, zero], [zero, one]],
            Pauli::X => [[zero, one], [one, zero]],
            Pauli::Y => [
                [zero, Complex::new(0.0, -1.0)],
                [Complex::new(0.0, 1.0), zero],
            ],
            Pauli::Z => [[one, zero], [zero, -one]],
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PauliParseError {
    #[error("expected `coefficient * operators`, got `{0}`")]
    Shape(String),
    #[error("invalid coefficient `{0}`")]
    Coefficient(String),
    #[error("invalid operator `{0}`")]
    Operator(String),
}

/// One weighted Pauli string, e.g. `0.5 * X0 Z1`.
#[derive(Debug, Clone, PartialEq)]
pub struct PauliTerm {
    pub coefficient: f64,
    pub operators: Vec<(Pauli, usize)>, // Vec of (Pauli type, qubit index)
}

impl PauliTerm {
    pub fn new() -> Self {
        PauliTerm {
            coefficient: 1.0,
            operators: Vec::new(),
        }
    }

    pub fn with_pauli(mut self, qubit_index: usize, pauli: Pauli) -> Self {
        if pauli != Pauli::I {
            self.operators.push((pauli, qubit_index));
            self.operators.sort_by_key(|&(_, q_idx)| q_idx);
        }
        self
    }

    pub fn with_coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }

    /// True for a bare `coeff * I` term.
    pub fn is_identity(&self) -> bool {
        self.operators.is_empty()
    }

    /// The highest qubit index this term touches.
    pub fn max_qubit(&self) -> Option<usize> {
        self.operators.iter().map(|&(_, q)| q).max()
    }

    /// The term's operators as simulator gates, for expectation
    /// measurement.
    pub fn to_gates(&self) -> Vec<Gate> {
        self.operators
            .iter()
            .filter_map(|&(p, q)| p.to_gate(q))
            .collect()
    }
}

impl Default for PauliTerm {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for PauliTerm {
    type Err = PauliParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('*').map(|p| p.trim()).collect();
        if parts.len() != 2 {
            return Err(PauliParseError::Shape(s.to_string()));
        }

        let coefficient = parts[0]
            .parse::<f64>()
            .map_err(|_| PauliParseError::Coefficient(parts[0].to_string()))?;

        let mut term = PauliTerm::new().with_coefficient(coefficient);

        for op in parts[1].split_whitespace() {
            if op.len() < 2 {
                return Err(PauliParseError::Operator(op.to_string()));
            }
            let (pauli_char, qubit_idx_str) = op.split_at(1);
            let qubit_index = qubit_idx_str
                .parse::<usize>()
                .map_err(|_| PauliParseError::Operator(op.to_string()))?;

            let pauli = match pauli_char {
                "X" | "x" => Pauli::X,
                "Y" | "y" => Pauli::Y,
                "Z" | "z" => Pauli::Z,
                "I" | "i" => Pauli::I,
                _ => return Err(PauliParseError::Operator(op.to_string())),
            };
            term = term.with_pauli(qubit_index, pauli);
        }

        Ok(term)
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.8}", self.coefficient)?;
        if !self.operators.is_empty() {
            write!(f, " *")?;
            for (pauli, qubit_index) in &self.operators {
                write!(f, " {}{}", pauli, qubit_index)?;
            }
        }
        Ok(())
    }
}
