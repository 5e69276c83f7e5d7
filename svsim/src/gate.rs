use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    H(usize),
    X(usize),
    Y(usize),
    Z(usize),
    RX(usize, f64), // RX gate with angle
    RY(usize, f64), // RY gate with angle
    RZ(usize, f64), // RZ gate with angle
    CX(usize, usize),
    CZ(usize, usize),
}

impl Gate {
    /// The qubit indices this gate acts on.
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Gate::H(q) | Gate::X(q) | Gate::Y(q) | Gate::Z(q) => vec![q],
            Gate::RX(q, _) | Gate::RY(q, _) | Gate::RZ(q, _) => vec![q],
            Gate::CX(c, t) | Gate::CZ(c, t) => vec![c, t],
        }
    }

    pub fn max_qubit(&self) -> usize {
        match *self {
            Gate::H(q) | Gate::X(q) | Gate::Y(q) | Gate::Z(q) => q,
            Gate::RX(q, _) | Gate::RY(q, _) | Gate::RZ(q, _) => q,
            Gate::CX(c, t) | Gate::CZ(c, t) => c.max(t),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Gate::H(q) => write!(f, "h q[{}]", q),
            Gate::X(q) => write!(f, "x q[{}]", q),
            Gate::Y(q) => write!(f, "y q[{}]", q),
            Gate::Z(q) => write!(f, "z q[{}]", q),
            Gate::RX(q, theta) => write!(f, "rx({:.4}) q[{}]", theta, q),
            Gate::RY(q, theta) => write!(f, "ry({:.4}) q[{}]", theta, q),
            Gate::RZ(q, theta) => write!(f, "rz({:.4}) q[{}]", theta, q),
            Gate::CX(c, t) => write!(f, "cx q[{}], q[{}]", c, t),
            Gate::CZ(c, t) => write!(f, "cz q[{}], q[{}]", c, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_qubits() {
        assert_eq!(Gate::H(3).qubits(), vec![3]);
        assert_eq!(Gate::CX(0, 2).qubits(), vec![0, 2]);
        assert_eq!(Gate::RY(1, 0.5).qubits(), vec![1]);
        assert_eq!(Gate::CZ(4, 1).max_qubit(), 4);
    }

    #[test]
    fn test_gate_display() {
        assert_eq!(Gate::CX(0, 1).to_string(), "cx q[0], q[1]");
        assert_eq!(Gate::RY(1, 0.5).to_string(), "ry(0.5000) q[1]");
    }
}
