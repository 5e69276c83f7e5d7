use crate::Gate;

/// An ordered list of gates acting on a fixed register.
#[derive(Debug, Clone)]
pub struct Circuit {
    pub num_qubits: usize,
    pub gates: Vec<Gate>,
}

impl Circuit {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
        }
    }

    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Circuit depth under greedy layering: gates that share no qubit
    /// pack into the same layer.
    pub fn depth(&self) -> usize {
        let width = self
            .gates
            .iter()
            .map(|g| g.max_qubit() + 1)
            .max()
            .unwrap_or(0)
            .max(self.num_qubits);
        let mut level = vec![0usize; width];
        let mut depth = 0;

        for gate in &self.gates {
            let qubits = gate.qubits();
            let layer = qubits.iter().map(|&q| level[q]).max().unwrap_or(0) + 1;
            for &q in &qubits {
                level[q] = layer;
            }
            depth = depth.max(layer);
        }
        depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_circuit_depth() {
        assert_eq!(Circuit::new(3).depth(), 0);
    }

    #[test]
    fn test_depth_packs_disjoint_gates() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Gate::RY(0, 0.1));
        circuit.add_gate(Gate::RY(1, 0.2));
        circuit.add_gate(Gate::CX(0, 1));
        // Both rotations fit in one layer, the CX needs a second.
        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_depth_serial_on_one_qubit() {
        let mut circuit = Circuit::new(1);
        circuit.add_gate(Gate::H(0));
        circuit.add_gate(Gate::Z(0));
        circuit.add_gate(Gate::H(0));
        assert_eq!(circuit.depth(), 3);
    }
}
