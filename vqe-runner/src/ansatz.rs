use crate::error::VqeError;
use std::fmt;
use svsim::{Circuit, Gate};

/// One operation in a parameterized circuit template: either a fixed gate
/// or a rotation reading its angle from a parameter slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnsatzOp {
    Fixed(Gate),
    Rx { qubit: usize, param: usize },
    Ry { qubit: usize, param: usize },
    Rz { qubit: usize, param: usize },
}

impl AnsatzOp {
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            AnsatzOp::Fixed(gate) => gate.qubits(),
            AnsatzOp::Rx { qubit, .. }
            | AnsatzOp::Ry { qubit, .. }
            | AnsatzOp::Rz { qubit, .. } => vec![qubit],
        }
    }
}

impl fmt::Display for AnsatzOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AnsatzOp::Fixed(gate) => write!(f, "{}", gate),
            AnsatzOp::Rx { qubit, param } => write!(f, "rx(θ{}) q[{}]", param, qubit),
            AnsatzOp::Ry { qubit, param } => write!(f, "ry(θ{}) q[{}]", param, qubit),
            AnsatzOp::Rz { qubit, param } => write!(f, "rz(θ{}) q[{}]", param, qubit),
        }
    }
}

/// A parameterized circuit template whose rotation angles are supplied at
/// bind time. Each rotation call allocates a fresh parameter slot.
#[derive(Debug, Clone)]
pub struct Ansatz {
    num_qubits: usize,
    ops: Vec<AnsatzOp>,
    param_count: usize,
}

impl Ansatz {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            ops: Vec::new(),
            param_count: 0,
        }
    }

    /// Hardware-efficient template: per layer, one Y-rotation on every
    /// qubit followed by a CNOT chain entangling each qubit with its
    /// neighbor.
    pub fn hardware_efficient(num_qubits: usize, num_layers: usize) -> Self {
        let mut ansatz = Self::new(num_qubits);
        for _ in 0..num_layers {
            for q in 0..num_qubits {
                ansatz.ry(q);
            }
            for q in 0..num_qubits.saturating_sub(1) {
                ansatz.gate(Gate::CX(q, q + 1));
            }
        }
        ansatz
    }

    pub fn gate(&mut self, gate: Gate) {
        self.ops.push(AnsatzOp::Fixed(gate));
    }

    pub fn rx(&mut self, qubit: usize) {
        let param = self.alloc_param();
        self.ops.push(AnsatzOp::Rx { qubit, param });
    }

    pub fn ry(&mut self, qubit: usize) {
        let param = self.alloc_param();
        self.ops.push(AnsatzOp::Ry { qubit, param });
    }

    pub fn rz(&mut self, qubit: usize) {
        let param = self.alloc_param();
        self.ops.push(AnsatzOp::Rz { qubit, param });
    }

    fn alloc_param(&mut self) -> usize {
        let param = self.param_count;
        self.param_count += 1;
        param
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn num_parameters(&self) -> usize {
        self.param_count
    }

    pub fn ops(&self) -> &[AnsatzOp] {
        &self.ops
    }

    /// Substitutes parameter values into the template.
    pub fn bind(&self, params: &[f64]) -> Result<Circuit, VqeError> {
        if params.len() != self.param_count {
            return Err(VqeError::ParameterCount {
                expected: self.param_count,
                got: params.len(),
            });
        }
        let mut circuit = Circuit::new(self.num_qubits);
        for op in &self.ops {
            let gate = match *op {
                AnsatzOp::Fixed(gate) => gate,
                AnsatzOp::Rx { qubit, param } => Gate::RX(qubit, params[param]),
                AnsatzOp::Ry { qubit, param } => Gate::RY(qubit, params[param]),
                AnsatzOp::Rz { qubit, param } => Gate::RZ(qubit, params[param]),
            };
            circuit.add_gate(gate);
        }
        Ok(circuit)
    }

    /// Template depth under greedy layering; binding does not change it.
    pub fn depth(&self) -> usize {
        let width = self
            .ops
            .iter()
            .flat_map(|op| op.qubits())
            .max()
            .map_or(self.num_qubits, |q| (q + 1).max(self.num_qubits));
        let mut level = vec![0usize; width];
        let mut depth = 0;

        for op in &self.ops {
            let qubits = op.qubits();
            let layer = qubits.iter().map(|&q| level[q]).max().unwrap_or(0) + 1;
            for &q in &qubits {
                level[q] = layer;
            }
            depth = depth.max(layer);
        }
        depth
    }

    /// Operations touching more than one qubit, a proxy for the
    /// entangling-gate count.
    pub fn multi_qubit_ops(&self) -> usize {
        self.ops.iter().filter(|op| op.qubits().len() > 1).count()
    }
}

impl fmt::Display for Ansatz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ansatz on {} qubit(s), {} parameter(s):",
            self.num_qubits, self.param_count
        )?;
        for op in &self.ops {
            writeln!(f, "  {}", op)?;
        }
        Ok(())
    }
}
