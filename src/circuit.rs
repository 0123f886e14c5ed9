//! Feed-forward AND-inverter circuits and their evaluation.

use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::gate::Gate;
use crate::lead::{Lead, LeadKind};

/// A combinational circuit: a sequence of AND gates plus output leads.
///
/// Gate `k` may only read gate values `0..k`, and outputs may read any gate.
/// Evaluating gates in positional order is therefore always valid.
///
/// The gate list is shared (`Rc`) because the enumerator pairs one gate list
/// with many output assignments.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Circuit {
    num_inputs: usize,
    gates: Rc<[Gate]>,
    outputs: Box<[Lead]>,
}

impl Circuit {
    pub fn new(num_inputs: usize, gates: impl Into<Rc<[Gate]>>, outputs: impl Into<Box<[Lead]>>) -> Self {
        let circuit = Self {
            num_inputs,
            gates: gates.into(),
            outputs: outputs.into(),
        };
        debug_assert!(circuit.is_feed_forward(), "circuit is not feed-forward: {}", circuit);
        circuit
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn outputs(&self) -> &[Lead] {
        &self.outputs
    }

    /// Checks that every lead references an existing input or an earlier gate.
    pub fn is_feed_forward(&self) -> bool {
        let valid = |lead: &Lead, num_gates: usize| match lead.kind() {
            LeadKind::Const => true,
            LeadKind::Input => (lead.index() as usize) < self.num_inputs,
            LeadKind::Gate => (lead.index() as usize) < num_gates,
        };
        self.gates
            .iter()
            .enumerate()
            .all(|(k, gate)| gate.inputs().iter().all(|lead| valid(lead, k)))
            && self.outputs.iter().all(|lead| valid(lead, self.gates.len()))
    }

    /// Computes the output values for one input assignment.
    ///
    /// # Panics
    ///
    /// Panics if `input_vals.len() != self.num_inputs()`.
    pub fn eval(&self, input_vals: &[bool]) -> Vec<bool> {
        assert_eq!(input_vals.len(), self.num_inputs, "Input count mismatch");
        let mut gate_vals = Vec::with_capacity(self.gates.len());
        self.eval_gates(input_vals, &mut gate_vals);
        self.outputs.iter().map(|lead| lead.eval(input_vals, &gate_vals)).collect()
    }

    /// Fills `gate_vals` with the value of every gate, in positional order.
    ///
    /// The buffer is cleared first, so it can be reused across assignments.
    pub(crate) fn eval_gates(&self, input_vals: &[bool], gate_vals: &mut Vec<bool>) {
        gate_vals.clear();
        for gate in self.gates.iter() {
            let val = gate.eval(input_vals, gate_vals);
            gate_vals.push(val);
        }
    }
}

impl Display for Circuit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "circuit(inputs = {}", self.num_inputs)?;
        for (k, gate) in self.gates.iter().enumerate() {
            write!(f, ", g{} = {}", k, gate)?;
        }
        for (j, lead) in self.outputs.iter().enumerate() {
            write!(f, ", o{} = {}", j, lead)?;
        }
        write!(f, ")")
    }
}
