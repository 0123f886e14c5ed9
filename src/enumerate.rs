//! Canonical, duplicate-free enumeration of AND-inverter circuits.
//!
//! Every generator here is a lazy, single-pass iterator. Dropping it is the
//! only cancellation needed.
//!
//! Two symmetries are broken during enumeration:
//!
//! - **Commutativity of AND.** A gate takes an *unordered* pair of distinct
//!   leads, so `a & b` and `b & a` are produced once, and `a & a` never.
//! - **Reordering of independent gates.** Each gate of a list must compare
//!   strictly greater (see [`Gate`]'s ordering) than the gate before it, so
//!   every set of gates that could be placed in several orders is produced in
//!   exactly one of them.
//!
//! Without these, the search space for `n` inputs, `m` outputs and `t` gates
//! is roughly `(2(n+t+1))^(2t+m)`.

use std::iter;
use std::rc::Rc;

use log::debug;

use crate::circuit::Circuit;
use crate::gate::Gate;
use crate::lead::Lead;

/// Enumerates leads: all non-negated leads first, then all negated ones.
///
/// Within each half the order is: the constant (only when `allow_const`),
/// inputs `0..num_inputs`, then gates `0..num_gates`.
pub fn leads(num_inputs: usize, num_gates: usize, allow_const: bool) -> impl Iterator<Item = Lead> {
    [false, true].into_iter().flat_map(move |negate| {
        let constant = allow_const.then_some(Lead::one());
        let inputs = (0..num_inputs as u32).map(Lead::from_input);
        let gates = (0..num_gates as u32).map(Lead::from_gate);
        constant.into_iter().chain(inputs).chain(gates).map(move |lead| lead.negated(negate))
    })
}

/// Enumerates all candidate gates for position `num_prev_gates` whose key is strictly above `floor`.
///
/// Constants are never used as gate inputs.
pub fn gates(num_inputs: usize, num_prev_gates: usize, floor: Gate) -> Gates {
    Gates::new(leads(num_inputs, num_prev_gates, false).collect(), floor)
}

/// Iterator over the unordered pairs of distinct leads from a pool, kept above a floor gate.
///
/// Pairs are produced in combination order: `(pool[i], pool[j])` for `i < j`,
/// lexicographically in `(i, j)`.
#[derive(Debug, Clone)]
pub struct Gates {
    pool: Vec<Lead>,
    floor: Gate,
    i: usize,
    j: usize,
}

impl Gates {
    fn new(pool: Vec<Lead>, floor: Gate) -> Self {
        Self { pool, floor, i: 0, j: 1 }
    }
}

impl Iterator for Gates {
    type Item = Gate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.i + 1 < self.pool.len() {
            if self.j >= self.pool.len() {
                self.i += 1;
                self.j = self.i + 1;
                continue;
            }
            let gate = Gate::and(self.pool[self.i], self.pool[self.j]);
            self.j += 1;
            if gate > self.floor {
                return Some(gate);
            }
        }
        None
    }
}

/// Enumerates all canonical gate lists of exactly `num_gates` gates.
///
/// Each list is strictly increasing in gate order. A list of length `t` is
/// an extension of a list of length `t - 1` whose last gate acts as the floor
/// for the new one.
pub fn gate_lists(num_inputs: usize, num_gates: usize) -> Box<dyn Iterator<Item = Vec<Gate>>> {
    if num_gates == 0 {
        return Box::new(iter::once(Vec::new()));
    }
    debug!("gate_lists(num_inputs = {}, num_gates = {})", num_inputs, num_gates);
    let prev_gates = num_gates - 1;
    Box::new(gate_lists(num_inputs, prev_gates).flat_map(move |prefix| {
        let floor = prefix.last().copied().unwrap_or(Gate::MIN);
        gates(num_inputs, prev_gates, floor).map(move |gate| {
            let mut list = Vec::with_capacity(prefix.len() + 1);
            list.extend_from_slice(&prefix);
            list.push(gate);
            list
        })
    }))
}

/// Enumerates all output assignments: the Cartesian power of the lead pool.
///
/// Each of the `num_outputs` positions independently picks any lead, constants
/// included. The last position varies fastest. Zero outputs yields a single
/// empty assignment.
pub fn outputs(num_inputs: usize, num_outputs: usize, num_gates: usize) -> Outputs {
    Outputs::new(leads(num_inputs, num_gates, true).collect(), num_outputs)
}

/// Odometer over `pool^len`.
#[derive(Debug, Clone)]
pub struct Outputs {
    pool: Vec<Lead>,
    digits: Vec<usize>,
    done: bool,
}

impl Outputs {
    fn new(pool: Vec<Lead>, len: usize) -> Self {
        let done = pool.is_empty() && len > 0;
        Self {
            pool,
            digits: vec![0; len],
            done,
        }
    }
}

impl Iterator for Outputs {
    type Item = Vec<Lead>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.digits.iter().map(|&d| self.pool[d]).collect();

        // Advance, carrying from the last position.
        self.done = true;
        for d in self.digits.iter_mut().rev() {
            *d += 1;
            if *d < self.pool.len() {
                self.done = false;
                break;
            }
            *d = 0;
        }

        Some(item)
    }
}

/// Enumerates every circuit with exactly `num_gates` gates.
///
/// Callers looking for minimal realizations iterate `num_gates` upward.
pub fn circuits(num_inputs: usize, num_outputs: usize, num_gates: usize) -> impl Iterator<Item = Circuit> {
    gate_lists(num_inputs, num_gates).flat_map(move |list| {
        let list: Rc<[Gate]> = list.into();
        outputs(num_inputs, num_outputs, num_gates).map(move |outs| Circuit::new(num_inputs, Rc::clone(&list), outs))
    })
}
