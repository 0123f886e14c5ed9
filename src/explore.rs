//! Search driver: discovers which functions are realizable with `t` gates, for `t = 0, 1, 2, ...`.
//!
//! The explorer is the only stateful component. It keeps the set of
//! discovered truth tables, each with the first circuit that realized it.
//! Since gate counts are visited in increasing order, that first circuit is
//! a minimum-gate witness.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::{debug, info};
use num_bigint::BigUint;

use crate::circuit::Circuit;
use crate::enumerate::circuits;
use crate::truth_table::{semantics, TruthTable};

#[derive(Debug, Clone, Default)]
pub struct ExploreOptions {
    /// Stop after this gate count even if not every function has been found.
    pub max_gates: Option<usize>,
}

/// Progress record emitted after each gate-count pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Gate count of the pass that just finished.
    pub num_gates: usize,
    /// Distinct functions discovered so far.
    pub num_funcs: usize,
    /// Circuits visited so far, over all passes.
    pub num_circuits: u64,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct Explorer {
    num_inputs: usize,
    num_outputs: usize,
    next_gates: usize,
    num_circuits: u64,
    total: BigUint,
    funcs: HashMap<TruthTable, Circuit>,
    start: Instant,
}

impl Explorer {
    /// # Panics
    ///
    /// Panics if `num_inputs` does not fit a row index, or `2^n * m` does not fit a bit index.
    pub fn new(num_inputs: usize, num_outputs: usize) -> Self {
        assert!(num_inputs < usize::BITS as usize, "Too many inputs: {}", num_inputs);
        assert!(
            num_outputs.checked_mul(1usize << num_inputs).is_some(),
            "Truth table too large: {} inputs, {} outputs",
            num_inputs,
            num_outputs
        );
        Self {
            num_inputs,
            num_outputs,
            next_gates: 0,
            num_circuits: 0,
            total: TruthTable::total_count(num_inputs, num_outputs),
            funcs: HashMap::new(),
            start: Instant::now(),
        }
    }

    /// Gate count the next [`step`][Self::step] will enumerate.
    pub fn next_gates(&self) -> usize {
        self.next_gates
    }

    pub fn num_funcs(&self) -> usize {
        self.funcs.len()
    }

    pub fn num_circuits(&self) -> u64 {
        self.num_circuits
    }

    /// Whether every one of the `(2^m)^(2^n)` functions has been discovered.
    pub fn is_complete(&self) -> bool {
        BigUint::from(self.funcs.len()) >= self.total
    }

    /// First (hence minimum-gate) circuit found for `func`.
    pub fn witness(&self, func: &TruthTable) -> Option<&Circuit> {
        self.funcs.get(func)
    }

    /// Minimum number of gates needed for `func`, if it has been discovered.
    pub fn min_gates(&self, func: &TruthTable) -> Option<usize> {
        self.witness(func).map(|c| c.num_gates())
    }

    pub fn functions(&self) -> impl Iterator<Item = (&TruthTable, &Circuit)> {
        self.funcs.iter()
    }

    /// Enumerates every circuit with the next gate count and records its function.
    pub fn step(&mut self) -> Progress {
        let num_gates = self.next_gates;
        debug!(
            "step(num_inputs = {}, num_outputs = {}, num_gates = {})",
            self.num_inputs, self.num_outputs, num_gates
        );
        let mut new_funcs = 0;
        for circuit in circuits(self.num_inputs, self.num_outputs, num_gates) {
            self.num_circuits += 1;
            if let Entry::Vacant(e) = self.funcs.entry(semantics(&circuit)) {
                e.insert(circuit);
                new_funcs += 1;
            }
        }
        self.next_gates += 1;

        let progress = self.progress(num_gates);
        info!(
            "{} gates: {} new, {} functions, {} circuits",
            num_gates, new_funcs, progress.num_funcs, progress.num_circuits
        );
        progress
    }

    fn progress(&self, num_gates: usize) -> Progress {
        Progress {
            num_gates,
            num_funcs: self.funcs.len(),
            num_circuits: self.num_circuits,
            elapsed: self.start.elapsed(),
        }
    }

    /// Steps until every function is discovered or the gate bound is passed.
    ///
    /// `sink` receives one record per step. Without a `max_gates` bound this
    /// only returns once the search is complete.
    pub fn run(&mut self, options: &ExploreOptions, mut sink: impl FnMut(&Progress)) {
        while !self.is_complete() && options.max_gates.map_or(true, |max| self.next_gates <= max) {
            let progress = self.step();
            sink(&progress);
        }
        if self.is_complete() {
            info!("All {} functions discovered", self.total);
        }
    }
}

/// Explores the minimal AIGs for all functions with `num_inputs` inputs and `num_outputs` outputs.
pub fn explore(num_inputs: usize, num_outputs: usize, options: &ExploreOptions, sink: impl FnMut(&Progress)) -> Explorer {
    let mut explorer = Explorer::new(num_inputs, num_outputs);
    explorer.run(options, sink);
    explorer
}
