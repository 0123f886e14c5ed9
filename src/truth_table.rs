//! Truth tables of multi-output Boolean functions.
//!
//! A function `f: {0,1}^n → {0,1}^m` is stored as a `2^n * m`-bit integer.
//! Row `r` is the output for the `r`-th input assignment, and output `j` of
//! row `r` lives at bit `r * m + j`.
//!
//! Assignments are enumerated as an `n`-bit binary counter with input `0` as
//! the most significant bit, so for `n = 2` the rows are `00, 01, 10, 11`
//! read as `(i0, i1)`.

use std::fmt::{Display, Formatter};

use num_bigint::BigUint;

use crate::circuit::Circuit;

/// Full truth table of a circuit: one `m`-bit row per input assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    num_inputs: usize,
    num_outputs: usize,
    bits: BigUint,
}

impl TruthTable {
    /// Number of distinct functions with `n` inputs and `m` outputs, `(2^m)^(2^n)`.
    pub fn total_count(num_inputs: usize, num_outputs: usize) -> BigUint {
        BigUint::from(1u32) << (num_outputs << num_inputs)
    }

    pub fn from_rows<I>(num_inputs: usize, num_outputs: usize, rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[bool]>,
    {
        let mut bits = BigUint::default();
        let mut count = 0;
        for (r, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), num_outputs, "Row {} has wrong width", r);
            for (j, &value) in row.iter().enumerate() {
                if value {
                    bits.set_bit((r * num_outputs + j) as u64, true);
                }
            }
            count += 1;
        }
        assert_eq!(count, 1usize << num_inputs, "Expected 2^{} rows", num_inputs);
        Self {
            num_inputs,
            num_outputs,
            bits,
        }
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    pub fn num_rows(&self) -> usize {
        1 << self.num_inputs
    }

    /// Packed representation, see the module docs for the bit layout.
    pub fn bits(&self) -> &BigUint {
        &self.bits
    }

    /// Value of output `output` on the `row`-th assignment.
    pub fn get(&self, row: usize, output: usize) -> bool {
        assert!(row < self.num_rows(), "Row index out of range");
        assert!(output < self.num_outputs, "Output index out of range");
        self.bits.bit((row * self.num_outputs + output) as u64)
    }

    pub fn row(&self, row: usize) -> Vec<bool> {
        (0..self.num_outputs).map(|j| self.get(row, j)).collect()
    }

    /// Unpacked view: `2^n` rows of `m` booleans, in assignment order.
    pub fn rows(&self) -> Vec<Vec<bool>> {
        (0..self.num_rows()).map(|r| self.row(r)).collect()
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.num_rows() {
            if r > 0 {
                writeln!(f)?;
            }
            for k in 0..self.num_inputs {
                write!(f, "{}", (r >> (self.num_inputs - 1 - k)) & 1)?;
            }
            write!(f, " |")?;
            for j in 0..self.num_outputs {
                write!(f, " {}", self.get(r, j) as u8)?;
            }
        }
        Ok(())
    }
}

/// Enumerates all `2^n` input assignments, with input `0` as the most significant bit.
pub fn assignments(num_inputs: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..1usize << num_inputs).map(move |r| (0..num_inputs).map(|k| (r >> (num_inputs - 1 - k)) & 1 == 1).collect())
}

/// Evaluates the circuit on every assignment and packs the results.
///
/// Outputs are written straight into 32-bit digits, reusing one input and
/// one gate buffer for all rows.
pub fn semantics(circuit: &Circuit) -> TruthTable {
    let num_inputs = circuit.num_inputs();
    let num_outputs = circuit.num_outputs();
    let num_rows = 1usize << num_inputs;
    let mut digits = vec![0u32; (num_rows * num_outputs + 31) / 32];
    let mut input_vals = vec![false; num_inputs];
    let mut gate_vals = Vec::with_capacity(circuit.num_gates());
    for r in 0..num_rows {
        for (k, val) in input_vals.iter_mut().enumerate() {
            *val = (r >> (num_inputs - 1 - k)) & 1 == 1;
        }
        circuit.eval_gates(&input_vals, &mut gate_vals);
        for (j, lead) in circuit.outputs().iter().enumerate() {
            if lead.eval(&input_vals, &gate_vals) {
                let bit = r * num_outputs + j;
                digits[bit / 32] |= 1 << (bit % 32);
            }
        }
    }
    TruthTable {
        num_inputs,
        num_outputs,
        bits: BigUint::new(digits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::gate::Gate;
    use crate::lead::Lead;

    #[test]
    fn test_total_count() {
        assert_eq!(TruthTable::total_count(1, 1), BigUint::from(4u32));
        assert_eq!(TruthTable::total_count(2, 1), BigUint::from(16u32));
        assert_eq!(TruthTable::total_count(2, 2), BigUint::from(256u32));
        assert_eq!(TruthTable::total_count(3, 0), BigUint::from(1u32));
        assert_eq!(TruthTable::total_count(0, 3), BigUint::from(8u32));
    }

    #[test]
    fn test_assignments_order() {
        let all: Vec<Vec<bool>> = assignments(2).collect();
        assert_eq!(
            all,
            vec![
                vec![false, false],
                vec![false, true],
                vec![true, false],
                vec![true, true],
            ]
        );
        assert_eq!(assignments(0).collect::<Vec<_>>(), vec![Vec::<bool>::new()]);
    }

    #[test]
    fn test_semantics_and() {
        let c = Circuit::new(2, vec![Gate::and(Lead::from_input(0), Lead::from_input(1))], vec![Lead::from_gate(0)]);
        let tt = semantics(&c);
        assert_eq!(tt.rows(), vec![vec![false], vec![false], vec![false], vec![true]]);
        assert_eq!(tt.bits(), &BigUint::from(0b1000u32));
    }

    #[test]
    fn test_semantics_input_order() {
        // i0 is the most significant bit of the row index.
        let c = Circuit::new(2, Vec::<Gate>::new(), vec![Lead::from_input(0), !Lead::from_input(1)]);
        let tt = semantics(&c);
        assert_eq!(tt.row(0), vec![false, true]);
        assert_eq!(tt.row(1), vec![false, false]);
        assert_eq!(tt.row(2), vec![true, true]);
        assert_eq!(tt.row(3), vec![true, false]);
    }

    #[test]
    fn test_semantics_matches_row_eval() {
        // 2^4 rows of 3 outputs span two 32-bit digits.
        let i = Lead::from_input;
        let gates = vec![
            Gate::and(i(0), !i(1)),
            Gate::and(i(2), i(3)),
            Gate::and(!Lead::from_gate(0), Lead::from_gate(1)),
        ];
        let outputs = vec![Lead::from_gate(2), !Lead::from_gate(0), i(3)];
        let c = Circuit::new(4, gates, outputs);
        let rows: Vec<Vec<bool>> = assignments(4).map(|input| c.eval(&input)).collect();
        let tt = semantics(&c);
        assert_eq!(tt, TruthTable::from_rows(4, 3, &rows));
        assert_eq!(tt.rows(), rows);
    }

    #[test]
    fn test_semantics_all_zero() {
        let c = Circuit::new(2, Vec::<Gate>::new(), vec![Lead::zero(), Lead::zero()]);
        let tt = semantics(&c);
        assert_eq!(tt.bits(), &BigUint::default());
        assert_eq!(tt, TruthTable::from_rows(2, 2, [[false, false]; 4]));
    }

    #[test]
    fn test_from_rows_matches_semantics() {
        let c = Circuit::new(1, Vec::<Gate>::new(), vec![!Lead::from_input(0)]);
        let expected = TruthTable::from_rows(1, 1, [[true], [false]]);
        assert_eq!(semantics(&c), expected);
    }

    #[test]
    #[should_panic(expected = "Expected 2^2 rows")]
    fn test_from_rows_wrong_count() {
        TruthTable::from_rows(2, 1, [[true], [false]]);
    }

    #[test]
    fn test_display() {
        let tt = TruthTable::from_rows(2, 1, [[false], [true], [true], [false]]);
        assert_eq!(tt.to_string(), "00 | 0\n01 | 1\n10 | 1\n11 | 0");
    }
}
