use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};

use crate::lead::Lead;

/// Two-input AND gate.
///
/// Gates are ordered by the key `(input2, input1)`: the second input is
/// compared first. Since the enumerator only wires gate `k` to leads below
/// `Lead::from_gate(k)`, this makes every gate compare greater than any
/// gate it depends on.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Gate {
    input1: Lead,
    input2: Lead,
}

impl Gate {
    /// The smallest possible gate, `1 & 1`. Used as the floor for the first gate of a list.
    pub const MIN: Gate = Gate::and(Lead::one(), Lead::one());

    pub const fn and(a: Lead, b: Lead) -> Gate {
        Gate { input1: a, input2: b }
    }

    pub const fn input1(&self) -> Lead {
        self.input1
    }

    pub const fn input2(&self) -> Lead {
        self.input2
    }

    pub const fn inputs(&self) -> [Lead; 2] {
        [self.input1, self.input2]
    }

    fn key(&self) -> (Lead, Lead) {
        (self.input2, self.input1)
    }

    #[inline]
    pub fn eval(&self, input_vals: &[bool], gate_vals: &[bool]) -> bool {
        self.input1.eval(input_vals, gate_vals) && self.input2.eval(input_vals, gate_vals)
    }
}

impl Ord for Gate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Gate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} & {}", self.input1, self.input2)
    }
}

impl Debug for Gate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_and() {
        let a = Lead::from_input(0);
        let b = !Lead::from_input(1);
        let gate = Gate::and(a, b);
        assert_eq!(gate.inputs(), [a, b]);

        assert!(!gate.eval(&[false, false], &[]));
        assert!(gate.eval(&[true, false], &[]));
        assert!(!gate.eval(&[true, true], &[]));
        assert!(!gate.eval(&[false, true], &[]));
    }

    #[test]
    fn test_gate_order_compares_second_input_first() {
        let i0 = Lead::from_input(0);
        let i1 = Lead::from_input(1);
        let g0 = Lead::from_gate(0);

        // (g0, i0) has key (i0, g0), which is below (i0, i1)'s key (i1, i0)
        assert!(Gate::and(g0, i0) < Gate::and(i0, i1));
        assert!(Gate::and(i0, i1) < Gate::and(i0, g0));
        // i1 & i0 has key (i0, i1), below i0 & i1's key (i1, i0)
        assert!(Gate::and(i1, i0) < Gate::and(i0, i1));
    }

    #[test]
    fn test_min_gate() {
        let i0 = Lead::from_input(0);
        assert!(Gate::MIN < Gate::and(i0, !i0));
        assert!(Gate::MIN < Gate::and(Lead::zero(), Lead::one()));
    }

    #[test]
    fn test_display() {
        let gate = Gate::and(Lead::from_input(0), !Lead::from_gate(1));
        assert_eq!(gate.to_string(), "i0 & !g1");
        assert_eq!(format!("{:?}", gate), "(i0 & !g1)");
    }
}
