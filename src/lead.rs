use std::fmt::{Debug, Display, Formatter};
use std::ops::Not;

/// Source of a lead's value.
///
/// The declaration order is significant: it is the primary key of the
/// canonical [`Lead`] ordering (`Const < Input < Gate`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum LeadKind {
    /// Constant `true` (or `false`, when negated).
    Const,
    /// Primary input of the circuit.
    Input,
    /// Output of a previously placed gate.
    Gate,
}

/// A reference to a single Boolean value, optionally inverted.
///
/// Leads are ordered by `(kind, index, negate)`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Lead {
    kind: LeadKind,
    index: u32,
    negate: bool,
}

// Constructors
impl Lead {
    pub const fn new(kind: LeadKind, index: u32, negate: bool) -> Self {
        Self { kind, index, negate }
    }

    pub const fn one() -> Self {
        Self::new(LeadKind::Const, 0, false)
    }

    pub const fn zero() -> Self {
        Self::new(LeadKind::Const, 0, true)
    }

    pub const fn from_input(input: u32) -> Self {
        Self::new(LeadKind::Input, input, false)
    }

    pub const fn from_gate(gate: u32) -> Self {
        Self::new(LeadKind::Gate, gate, false)
    }

    pub const fn negated(self, negate: bool) -> Self {
        Self::new(self.kind, self.index, self.negate ^ negate)
    }
}

// Getters
impl Lead {
    pub const fn kind(&self) -> LeadKind {
        self.kind
    }

    /// Input or gate number. Always 0 for constants.
    pub const fn index(&self) -> u32 {
        self.index
    }

    pub const fn is_negated(&self) -> bool {
        self.negate
    }

    pub const fn is_const(&self) -> bool {
        matches!(self.kind, LeadKind::Const)
    }
}

impl Lead {
    /// Evaluates the lead against the circuit inputs and the gate values computed so far.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range for `input_vals` or `gate_vals`.
    /// Well-formed circuits never trigger this.
    #[inline]
    pub fn eval(&self, input_vals: &[bool], gate_vals: &[bool]) -> bool {
        let val = match self.kind {
            LeadKind::Const => true,
            LeadKind::Input => input_vals[self.index as usize],
            LeadKind::Gate => gate_vals[self.index as usize],
        };
        val ^ self.negate
    }
}

impl Not for Lead {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negated(true)
    }
}

impl Display for Lead {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let bang = if self.is_negated() { "!" } else { "" };
        match self.kind {
            LeadKind::Const => write!(f, "{}", !self.negate as u8),
            LeadKind::Input => write!(f, "{}i{}", bang, self.index),
            LeadKind::Gate => write!(f, "{}g{}", bang, self.index),
        }
    }
}

impl Debug for Lead {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const() {
        let zero = Lead::zero();
        let one = Lead::one();

        assert!(zero.is_const());
        assert!(one.is_const());

        assert_eq!(zero, !one);
        assert_eq!(one, !zero);
        assert!(zero.is_negated());
        assert!(!one.is_negated());

        assert!(one.eval(&[], &[]));
        assert!(!zero.eval(&[], &[]));
    }

    #[test]
    fn test_eval() {
        let inputs = [true, false];
        let gates = [false];

        assert!(Lead::from_input(0).eval(&inputs, &gates));
        assert!(!Lead::from_input(1).eval(&inputs, &gates));
        assert!(!(!Lead::from_input(0)).eval(&inputs, &gates));
        assert!(!Lead::from_gate(0).eval(&inputs, &gates));
        assert!((!Lead::from_gate(0)).eval(&inputs, &gates));
    }

    #[test]
    #[should_panic]
    fn test_eval_out_of_range() {
        Lead::from_gate(3).eval(&[true], &[false]);
    }

    #[test]
    fn test_order() {
        // kind first, then index, then negation
        assert!(Lead::zero() < Lead::from_input(0));
        assert!(Lead::one() < Lead::zero());
        assert!(!Lead::from_input(5) < Lead::from_gate(0));
        assert!(Lead::from_input(0) < !Lead::from_input(0));
        assert!(!Lead::from_input(0) < Lead::from_input(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Lead::one().to_string(), "1");
        assert_eq!(Lead::zero().to_string(), "0");
        assert_eq!(Lead::from_input(3).to_string(), "i3");
        assert_eq!((!Lead::from_gate(2)).to_string(), "!g2");
    }
}
