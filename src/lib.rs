//! # aig-enum: minimal And-Inverter Graphs by exhaustive enumeration
//!
//! **`aig-enum`** answers, for small numbers of inputs `n` and outputs `m`, how many two-input AND gates
//! are needed to realize every Boolean function `{0,1}^n → {0,1}^m`, when inverters are free.
//!
//! ## How it works
//!
//! For each gate budget `t = 0, 1, 2, ...` the [`enumerate`] module produces every circuit with exactly `t` gates.
//! Each circuit is mapped to its truth table by [`truth_table::semantics`], and the [`explore::Explorer`] keeps
//! the set of truth tables seen so far. A function first discovered at budget `t` needs exactly `t` gates.
//!
//! Enumeration is canonical: AND-commutativity and reorderings of independent gates are broken by a
//! total order on gates, so each gate *set* is visited once.
//!
//! ## Basic Usage
//!
//! ```rust
//! use aig_enum::explore::{explore, ExploreOptions};
//! use aig_enum::truth_table::TruthTable;
//!
//! // All 16 two-input functions are found within 3 gates.
//! let explorer = explore(2, 1, &ExploreOptions::default(), |p| {
//!     println!("{} gates: {} functions", p.num_gates, p.num_funcs);
//! });
//! assert!(explorer.is_complete());
//!
//! let xor = TruthTable::from_rows(2, 1, [[false], [true], [true], [false]]);
//! assert_eq!(explorer.min_gates(&xor), Some(3));
//! ```
//!
//! ## Core Components
//!
//! - **[`lead`]**: value sources (constant, input, gate output) with optional inversion.
//! - **[`gate`]**: two-input AND gates and their canonical ordering.
//! - **[`circuit`]**: feed-forward circuits and their evaluation.
//! - **[`enumerate`]**: lazy, duplicate-free generators of leads, gates, gate lists, outputs and circuits.
//! - **[`truth_table`]**: bit-packed truth tables.
//! - **[`explore`]**: the search driver.

pub mod circuit;
pub mod enumerate;
pub mod explore;
pub mod gate;
pub mod lead;
pub mod truth_table;
