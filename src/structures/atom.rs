//! Atoms, i.e. propositional symbols.
//!
//! Atoms are represented by their name.
//! A richer representation (e.g. interned symbols) would suit larger bases, though names keep
//! construction and inspection of formulas direct, and bases are expected to be small.

/// The representation of an atom.
pub type Atom = String;
