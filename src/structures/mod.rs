//! Structures, mostly corresponding to things in the literature on belief change.
//!
//! Roughly, from the bottom up:
//! - An [atom](atom) is a named propositional symbol.
//! - A [formula](formula) is built from atoms with ¬, ∧, ∨, →, and ↔.
//! - A [literal](literal) is an atom paired with a polarity.
//! - A [clause](clause) is a set of literals, interpreted as their disjunction.
//!
//! Formulas are the external face of the library, while literals and clauses are the
//! representation entailment works over.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
