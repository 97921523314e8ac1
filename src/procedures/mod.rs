//! Procedures for belief change, factored as pure functions over belief sequences.
//!
//! - [entailment] decides whether a collection of formulas entails a query, by resolution.
//! - [contraction] computes remainders and the partial meet contraction of a belief sequence.
//! - [revision] incorporates a new belief via the Levi identity.
//!
//! Each procedure reads its inputs in full and returns a fresh value --- none holds or mutates
//! shared state.
//! The [context](crate::context) ties the procedures to a belief database.

pub mod contraction;
pub mod entailment;
pub mod revision;
