//! The belief database --- an ordered collection of prioritised beliefs.
//!
//! A belief pairs a formula with a priority, with higher priorities marking beliefs as more
//! important (more *entrenched*).
//! Every stored formula is in conjunctive normal form --- formulas are normalised on addition
//! --- so entailment checks read clauses off stored beliefs directly.
//!
//! Beliefs are kept in descending order of priority.
//! The order is a presentation convenience: entailment and contraction operate on the set of
//! formulas, and priorities bear on belief change only through the
//! [selection function](crate::selection).
//!
//! Contraction and revision replace the contents of the database wholesale --- the sequence is
//! read in full, a fresh sequence is computed, and [replace](BeliefDB::replace) swaps it in.
//! No operation observes a partially updated database.

use crate::{misc::log::targets, structures::formula::Formula};

/// The priority of a belief.
/// Higher is more entrenched.
pub type Priority = i64;

/// A formula paired with a priority.
///
/// The formula of a belief is always in conjunctive normal form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Belief {
    /// The formula of the belief, in conjunctive normal form.
    formula: Formula,

    /// The priority of the belief.
    priority: Priority,
}

impl Belief {
    /// A fresh belief holding the normal form of `formula`.
    pub fn new(formula: Formula, priority: Priority) -> Self {
        Belief {
            formula: formula.cnf(),
            priority,
        }
    }

    /// The formula of the belief.
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// The priority of the belief.
    pub fn priority(&self) -> Priority {
        self.priority
    }
}

impl std::fmt::Display for Belief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.priority, self.formula)
    }
}

/// The belief database.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BeliefDB {
    /// Beliefs, in descending order of priority.
    beliefs: Vec<Belief>,
}

impl BeliefDB {
    /// An empty database.
    pub fn new() -> Self {
        BeliefDB::default()
    }

    /// Adds a belief holding the normal form of `formula` with the given priority.
    pub fn add(&mut self, formula: Formula, priority: Priority) {
        let belief = Belief::new(formula, priority);
        log::info!(target: targets::BELIEF_DB, "Adding belief {belief}");

        self.beliefs.push(belief);
        self.sort();
    }

    /// Removes every belief whose formula is equal to the normal form of `formula`.
    ///
    /// Equality of formulas is semantic with respect to immediate operands, so, e.g., removing
    /// `q ∨ p` removes a belief added as `p ∨ q`.
    pub fn remove(&mut self, formula: &Formula) {
        let normal = formula.cnf();
        log::info!(target: targets::BELIEF_DB, "Removing beliefs in {normal}");

        self.beliefs.retain(|belief| belief.formula != normal);
    }

    /// Removes every belief from the database.
    pub fn clear(&mut self) {
        self.beliefs.clear();
    }

    /// Replaces the contents of the database with the given beliefs.
    ///
    /// Used by contraction and revision, which compute an entirely new membership sequence.
    pub fn replace(&mut self, beliefs: Vec<Belief>) {
        self.beliefs = beliefs;
        self.sort();
    }

    /// The beliefs of the database, in descending order of priority.
    pub fn beliefs(&self) -> &[Belief] {
        &self.beliefs
    }

    /// An iterator over the formulas of the database.
    pub fn formulas(&self) -> impl Iterator<Item = &Formula> {
        self.beliefs.iter().map(Belief::formula)
    }

    /// The number of beliefs in the database.
    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    /// Whether the database holds no beliefs.
    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    // Stable, so beliefs of equal priority keep their insertion order.
    fn sort(&mut self) {
        self.beliefs
            .sort_by(|a, b| b.priority.cmp(&a.priority));
    }
}

impl std::fmt::Display for BeliefDB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, belief) in self.beliefs.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{belief}")?;
        }

        Ok(())
    }
}
