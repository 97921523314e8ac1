//! Formulas of propositional logic.
//!
//! A formula is a recursively defined, immutable term: an atom, or a connective applied to
//! subformulas.
//! The connectives are ¬, ∧, ∨, →, and ↔, with ∧ and ∨ taking any number of operands (an empty
//! conjunction is ⊤ and an empty disjunction is ⊥).
//!
//! Equality of formulas is semantic with respect to immediate operands:
//! - [And](Formula::And) and [Or](Formula::Or) compare as *sets* of their operands, so
//!   `p ∧ q` and `q ∧ p` are equal.
//! - [Equiv](Formula::Equiv) is symmetric in its two sides.
//!
//! Hashing is consistent with this equality --- operand hashes are deduplicated and combined
//! independent of order.
//!
//! An example:
//!
//! ```rust
//! # use doxa::structures::formula::Formula;
//! let p = Formula::atom("p");
//! let q = Formula::atom("q");
//!
//! let this_way = Formula::or(vec![p.clone(), q.clone()]);
//! let that_way = Formula::or(vec![q.clone(), p.clone()]);
//!
//! assert_eq!(this_way, that_way);
//! assert!(!this_way.evaluate(&std::collections::BTreeMap::new()));
//! ```

mod cnf;

use std::{
    collections::{BTreeMap, BTreeSet},
    hash::{Hash, Hasher},
};

use crate::structures::atom::Atom;

/// A formula of propositional logic.
#[derive(Clone, Debug)]
pub enum Formula {
    /// A propositional symbol.
    Atom(Atom),

    /// The negation of a formula.
    Not(Box<Formula>),

    /// The conjunction of any number of formulas.
    /// Empty, the conjunction is ⊤.
    And(Vec<Formula>),

    /// The disjunction of any number of formulas.
    /// Empty, the disjunction is ⊥.
    Or(Vec<Formula>),

    /// An implication, premise → conclusion.
    Implies(Box<Formula>, Box<Formula>),

    /// An equivalence, symmetric in its two sides.
    Equiv(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// The formula consisting of the atom with the given name.
    pub fn atom(name: impl Into<Atom>) -> Self {
        Self::Atom(name.into())
    }

    /// The conjunction of the given formulas.
    pub fn and(parts: Vec<Formula>) -> Self {
        Self::And(parts)
    }

    /// The disjunction of the given formulas.
    pub fn or(parts: Vec<Formula>) -> Self {
        Self::Or(parts)
    }

    /// The implication from `premise` to `conclusion`.
    pub fn implies(premise: Formula, conclusion: Formula) -> Self {
        Self::Implies(Box::new(premise), Box::new(conclusion))
    }

    /// The equivalence of `left` and `right`.
    pub fn equivalent(left: Formula, right: Formula) -> Self {
        Self::Equiv(Box::new(left), Box::new(right))
    }

    /// The negation of the formula.
    pub fn negate(&self) -> Self {
        Self::Not(Box::new(self.clone()))
    }

    /// The set of atoms which occur in the formula.
    pub fn symbols(&self) -> BTreeSet<Atom> {
        match self {
            Self::Atom(name) => BTreeSet::from([name.clone()]),

            Self::Not(inner) => inner.symbols(),

            Self::And(parts) | Self::Or(parts) => {
                parts.iter().flat_map(|part| part.symbols()).collect()
            }

            Self::Implies(left, right) | Self::Equiv(left, right) => {
                let mut symbols = left.symbols();
                symbols.append(&mut right.symbols());
                symbols
            }
        }
    }

    /// The value of the formula under the given assignment.
    ///
    /// Atoms missing from the assignment are read as false, so any assignment over the
    /// [symbols](Formula::symbols) of the formula is total for the purpose of evaluation.
    pub fn evaluate(&self, assignment: &BTreeMap<Atom, bool>) -> bool {
        match self {
            Self::Atom(name) => assignment.get(name).copied().unwrap_or(false),

            Self::Not(inner) => !inner.evaluate(assignment),

            Self::And(parts) => parts.iter().all(|part| part.evaluate(assignment)),

            Self::Or(parts) => parts.iter().any(|part| part.evaluate(assignment)),

            Self::Implies(premise, conclusion) => {
                !premise.evaluate(assignment) || conclusion.evaluate(assignment)
            }

            Self::Equiv(left, right) => left.evaluate(assignment) == right.evaluate(assignment),
        }
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Atom(a), Self::Atom(b)) => a == b,

            (Self::Not(a), Self::Not(b)) => a == b,

            (Self::And(a), Self::And(b)) | (Self::Or(a), Self::Or(b)) => same_operand_set(a, b),

            (Self::Implies(a, b), Self::Implies(c, d)) => a == c && b == d,

            (Self::Equiv(a, b), Self::Equiv(c, d)) => (a == c && b == d) || (a == d && b == c),

            _ => false,
        }
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Atom(name) => {
                state.write_u8(0);
                name.hash(state);
            }

            Self::Not(inner) => {
                state.write_u8(1);
                inner.hash(state);
            }

            Self::And(parts) => {
                state.write_u8(2);
                hash_operand_set(parts, state);
            }

            Self::Or(parts) => {
                state.write_u8(3);
                hash_operand_set(parts, state);
            }

            Self::Implies(premise, conclusion) => {
                state.write_u8(4);
                premise.hash(state);
                conclusion.hash(state);
            }

            // Symmetry, as with equality.
            Self::Equiv(left, right) => {
                state.write_u8(5);
                hash_operand_set([left.as_ref(), right.as_ref()], state);
            }
        }
    }
}

/// Whether two operand collections contain the same formulas, ignoring order and repetition.
fn same_operand_set(left: &[Formula], right: &[Formula]) -> bool {
    left.iter().all(|part| right.contains(part)) && right.iter().all(|part| left.contains(part))
}

/// Hashes a collection of operands as a set.
///
/// Operand hashes are taken independently, deduplicated, and written in sorted order, keeping
/// the hash of [And](Formula::And)/[Or](Formula::Or)/[Equiv](Formula::Equiv) nodes consistent
/// with their set-based equality.
fn hash_operand_set<'f, H: Hasher>(parts: impl IntoIterator<Item = &'f Formula>, state: &mut H) {
    let digests: BTreeSet<u64> = parts
        .into_iter()
        .map(|part| {
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            part.hash(&mut hasher);
            hasher.finish()
        })
        .collect();

    state.write_usize(digests.len());
    for digest in digests {
        state.write_u64(digest);
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(name) => write!(f, "{name}"),

            Self::Not(inner) => write!(f, "¬({inner})"),

            Self::And(parts) => write_connected(f, parts, " ∧ ", "⊤"),

            Self::Or(parts) => write_connected(f, parts, " ∨ ", "⊥"),

            Self::Implies(premise, conclusion) => write!(f, "({premise}) → ({conclusion})"),

            Self::Equiv(left, right) => write!(f, "({left}) ↔ ({right})"),
        }
    }
}

fn write_connected(
    f: &mut std::fmt::Formatter<'_>,
    parts: &[Formula],
    connective: &str,
    empty: &str,
) -> std::fmt::Result {
    if parts.is_empty() {
        return write!(f, "{empty}");
    }

    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            write!(f, "{connective}")?;
        }
        write!(f, "({part})")?;
    }

    Ok(())
}
