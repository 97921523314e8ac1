//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! A clause holds its literals as an ordered set, so repeated literals collapse and two clauses
//! with the same literals are equal regardless of how they were built.
//!
//! - The empty clause is always false (never true).
//! - A clause containing an atom with both polarities is a tautology.
//!
//! Clauses are obtained from formulas in conjunctive normal form via [extract_clauses]:
//!
//! ```rust
//! # use doxa::structures::clause::extract_clauses;
//! # use doxa::structures::formula::Formula;
//! # use doxa::structures::literal::Literal;
//! // (p ∨ ¬q) ∧ r
//! let formula = Formula::and(vec![
//!     Formula::or(vec![Formula::atom("p"), Formula::atom("q").negate()]),
//!     Formula::atom("r"),
//! ]);
//!
//! let clauses = extract_clauses(&formula).unwrap();
//!
//! assert_eq!(clauses.len(), 2);
//! assert!(clauses[0].contains(&Literal::new("p", true)));
//! assert!(clauses[0].contains(&Literal::new("q", false)));
//! assert!(clauses[1].contains(&Literal::new("r", true)));
//! ```

use std::collections::BTreeSet;

use crate::{
    misc::log::targets,
    structures::{atom::Atom, formula::Formula, literal::Literal},
    types::err::{ErrorKind, ExtractionError},
};

/// A set of literals, interpreted as their disjunction.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// Whether the clause has no literals.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The number of (distinct) literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the given literal is in the clause.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// An iterator over the literals of the clause, in order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// An iterator over the atoms of the clause.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.literals.iter().map(Literal::atom)
    }

    /// Whether the clause contains some atom with both polarities.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .any(|literal| self.literals.contains(&literal.negate()))
    }

    /// The resolvent of the clause with `other` on `atom`: the union of the literals of both,
    /// less every literal on `atom`.
    ///
    /// Meaningful when the clause and `other` hold complementary literals on `atom` and neither
    /// is a tautology, in which case `atom` occurs with a single polarity on each side.
    pub fn resolve_on(&self, other: &Clause, atom: &Atom) -> Clause {
        self.literals
            .iter()
            .chain(other.literals.iter())
            .filter(|literal| literal.atom() != atom)
            .cloned()
            .collect()
    }

    /// Some string representation of the clause.
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause {
            literals: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "⊥");
        }

        for (index, literal) in self.literals.iter().enumerate() {
            if index > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{literal}")?;
        }

        Ok(())
    }
}

/// The clauses of a formula in conjunctive normal form.
///
/// A top-level conjunction contributes one clause per operand, and any other formula is a
/// single clause.
/// Within a clause, a disjunction contributes one literal per operand, and any other formula is
/// a single literal.
///
/// Formulas produced by [cnf](Formula::cnf) always have this shape.
/// Still, the shape is checked, and a node in literal position which is neither an atom nor a
/// negated atom is an [ExtractionError].
pub fn extract_clauses(cnf: &Formula) -> Result<Vec<Clause>, ErrorKind> {
    let sources: Vec<&Formula> = match cnf {
        Formula::And(parts) => parts.iter().collect(),
        other => vec![other],
    };

    let mut clauses = Vec::with_capacity(sources.len());

    for source in sources {
        let clause = match source {
            Formula::Or(parts) => parts
                .iter()
                .map(literal_of)
                .collect::<Result<Clause, _>>()?,
            other => [literal_of(other)?].into_iter().collect(),
        };
        clauses.push(clause);
    }

    Ok(clauses)
}

/// The literal a formula in literal position stands for.
fn literal_of(formula: &Formula) -> Result<Literal, ErrorKind> {
    match formula {
        Formula::Atom(name) => Ok(Literal::new(name.clone(), true)),

        Formula::Not(inner) => match inner.as_ref() {
            Formula::Atom(name) => Ok(Literal::new(name.clone(), false)),
            _ => {
                log::error!(target: targets::EXTRACTION, "Non-literal in clause: {formula}");
                Err(ExtractionError::NonLiteral(formula.clone()).into())
            }
        },

        _ => {
            log::error!(target: targets::EXTRACTION, "Non-literal in clause: {formula}");
            Err(ExtractionError::NonLiteral(formula.clone()).into())
        }
    }
}
