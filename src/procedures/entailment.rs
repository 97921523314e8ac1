//! Entailment, decided by refutation through resolution.
//!
//! A collection of formulas entails a query exactly when the clauses of the formulas together
//! with the clauses of the negated query are unsatisfiable.
//! Unsatisfiability is established by saturation: resolving pairs of clauses holding
//! complementary literals until the empty clause is derived, or until no clause not already
//! known can be derived.
//!
//! Saturation terminates --- only finitely many clauses exist over a finite collection of atoms
//! and the clause set only grows --- though the worst case is exponential in the number of
//! clauses, and no budget is imposed here.
//! A caller wishing to bound the cost of a query should impose an external budget and treat
//! exhaustion as undecided.
//!
//! An example:
//!
//! ```rust
//! # use doxa::procedures::entailment::entails;
//! # use doxa::structures::formula::Formula;
//! let p = Formula::atom("p");
//! let q = Formula::atom("q");
//!
//! let base = [p.clone(), Formula::implies(p.clone(), q.clone())];
//!
//! assert_eq!(entails(&base, &q), Ok(true));
//! assert_eq!(entails(&base, &q.negate()), Ok(false));
//! ```

use std::collections::BTreeSet;

use crate::{
    misc::log::targets,
    structures::{
        clause::{extract_clauses, Clause},
        formula::Formula,
    },
    types::err::ErrorKind,
};

/// Whether the given formulas entail `query` in classical propositional logic.
///
/// The formulas are normalised defensively --- passing formulas already in conjunctive normal
/// form (e.g. those of a [BeliefDB](crate::db::belief::BeliefDB)) costs a no-op rewrite.
///
/// An error is only possible if clause extraction meets a malformed normal form, which
/// [cnf](Formula::cnf) does not produce.
pub fn entails<'f>(
    base: impl IntoIterator<Item = &'f Formula>,
    query: &Formula,
) -> Result<bool, ErrorKind> {
    let mut clauses: BTreeSet<Clause> = BTreeSet::new();

    for formula in base {
        note_clauses(&formula.cnf(), &mut clauses)?;
    }
    note_clauses(&query.negate().cnf(), &mut clauses)?;

    Ok(saturate(clauses))
}

/// Extracts the clauses of `cnf` into `clauses`, dropping tautologies.
fn note_clauses(cnf: &Formula, clauses: &mut BTreeSet<Clause>) -> Result<(), ErrorKind> {
    for clause in extract_clauses(cnf)? {
        if !clause.is_tautology() {
            let _ = clauses.insert(clause);
        }
    }

    Ok(())
}

/// Saturates the clause set under resolution.
///
/// Returns true if the empty clause is derived, i.e. if the clause set is unsatisfiable, and
/// false if the set saturates without it.
fn saturate(mut clauses: BTreeSet<Clause>) -> bool {
    if clauses.iter().any(Clause::is_empty) {
        return true;
    }

    loop {
        let mut fresh: BTreeSet<Clause> = BTreeSet::new();

        {
            let known: Vec<&Clause> = clauses.iter().collect();

            for (index, first) in known.iter().enumerate() {
                for second in &known[index + 1..] {
                    for resolvent in resolvents(first, second) {
                        if resolvent.is_empty() {
                            log::info!(target: targets::RESOLUTION, "Empty clause from {first} and {second}");
                            return true;
                        }

                        if resolvent.is_tautology() || clauses.contains(&resolvent) {
                            continue;
                        }

                        log::trace!(target: targets::RESOLUTION, "Resolvent {resolvent} from {first} and {second}");
                        let _ = fresh.insert(resolvent);
                    }
                }
            }
        }

        if fresh.is_empty() {
            log::trace!(target: targets::RESOLUTION, "Saturated at {} clauses", clauses.len());
            return false;
        }

        clauses.extend(fresh);
    }
}

/// All resolvents of a pair of clauses, one for each atom on which the pair holds complementary
/// literals.
fn resolvents(first: &Clause, second: &Clause) -> Vec<Clause> {
    first
        .literals()
        .filter(|literal| second.contains(&literal.negate()))
        .map(|literal| first.resolve_on(second, literal.atom()))
        .collect()
}
