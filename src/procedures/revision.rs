//! Revision, via the Levi identity.
//!
//! To revise a belief sequence by a formula: contract the sequence by the *negation* of the
//! formula, and then add the formula.
//! Contraction clears away whatever would contradict the new belief, so the revised sequence is
//! consistent so long as the new belief itself is.

use crate::{
    db::belief::{Belief, Priority},
    misc::log::targets,
    procedures::contraction::contract,
    reports::Report,
    selection::Selection,
    structures::formula::Formula,
    types::err::ErrorKind,
};

/// The outcome of revising a belief sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Revision {
    /// The revised belief sequence.
    pub beliefs: Vec<Belief>,

    /// The report of the contraction by the negated formula.
    pub report: Report,
}

/// The revision of the given belief sequence by `formula`, added with the given priority,
/// under the given selection function.
pub fn revise<S: Selection>(
    beliefs: &[Belief],
    formula: &Formula,
    priority: Priority,
    selection: &S,
) -> Result<Revision, ErrorKind> {
    log::info!(target: targets::REVISION, "Revising by {formula}");

    let contraction = contract(beliefs, &formula.negate(), selection)?;
    let report = Report::from(&contraction);

    let mut revised = contraction.into_beliefs();
    revised.push(Belief::new(formula.clone(), priority));
    revised.sort_by(|a, b| b.priority().cmp(&a.priority()));

    Ok(Revision {
        beliefs: revised,
        report,
    })
}
