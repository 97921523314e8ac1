//! Partial meet contraction.
//!
//! To contract a belief sequence by a target formula:
//!
//! 1. Compute the [remainders] of the sequence --- the maximal subsets of belief indicies whose
//!    formulas do not entail the target.
//! 2. Apply a [selection function](crate::selection) to the remainder set.
//! 3. Intersect the selected remainders --- the *partial meet*.
//! 4. Keep exactly the beliefs whose index is in the intersection, with their priorities.
//!
//! Two degenerate outcomes are distinguished from a genuine contraction:
//!
//! - If the target is not entailed by the full sequence, the only remainder is the full index
//!   set and the sequence passes through unchanged ([Vacuous](Contraction::Vacuous)).
//! - If the target is a tautology, every subset entails it and the remainder set is empty.
//!   No contraction can remove a tautology, and the sequence passes through unchanged
//!   ([Impossible](Contraction::Impossible)).
//!
//! Remainder enumeration is combinatorial --- up to 2ⁿ subsets for n beliefs --- and is
//! feasible only for the small bases the library is intended for.
//! Subsets are examined as bitmasks in decreasing order of size, so any subset of an already
//! found remainder is skipped without an entailment check.

use std::collections::BTreeSet;

use crate::{
    db::belief::Belief,
    misc::log::targets,
    procedures::entailment::entails,
    selection::Selection,
    structures::formula::Formula,
    types::err::{ErrorKind, SelectionError},
};

/// A set of belief indices whose formulas do not entail some target formula, and which is
/// maximal with this property among subsets of the sequence.
pub type Remainder = BTreeSet<usize>;

/// The outcome of contracting a belief sequence.
///
/// Each variant carries the resulting sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Contraction {
    /// The target was not entailed, so the sequence is unchanged.
    Vacuous(Vec<Belief>),

    /// The beliefs surviving the partial meet.
    Contracted(Vec<Belief>),

    /// The target is a tautology, so no contraction could remove it and the sequence is
    /// unchanged.
    Impossible(Vec<Belief>),
}

impl Contraction {
    /// The belief sequence resulting from the contraction.
    pub fn beliefs(&self) -> &[Belief] {
        match self {
            Self::Vacuous(beliefs) | Self::Contracted(beliefs) | Self::Impossible(beliefs) => {
                beliefs
            }
        }
    }

    /// The belief sequence resulting from the contraction, taking ownership.
    pub fn into_beliefs(self) -> Vec<Belief> {
        match self {
            Self::Vacuous(beliefs) | Self::Contracted(beliefs) | Self::Impossible(beliefs) => {
                beliefs
            }
        }
    }
}

/// All remainders of the given belief sequence with respect to `target`.
///
/// If `target` is not entailed by the full sequence the remainder set is the full index set
/// alone, and if `target` is a tautology the remainder set is empty.
pub fn remainders(beliefs: &[Belief], target: &Formula) -> Result<Vec<Remainder>, ErrorKind> {
    let count = beliefs.len();

    let mut masks: Vec<usize> = (0..1_usize << count).collect();
    masks.sort_by_key(|mask| std::cmp::Reverse(mask.count_ones()));

    let mut found: Vec<usize> = Vec::new();

    for mask in masks {
        if found.iter().any(|remainder| mask & !remainder == 0) {
            // A subset of a known remainder, so not maximal.
            continue;
        }

        // Every strict superset of the mask has been examined and entails the target, as
        // otherwise some remainder would contain the mask.
        // So, if the subset at the mask does not entail the target, it is maximal.
        let subset = beliefs
            .iter()
            .enumerate()
            .filter(|(index, _)| mask >> index & 1 == 1)
            .map(|(_, belief)| belief.formula());

        if !entails(subset, target)? {
            found.push(mask);
        }
    }

    log::info!(target: targets::CONTRACTION, "{} remainders for {target}", found.len());

    Ok(found
        .into_iter()
        .map(|mask| (0..count).filter(|index| mask >> index & 1 == 1).collect())
        .collect())
}

/// The partial meet contraction of the given belief sequence by `target`, under the given
/// selection function.
pub fn contract<S: Selection>(
    beliefs: &[Belief],
    target: &Formula,
    selection: &S,
) -> Result<Contraction, ErrorKind> {
    let remainder_set = remainders(beliefs, target)?;

    if remainder_set.is_empty() {
        // Even the empty subset entails the target.
        log::info!(target: targets::CONTRACTION, "Contraction by the tautology {target} is impossible");
        return Ok(Contraction::Impossible(beliefs.to_vec()));
    }

    let full_sequence: Remainder = (0..beliefs.len()).collect();
    if remainder_set.len() == 1 && remainder_set[0] == full_sequence {
        log::info!(target: targets::CONTRACTION, "{target} is not entailed, contraction is vacuous");
        return Ok(Contraction::Vacuous(beliefs.to_vec()));
    }

    let selected = selection.select(beliefs, &remainder_set);
    if selected.is_empty() {
        return Err(SelectionError::Empty.into());
    }

    log::info!(
        target: targets::CONTRACTION,
        "{} of {} remainders selected",
        selected.len(),
        remainder_set.len()
    );

    let meet = selected
        .iter()
        .skip(1)
        .fold(selected[0].clone(), |meet, remainder| {
            meet.intersection(remainder).copied().collect()
        });

    let kept = beliefs
        .iter()
        .enumerate()
        .filter(|(index, _)| meet.contains(index))
        .map(|(_, belief)| belief.clone())
        .collect();

    Ok(Contraction::Contracted(kept))
}
