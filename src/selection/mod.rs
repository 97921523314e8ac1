//! Selection functions over remainder sets.
//!
//! Partial meet contraction is parameterised by a choice of which remainders to intersect.
//! Selecting every remainder gives the most conservative contraction, while narrower
//! selections retain more of the base.
//!
//! A selection function is a pure function from a remainder set to a subset of it, and is
//! obliged to select *something* whenever there is something to select --- an empty selection
//! from a nonempty remainder set is an [error](crate::types::err::SelectionError).

use crate::{
    db::belief::{Belief, Priority},
    procedures::contraction::Remainder,
};

/// A choice of remainders to intersect during contraction.
pub trait Selection {
    /// A nonempty subset of `remainders`, when `remainders` is nonempty.
    ///
    /// The belief sequence the remainders index into is supplied for policies which weigh
    /// beliefs, e.g. by priority.
    fn select(&self, beliefs: &[Belief], remainders: &[Remainder]) -> Vec<Remainder>;
}

/// Selects every remainder.
///
/// The baseline policy: the intersection over all remainders keeps only beliefs no maximal
/// non-entailing subset would give up.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectAll;

impl Selection for SelectAll {
    fn select(&self, _beliefs: &[Belief], remainders: &[Remainder]) -> Vec<Remainder> {
        remainders.to_vec()
    }
}

/// Selects the remainders which retain the greatest total priority.
///
/// The standard epistemic entrenchment reading of priorities: a remainder which gives up an
/// entrenched belief is passed over whenever some remainder gives up less.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByPriority;

impl Selection for ByPriority {
    fn select(&self, beliefs: &[Belief], remainders: &[Remainder]) -> Vec<Remainder> {
        let retained = |remainder: &Remainder| {
            remainder
                .iter()
                .map(|&index| beliefs[index].priority())
                .sum::<Priority>()
        };

        let Some(best) = remainders.iter().map(retained).max() else {
            return Vec::new();
        };

        remainders
            .iter()
            .filter(|&remainder| retained(remainder) == best)
            .cloned()
            .collect()
    }
}
