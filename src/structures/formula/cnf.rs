//! Normalisation of formulas to conjunctive normal form.
//!
//! The normal form is built only from conjunction, disjunction, and literals, and satisfies:
//!
//! - Negation wraps nothing but atoms.
//! - No conjunction is an immediate operand of a conjunction, and likewise for disjunctions.
//! - No conjunction is an immediate operand of a disjunction.
//!
//! Normalisation preserves the value of the formula under every assignment and is idempotent.
//!
//! Rewriting is a structural recursion: implications and equivalences are expanded, negation is
//! pushed inwards by double negation elimination and De Morgan's laws, operands are flattened,
//! and disjunctions are distributed over conjunctions.
//! Distribution picks a single conjunction at a time and renormalises each disjunction it
//! produces, so disjunctions holding several conjunctions resolve over a few rounds of
//! recursion rather than one combined step.

use crate::structures::formula::Formula;

impl Formula {
    /// The formula, normalised to conjunctive normal form.
    ///
    /// ```rust
    /// # use doxa::structures::formula::Formula;
    /// let p = Formula::atom("p");
    /// let q = Formula::atom("q");
    /// let r = Formula::atom("r");
    ///
    /// // p ∨ (q ∧ r) normalises to (p ∨ q) ∧ (p ∨ r).
    /// let formula = Formula::or(vec![p.clone(), Formula::and(vec![q.clone(), r.clone()])]);
    ///
    /// let expected = Formula::and(vec![
    ///     Formula::or(vec![p.clone(), q]),
    ///     Formula::or(vec![p, r]),
    /// ]);
    ///
    /// assert_eq!(formula.cnf(), expected);
    /// ```
    pub fn cnf(&self) -> Self {
        match self {
            Self::Atom(_) => self.clone(),

            Self::Not(inner) => negation_cnf(inner),

            Self::And(parts) => conjoin(parts.iter().map(|part| part.cnf()).collect()),

            Self::Or(parts) => distribute(parts.iter().map(|part| part.cnf()).collect()),

            // premise → conclusion rewrites to ¬premise ∨ conclusion.
            Self::Implies(premise, conclusion) => {
                Self::Or(vec![premise.negate(), (**conclusion).clone()]).cnf()
            }

            // left ↔ right rewrites to (¬left ∨ right) ∧ (¬right ∨ left).
            Self::Equiv(left, right) => Self::And(vec![
                Self::Or(vec![left.negate(), (**right).clone()]),
                Self::Or(vec![right.negate(), (**left).clone()]),
            ])
            .cnf(),
        }
    }
}

/// The normal form of the negation of `inner`.
fn negation_cnf(inner: &Formula) -> Formula {
    match inner {
        Formula::Atom(_) => inner.negate(),

        // ¬¬φ rewrites to φ.
        Formula::Not(nested) => nested.cnf(),

        // De Morgan: ¬(φ ∧ ψ) rewrites to ¬φ ∨ ¬ψ.
        Formula::And(parts) => Formula::Or(parts.iter().map(Formula::negate).collect()).cnf(),

        // De Morgan: ¬(φ ∨ ψ) rewrites to ¬φ ∧ ¬ψ.
        Formula::Or(parts) => Formula::And(parts.iter().map(Formula::negate).collect()).cnf(),

        // ¬(φ → ψ) rewrites to φ ∧ ¬ψ.
        Formula::Implies(premise, conclusion) => {
            Formula::And(vec![(**premise).clone(), conclusion.negate()]).cnf()
        }

        // ¬(φ ↔ ψ) rewrites to (φ ∧ ¬ψ) ∨ (¬φ ∧ ψ).
        Formula::Equiv(left, right) => Formula::Or(vec![
            Formula::And(vec![(**left).clone(), right.negate()]),
            Formula::And(vec![left.negate(), (**right).clone()]),
        ])
        .cnf(),
    }
}

/// The conjunction of the given normalised formulas, with nested conjunctions flattened and a
/// lone operand collapsed to itself.
fn conjoin(parts: Vec<Formula>) -> Formula {
    let mut flattened = Vec::with_capacity(parts.len());

    for part in parts {
        match part {
            Formula::And(nested) => flattened.extend(nested),
            other => flattened.push(other),
        }
    }

    match flattened.len() {
        1 => flattened.swap_remove(0),
        _ => Formula::And(flattened),
    }
}

/// The disjunction of the given normalised formulas, with nested disjunctions flattened and
/// disjunction distributed over conjunction.
///
/// If some flattened operand is a conjunction, one such operand is chosen and a disjunction of
/// each of its conjuncts with the remaining operands is built.
/// Each built disjunction is renormalised, which resolves any conjunctions among the remaining
/// operands, and so the no-conjunction-within-a-disjunction invariant holds of the result.
fn distribute(parts: Vec<Formula>) -> Formula {
    let mut flattened = Vec::with_capacity(parts.len());

    for part in parts {
        match part {
            Formula::Or(nested) => flattened.extend(nested),
            other => flattened.push(other),
        }
    }

    let mut conjuncts = None;
    let mut others = Vec::with_capacity(flattened.len());

    for part in flattened {
        match part {
            Formula::And(nested) if conjuncts.is_none() => conjuncts = Some(nested),
            other => others.push(other),
        }
    }

    let Some(conjuncts) = conjuncts else {
        // No conjunction to distribute over.
        return match others.len() {
            1 => others.swap_remove(0),
            _ => Formula::Or(others),
        };
    };

    let distributed = conjuncts
        .into_iter()
        .map(|conjunct| {
            let mut operands = Vec::with_capacity(others.len() + 1);
            operands.push(conjunct);
            operands.extend(others.iter().cloned());
            Formula::Or(operands).cnf()
        })
        .collect();

    conjoin(distributed)
}
