#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use doxa::structures::formula::Formula;

/// Whether the formula is an atom or a negated atom.
pub fn is_literal(formula: &Formula) -> bool {
    match formula {
        Formula::Atom(_) => true,
        Formula::Not(inner) => matches!(inner.as_ref(), Formula::Atom(_)),
        _ => false,
    }
}

/// Whether the formula is a literal or a disjunction of literals.
pub fn is_clause_shaped(formula: &Formula) -> bool {
    match formula {
        Formula::Or(parts) => parts.len() != 1 && parts.iter().all(is_literal),
        other => is_literal(other),
    }
}

/// Whether the formula satisfies the structural invariants of conjunctive normal form, with
/// singleton conjunctions and disjunctions collapsed.
pub fn is_cnf_shaped(formula: &Formula) -> bool {
    match formula {
        Formula::And(parts) => parts.len() != 1 && parts.iter().all(is_clause_shaped),
        other => is_clause_shaped(other),
    }
}

/// Every assignment over the given symbols.
pub fn assignments(symbols: &BTreeSet<String>) -> Vec<BTreeMap<String, bool>> {
    let symbols: Vec<&String> = symbols.iter().collect();

    (0..1_usize << symbols.len())
        .map(|valuation| {
            symbols
                .iter()
                .enumerate()
                .map(|(index, symbol)| ((*symbol).clone(), valuation >> index & 1 == 1))
                .collect()
        })
        .collect()
}

/// Whether two formulas have the same value under every assignment over their symbols.
pub fn equivalent(left: &Formula, right: &Formula) -> bool {
    let mut symbols = left.symbols();
    symbols.extend(right.symbols());

    assignments(&symbols)
        .iter()
        .all(|assignment| left.evaluate(assignment) == right.evaluate(assignment))
}

/// Whether the formulas entail the query by brute-force enumeration of assignments.
pub fn entails_by_truth_table(base: &[Formula], query: &Formula) -> bool {
    let mut symbols = query.symbols();
    for formula in base {
        symbols.extend(formula.symbols());
    }

    assignments(&symbols).iter().all(|assignment| {
        base.iter().any(|formula| !formula.evaluate(assignment)) || query.evaluate(assignment)
    })
}
