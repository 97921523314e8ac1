use doxa::procedures::entailment::entails;
use doxa::structures::formula::Formula;

mod common;

fn p() -> Formula {
    Formula::atom("p")
}

fn q() -> Formula {
    Formula::atom("q")
}

fn r() -> Formula {
    Formula::atom("r")
}

#[test]
fn modus_ponens() {
    let base = [p(), Formula::implies(p(), q())];

    assert_eq!(entails(&base, &q()), Ok(true));
    assert_eq!(entails(&base, &q().negate()), Ok(false));
}

#[test]
fn chained_implications() {
    let base = [Formula::implies(p(), q()), Formula::implies(q(), r()), p()];

    assert_eq!(entails(&base, &r()), Ok(true));
}

#[test]
fn a_disjunction_does_not_entail_a_disjunct() {
    let base = [Formula::or(vec![p(), q()])];

    assert_eq!(entails(&base, &p()), Ok(false));
    assert_eq!(entails(&base, &q()), Ok(false));
    assert_eq!(entails(&base, &Formula::or(vec![q(), p()])), Ok(true));
}

#[test]
fn the_empty_base_entails_only_tautologies() {
    let none: [Formula; 0] = [];

    assert_eq!(entails(&none, &p()), Ok(false));
    assert_eq!(entails(&none, &Formula::or(vec![p(), p().negate()])), Ok(true));
    assert_eq!(entails(&none, &Formula::implies(p(), p())), Ok(true));
}

#[test]
fn an_inconsistent_base_entails_everything() {
    let base = [p(), p().negate()];

    assert_eq!(entails(&base, &q()), Ok(true));
    assert_eq!(entails(&base, &q().negate()), Ok(true));
    assert_eq!(entails(&base, &Formula::or(vec![])), Ok(true));
}

#[test]
fn nothing_entails_the_contradiction() {
    let base = [p(), Formula::or(vec![p().negate(), q()])];

    assert_eq!(entails(&base, &Formula::or(vec![])), Ok(false));
}

#[test]
fn equivalences_run_both_ways() {
    let base = [Formula::equivalent(p(), q()), q()];

    assert_eq!(entails(&base, &p()), Ok(true));
}

#[test]
fn case_analysis_requires_resolution_on_both_polarities() {
    // p ∨ q, p → r, q → r together entail r.
    let base = [
        Formula::or(vec![p(), q()]),
        Formula::implies(p(), r()),
        Formula::implies(q(), r()),
    ];

    assert_eq!(entails(&base, &r()), Ok(true));
}

#[test]
fn unnormalised_formulas_are_accepted() {
    // Entailment normalises its inputs, so compound formulas may be passed directly.
    let base = [Formula::equivalent(p(), q()).negate()];

    assert_eq!(entails(&base, &Formula::equivalent(p(), q())), Ok(false));
    assert_eq!(entails(&base, &Formula::or(vec![p(), q()])), Ok(true));
}

#[test]
fn agreement_with_truth_tables_on_a_sample() {
    let samples = [
        (vec![p(), Formula::implies(p(), q())], q()),
        (vec![Formula::or(vec![p(), q()])], p()),
        (vec![p().negate()], Formula::implies(p(), q())),
        (vec![Formula::and(vec![p(), q()])], Formula::or(vec![p(), r()])),
        (vec![Formula::equivalent(p(), q()), p().negate()], q().negate()),
    ];

    for (base, query) in samples {
        assert_eq!(
            entails(&base, &query),
            Ok(common::entails_by_truth_table(&base, &query)),
            "disagreement on base {base:?} and query {query}",
        );
    }
}
