use doxa::config::Config;
use doxa::context::{Context, GenericContext};
use doxa::db::belief::Belief;
use doxa::procedures::{contraction, revision};
use doxa::reports::Report;
use doxa::selection::{ByPriority, SelectAll, Selection};
use doxa::structures::formula::Formula;

fn p() -> Formula {
    Formula::atom("p")
}

fn q() -> Formula {
    Formula::atom("q")
}

fn r() -> Formula {
    Formula::atom("r")
}

fn s() -> Formula {
    Formula::atom("s")
}

mod contraction_postulates {
    use super::*;

    #[test]
    fn success() {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_belief(p());
        ctx.add_belief(Formula::or(vec![p().negate(), q()]));

        assert_eq!(ctx.ask(&q()), Ok(true));

        let report = ctx.contract(&q()).unwrap();

        assert_eq!(report, Report::Contracted);
        assert_eq!(ctx.ask(&q()), Ok(false));
    }

    #[test]
    fn inclusion() {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_belief(p());
        ctx.add_belief(Formula::or(vec![p(), r()]));
        ctx.add_belief(Formula::or(vec![p().negate(), q()]));

        let original: Vec<Formula> = ctx.belief_db.formulas().cloned().collect();

        ctx.contract(&q()).unwrap();

        for formula in ctx.belief_db.formulas() {
            assert!(
                original.contains(formula),
                "{formula} was not in the original base",
            );
        }
    }

    #[test]
    fn vacuity() {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_belief(r());
        ctx.add_belief(Formula::and(vec![p(), r()]));

        let original = ctx.belief_db.clone();

        let report = ctx.contract(&s()).unwrap();

        assert_eq!(report, Report::Vacuous);
        assert_eq!(ctx.belief_db, original);
    }

    #[test]
    fn extensionality() {
        let mut first = Context::from_config(Config::default());
        let mut second = Context::from_config(Config::default());

        for ctx in [&mut first, &mut second] {
            ctx.add_belief(p());
            ctx.add_belief(q());
            ctx.add_belief(Formula::or(vec![p().negate(), q()]));
        }

        first.contract(&Formula::or(vec![p(), q()])).unwrap();
        second.contract(&Formula::or(vec![q(), p()])).unwrap();

        assert_eq!(first.belief_db, second.belief_db);
    }

    #[test]
    fn contracting_a_tautology_is_impossible() {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_belief(p());

        let original = ctx.belief_db.clone();

        let report = ctx.contract(&Formula::or(vec![p(), p().negate()])).unwrap();

        assert_eq!(report, Report::Impossible);
        assert_eq!(ctx.belief_db, original);
    }
}

mod revision_postulates {
    use super::*;

    #[test]
    fn success_and_consistency() {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_belief(p());
        ctx.add_belief(Formula::or(vec![p().negate(), q()]));

        // Before: modus ponens gives q.
        assert_eq!(ctx.ask(&q()), Ok(true));

        let report = ctx.revise(q().negate()).unwrap();
        assert_eq!(report, Report::Contracted);

        assert_eq!(ctx.ask(&q().negate()), Ok(true));
        assert_eq!(ctx.ask(&q()), Ok(false));
        assert_eq!(ctx.ask(&Formula::or(vec![])), Ok(false));
    }

    #[test]
    fn vacuous_when_nothing_contradicts() {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_belief(r());

        let report = ctx.revise(p()).unwrap();

        assert_eq!(report, Report::Vacuous);
        assert_eq!(ctx.ask(&r()), Ok(true));
        assert_eq!(ctx.ask(&p()), Ok(true));
    }

    #[test]
    fn extensionality() {
        let mut first = Context::from_config(Config::default());
        let mut second = Context::from_config(Config::default());

        for ctx in [&mut first, &mut second] {
            ctx.add_belief(Formula::and(vec![p().negate(), q().negate()]));
        }

        first.revise(Formula::or(vec![p(), q()])).unwrap();
        second.revise(Formula::or(vec![q(), p()])).unwrap();

        assert_eq!(first.belief_db, second.belief_db);
    }
}

mod selection_functions {
    use super::*;

    #[test]
    fn select_all_keeps_only_the_undisputed() {
        // Giving up q leaves a choice between p and p → q, and intersecting both remainders
        // keeps neither.
        let mut ctx = Context::from_config(Config::default());
        ctx.add_belief(p());
        ctx.add_belief(Formula::or(vec![p().negate(), q()]));

        ctx.contract(&q()).unwrap();

        assert!(ctx.belief_db.is_empty());
    }

    #[test]
    fn priority_breaks_ties() {
        let mut ctx = GenericContext::with_selection(Config::default(), ByPriority);
        ctx.add_belief_prioritized(Formula::or(vec![p().negate(), q()]), 2);
        ctx.add_belief_prioritized(p(), 1);

        ctx.contract(&q()).unwrap();

        let kept: Vec<Formula> = ctx.belief_db.formulas().cloned().collect();

        assert_eq!(kept, vec![Formula::or(vec![p().negate(), q()])]);
        assert_eq!(ctx.ask(&q()), Ok(false));
    }

    #[test]
    fn a_contradicted_belief_falls_to_its_support() {
        // Believing p → q (2), p (1), and ¬q (3): the only maximal subset not entailing ¬q
        // keeps the implication and its premise, whichever selection function applies.
        let mut ctx = Context::from_config(Config::default());
        ctx.add_belief_prioritized(Formula::implies(p(), q()), 2);
        ctx.add_belief_prioritized(p(), 1);
        ctx.add_belief_prioritized(q().negate(), 3);

        ctx.contract(&q().negate()).unwrap();

        assert!(!ctx
            .belief_db
            .formulas()
            .any(|formula| *formula == q().negate()));
        assert_eq!(ctx.ask(&q()), Ok(true));
    }

    #[test]
    fn selections_agree_when_a_single_remainder_exists() {
        let base = vec![
            Belief::new(p(), 1),
            Belief::new(Formula::or(vec![p().negate(), q()]), 2),
            Belief::new(q().negate(), 3),
        ];

        let all = contraction::contract(&base, &q().negate(), &SelectAll).unwrap();
        let entrenched = contraction::contract(&base, &q().negate(), &ByPriority).unwrap();

        assert_eq!(all.beliefs(), entrenched.beliefs());
    }
}

mod procedures_directly {
    use super::*;

    #[test]
    fn remainders_of_a_modus_ponens_base() {
        let base = vec![
            Belief::new(p(), 0),
            Belief::new(Formula::or(vec![p().negate(), q()]), 0),
        ];

        let remainder_set = contraction::remainders(&base, &q()).unwrap();

        let singletons: Vec<Vec<usize>> = remainder_set
            .iter()
            .map(|remainder| remainder.iter().copied().collect())
            .collect();

        assert_eq!(singletons, vec![vec![0], vec![1]]);
    }

    #[test]
    fn remainders_of_an_unentailed_target_are_the_full_base() {
        let base = vec![Belief::new(p(), 0), Belief::new(r(), 0)];

        let remainder_set = contraction::remainders(&base, &q()).unwrap();

        assert_eq!(remainder_set.len(), 1);
        assert_eq!(remainder_set[0].len(), 2);
    }

    #[test]
    fn remainders_of_a_tautology_are_absent() {
        let base = vec![Belief::new(p(), 0)];

        let target = Formula::or(vec![q(), q().negate()]);
        let remainder_set = contraction::remainders(&base, &target).unwrap();

        assert!(remainder_set.is_empty());
    }

    #[test]
    fn revision_reports_the_inner_contraction() {
        let base = vec![Belief::new(p(), 0)];

        let revision = revision::revise(&base, &p().negate(), 0, &SelectAll).unwrap();

        assert_eq!(revision.report, Report::Contracted);
        assert_eq!(revision.beliefs, vec![Belief::new(p().negate(), 0)]);
    }

    #[test]
    fn the_selection_obligation_is_checked() {
        struct Nothing;

        impl Selection for Nothing {
            fn select(
                &self,
                _: &[Belief],
                _: &[contraction::Remainder],
            ) -> Vec<contraction::Remainder> {
                Vec::new()
            }
        }

        let base = vec![
            Belief::new(p(), 0),
            Belief::new(Formula::or(vec![p().negate(), q()]), 0),
        ];

        let outcome = contraction::contract(&base, &q(), &Nothing);

        assert!(outcome.is_err());
    }
}

#[test]
fn counters_count() {
    let mut ctx = Context::from_config(Config::default());

    ctx.add_belief(p());
    ctx.add_belief(q());
    ctx.contract(&q()).unwrap();
    ctx.revise(r()).unwrap();

    assert_eq!(ctx.counters.expansions, 3);
    assert_eq!(ctx.counters.contractions, 1);
    assert_eq!(ctx.counters.revisions, 1);
}

#[test]
fn removal_is_by_semantic_equality() {
    let mut ctx = Context::from_config(Config::default());

    ctx.add_belief(Formula::or(vec![p(), q()]));
    ctx.remove_belief(&Formula::or(vec![q(), p()]));

    assert!(ctx.belief_db.is_empty());
}
