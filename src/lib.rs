//! A library for AGM-style belief revision over propositional belief bases.
//!
//! doxa models the propositional knowledge of an agent as a *belief base* --- a prioritised
//! collection of formulas --- and implements the classic belief change operations over it:
//! asking whether a belief follows from the base (entailment), giving up a belief while keeping
//! as much of the base as possible (partial meet contraction), and incorporating a new belief
//! consistently (revision, via the Levi identity).
//!
//! The library is developed to support investigation into belief change, whether as a novice or
//! through implementing novel ideas --- selection functions, in particular, are pluggable.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a configuration and a selection function, and hold a belief database.
//! Beliefs may be added [with](context::GenericContext::add_belief_prioritized) or
//! [without](context::GenericContext::add_belief) an explicit priority.
//!
//! Internally, and at a high-level, belief change is viewed in terms of a handful of pure
//! procedures over immutable structures:
//!
//! - A formula is normalised to conjunctive normal form ([structures::formula]).
//! - A normalised formula is split into clauses ([structures::clause]).
//! - Entailment is decided by resolution over clause sets ([procedures::entailment]).
//! - Contraction intersects a selected set of remainders ([procedures::contraction]), and
//!   revision is contraction by the negated belief followed by expansion
//!   ([procedures::revision]).
//!
//! The belief database is read in full, a fresh belief sequence is computed in full, and the
//! database is replaced in full.
//! No operation observes a partially updated base.
//!
//! Useful starting points, then, may be:
//! - The [context] to see the operations an agent performs.
//! - The [procedures] to inspect the dynamics of contraction and revision.
//! - The [structures] to familiarise yourself with formulas, literals, and clauses.
//! - The [selection] module for the choice of selection function.
//!
//! # Examples
//!
//! + Believing p and p → q, and then learning ¬q.
//!
//! ```rust
//! # use doxa::config::Config;
//! # use doxa::context::Context;
//! # use doxa::reports::Report;
//! use doxa::structures::formula::Formula;
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = Formula::atom("p");
//! let q = Formula::atom("q");
//!
//! the_context.add_belief(p.clone());
//! the_context.add_belief(Formula::implies(p.clone(), q.clone()));
//!
//! // Modus ponens.
//! assert_eq!(the_context.ask(&q), Ok(true));
//!
//! // Revision by ¬q removes enough of the base to make ¬q consistent with it.
//! let report = the_context.revise(q.negate()).unwrap();
//! assert_eq!(report, Report::Contracted);
//!
//! assert_eq!(the_context.ask(&q), Ok(false));
//! assert_eq!(the_context.ask(&q.negate()), Ok(true));
//! ```
//!
//! + Contraction by something never believed is vacuous.
//!
//! ```rust
//! # use doxa::config::Config;
//! # use doxa::context::Context;
//! # use doxa::reports::Report;
//! use doxa::structures::formula::Formula;
//!
//! let mut the_context = Context::from_config(Config::default());
//! the_context.add_belief(Formula::atom("r"));
//!
//! let report = the_context.contract(&Formula::atom("s")).unwrap();
//! assert_eq!(report, Report::Vacuous);
//! assert_eq!(the_context.belief_db.len(), 1);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues, calls to [log!](log) are made throughout, and a variety of targets
//! are defined in order to help narrow output to relevant parts of the library.
//! No log implementation is provided.
//!
//! The targets are listed in [misc::log].
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/),
//! logs related to contraction can be filtered with `RUST_LOG=contraction …`.

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod procedures;
pub mod selection;

pub mod reports;

pub mod misc;
