use crate::{
    config::Config,
    db::belief::{BeliefDB, Priority},
    procedures::{contraction, entailment, revision},
    reports::Report,
    selection::Selection,
    structures::formula::Formula,
    types::err::ErrorKind,
};

use super::Counters;

/// A generic context, parameterised to a selection function.
///
/// Every mutating operation reads the belief database in full, computes a fresh belief
/// sequence in full, and replaces the contents of the database in full.
/// A caller sharing a context between threads must serialise mutating operations.
///
/// # Example
///
/// ```rust
/// # use doxa::context::GenericContext;
/// # use doxa::config::Config;
/// # use doxa::selection::ByPriority;
/// let context = GenericContext::with_selection(Config::default(), ByPriority);
/// ```
pub struct GenericContext<S: Selection> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context.
    pub counters: Counters,

    /// The belief database.
    /// See [db::belief](crate::db::belief) for details.
    pub belief_db: BeliefDB,

    /// The selection function applied during contraction.
    pub selection: S,
}

impl<S: Selection> GenericContext<S> {
    /// Creates a context with the given configuration and selection function.
    pub fn with_selection(config: Config, selection: S) -> Self {
        Self {
            config,
            counters: Counters::default(),
            belief_db: BeliefDB::new(),
            selection,
        }
    }

    /// Whether the beliefs of the context entail `query`.
    pub fn ask(&self, query: &Formula) -> Result<bool, ErrorKind> {
        entailment::entails(self.belief_db.formulas(), query)
    }

    /// Adds a belief with the configured default priority.
    pub fn add_belief(&mut self, formula: Formula) {
        let priority = self.config.default_priority;
        self.add_belief_prioritized(formula, priority);
    }

    /// Adds a belief with the given priority.
    pub fn add_belief_prioritized(&mut self, formula: Formula, priority: Priority) {
        self.counters.expansions += 1;
        self.belief_db.add(formula, priority);
    }

    /// Removes every belief whose formula is (semantically) equal to the normal form of
    /// `formula`.
    ///
    /// Removal is syntactic with respect to the database --- beliefs merely *entailing* the
    /// formula are untouched.
    /// For removal respecting entailment, see [contract](GenericContext::contract).
    pub fn remove_belief(&mut self, formula: &Formula) {
        self.belief_db.remove(formula);
    }

    /// Removes every belief from the context.
    pub fn clear_beliefs(&mut self) {
        self.belief_db.clear();
    }

    /// Contracts the beliefs of the context by `target`, through partial meet contraction
    /// under the selection function of the context.
    pub fn contract(&mut self, target: &Formula) -> Result<Report, ErrorKind> {
        self.counters.contractions += 1;

        let contraction =
            contraction::contract(self.belief_db.beliefs(), target, &self.selection)?;
        let report = Report::from(&contraction);

        self.belief_db.replace(contraction.into_beliefs());

        Ok(report)
    }

    /// Revises the beliefs of the context by `formula`, added with the configured default
    /// priority.
    ///
    /// The returned report is that of the inner contraction by the negation of `formula`.
    pub fn revise(&mut self, formula: Formula) -> Result<Report, ErrorKind> {
        let priority = self.config.default_priority;
        self.revise_prioritized(formula, priority)
    }

    /// Revises the beliefs of the context by `formula`, added with the given priority.
    pub fn revise_prioritized(
        &mut self,
        formula: Formula,
        priority: Priority,
    ) -> Result<Report, ErrorKind> {
        self.counters.revisions += 1;
        self.counters.expansions += 1;

        let revision = revision::revise(
            self.belief_db.beliefs(),
            &formula,
            priority,
            &self.selection,
        )?;

        self.belief_db.replace(revision.beliefs);

        Ok(revision.report)
    }
}
