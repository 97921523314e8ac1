/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [the belief database](crate::db::belief)
    pub const BELIEF_DB: &str = "belief_db";

    /// Logs related to [clause extraction](crate::structures::clause)
    pub const EXTRACTION: &str = "extraction";

    /// Logs related to [entailment](crate::procedures::entailment)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [contraction](crate::procedures::contraction)
    pub const CONTRACTION: &str = "contraction";

    /// Logs related to [revision](crate::procedures::revision)
    pub const REVISION: &str = "revision";
}
