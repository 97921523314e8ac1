/// Counts for various things which count, roughly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    /// A count of all beliefs added, directly or through revision.
    pub expansions: usize,

    /// A count of all contractions requested, vacuous or otherwise.
    pub contractions: usize,

    /// A count of all revisions requested.
    pub revisions: usize,
}
