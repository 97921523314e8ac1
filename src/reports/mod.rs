/*!
Reports for the context.
*/

use crate::procedures::contraction::Contraction;

/// High-level reports regarding a contraction or revision.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// Beliefs were given up.
    Contracted,

    /// The target was not entailed, so nothing was given up.
    Vacuous,

    /// The target is a tautology, so nothing could be given up.
    Impossible,
}

impl From<&Contraction> for Report {
    fn from(value: &Contraction) -> Self {
        match value {
            Contraction::Contracted(_) => Self::Contracted,
            Contraction::Vacuous(_) => Self::Vacuous,
            Contraction::Impossible(_) => Self::Impossible,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contracted => write!(f, "Contracted"),
            Self::Vacuous => write!(f, "Vacuous"),
            Self::Impossible => write!(f, "Impossible"),
        }
    }
}
