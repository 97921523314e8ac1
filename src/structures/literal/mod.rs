//! Literals, i.e. atoms paired with a (boolean) polarity.
//!
//! Literals are ordered by atom and then polarity, with the (Rust default) ordering of 'false'
//! being (strictly) less than 'true', and are hashable to allow straightforward use as elements
//! of sets and keys of maps.
//!
//! An example:
//!
//! ```rust
//! # use doxa::structures::literal::Literal;
//! let literal = Literal::new("p", true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.negate(), Literal::new("p", false));
//! assert_eq!(literal.to_string(), "p");
//! assert_eq!(literal.negate().to_string(), "¬p");
//! ```

use crate::structures::atom::Atom;

/// An atom paired with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a polarity.
    pub fn new(atom: impl Into<Atom>, polarity: bool) -> Self {
        Literal {
            atom: atom.into(),
            polarity,
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "¬{}", self.atom),
        }
    }
}
