//! Databases for holding the beliefs of a context.

pub mod belief;
