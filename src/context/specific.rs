use crate::{config::Config, selection::SelectAll};

use super::GenericContext;

/// A context which uses [SelectAll] as its selection function.
pub type Context = GenericContext<SelectAll>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self::with_selection(config, SelectAll)
    }
}
