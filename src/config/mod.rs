/*!
Configuration of a context.
*/

use crate::db::belief::Priority;

/// The primary configuration structure.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// The priority given to beliefs added without an explicit priority.
    pub default_priority: Priority,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_priority: 0,
        }
    }
}
