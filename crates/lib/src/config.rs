//! Configuration for hydration.

use serde::{Deserialize, Serialize};

/// Matches serde_json's own recursion limit when parsing.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied while hydrating untrusted plain input.
///
/// Deserializable so it can sit inside an application's own configuration file.
///
/// ```
/// # use treebind::HydrateOptions;
/// let options: HydrateOptions = serde_json::from_str(r#"{"max_depth": 8}"#).unwrap();
/// assert_eq!(options.max_depth, 8);
///
/// let defaults: HydrateOptions = serde_json::from_str("{}").unwrap();
/// assert_eq!(defaults, HydrateOptions::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrateOptions {
    /// Deepest mapping nesting the hydrator will descend into.
    pub max_depth: usize,
}

impl HydrateOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for HydrateOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
