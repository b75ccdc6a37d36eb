//! Validator configuration

use serde::{Deserialize, Serialize};

/// Name used for violations that concern the validated value itself.
pub const DEFAULT_ROOT_NAME: &str = "Main";

/// Settings for a [`Validator`](crate::Validator).
///
/// The default matches the behaviour of [`validate`](crate::validate):
/// root-level violations are named `Main` and nesting is unlimited.
///
/// ```rust,ignore
/// let config: ValidatorConfig = serde_json::from_str(r#"{ "max_depth": 8 }"#)?;
/// let validator = Validator::new(config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Field name reported when the validated value is not a record.
    pub root_name: String,
    /// Deepest nested record level that is still descended; the root record
    /// is level 0. `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_owned(),
            max_depth: None,
        }
    }
}

impl ValidatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root violation name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Limits nested record depth.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
