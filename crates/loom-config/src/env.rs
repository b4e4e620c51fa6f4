//! Environment inputs captured once per resolution.

use std::collections::BTreeMap;

/// Name of the variable carrying the build mode.
pub const MODE_VAR: &str = "NODE_ENV";

/// Variables the resolver looks at. Anything else in the process
/// environment is ignored.
pub const RECOGNIZED_VARS: &[&str] = &[MODE_VAR];

/// Named string flags the resolver derives its mode from.
///
/// The value is immutable once built: capture it with
/// [`EnvironmentInputs::from_process`] at the program boundary, or inject
/// one directly in tests.
///
/// # Example
///
/// ```
/// use loom_config::EnvironmentInputs;
///
/// let env = EnvironmentInputs::new().with("NODE_ENV", "watch");
/// assert_eq!(env.mode(), Some("watch"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentInputs {
    vars: BTreeMap<String, String>,
}

impl EnvironmentInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the recognized variables from the current process.
    pub fn from_process() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Snapshot the recognized variables through an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let vars = RECOGNIZED_VARS
            .iter()
            .filter_map(|name| lookup(name).map(|value| (name.to_string(), value)))
            .collect();
        Self { vars }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Raw mode flag, if one was set.
    pub fn mode(&self) -> Option<&str> {
        self.get(MODE_VAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lookup_keeps_only_recognized_vars() {
        let env = EnvironmentInputs::from_lookup(|name| match name {
            "NODE_ENV" => Some("development".into()),
            _ => Some("ignored".into()),
        });
        assert_eq!(env.mode(), Some("development"));
        assert_eq!(env.get("HOME"), None);
    }

    #[test]
    fn missing_mode_is_none() {
        let env = EnvironmentInputs::from_lookup(|_| None);
        assert_eq!(env, EnvironmentInputs::new());
        assert!(env.mode().is_none());
    }
}
