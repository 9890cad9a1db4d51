use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form parameters attached to a task spec.
///
/// Specific task kinds read well-known keys from here, e.g. execution tasks
/// take the application command line from [`crate::PARAM_APPLICATION`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskParams(BTreeMap<String, String>);

impl TaskParams {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite a parameter.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.as_str())
    }

    /// Iterate through all parameters as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
