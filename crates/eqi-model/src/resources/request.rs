use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Validated resource request for a single resource type (cores or nodes).
///
/// Either an `exact` count or a `(min, max, split_into)` range. The two forms
/// are mutually exclusive; all combinations are checked when the builder
/// finishes, so a `Resources` value that exists is always well-formed.
///
/// Serializes to the map shape the scheduler consumes
/// (`exact` / `min` / `max` / `split-into`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(skip_serializing_if = "Option::is_none")]
    exact: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<u64>,
    #[serde(rename = "split-into", skip_serializing_if = "Option::is_none")]
    split_into: Option<u64>,
}

impl Resources {
    /// Start building a resource request.
    pub fn builder() -> ResourcesBuilder {
        ResourcesBuilder::default()
    }

    /// The exact count, if this is an exact request.
    pub fn exact(&self) -> Option<u64> {
        self.exact
    }

    /// The lower bound, if this is a ranged request.
    pub fn min(&self) -> Option<u64> {
        self.min
    }

    /// The upper bound, if given.
    pub fn max(&self) -> Option<u64> {
        self.max
    }

    /// The requested number of chunks, if given.
    pub fn split_into(&self) -> Option<u64> {
        self.split_into
    }
}

/// Builder validating every documented combination of request fields.
#[derive(Default, Clone, Debug)]
pub struct ResourcesBuilder {
    exact: Option<u64>,
    min: Option<u64>,
    max: Option<u64>,
    split_into: Option<u64>,
}

impl ResourcesBuilder {
    /// Request exactly `count` resources.
    pub fn exact(mut self, count: u64) -> Self {
        self.exact = Some(count);
        self
    }

    /// Set the minimal acceptable number of resources.
    pub fn min(mut self, count: u64) -> Self {
        self.min = Some(count);
        self
    }

    /// Set the maximal acceptable number of resources.
    pub fn max(mut self, count: u64) -> Self {
        self.max = Some(count);
        self
    }

    /// Split the total resources into `chunks` pieces of at least `min` each.
    pub fn split_into(mut self, chunks: u64) -> Self {
        self.split_into = Some(chunks);
        self
    }

    /// Validate the combination and produce the request.
    ///
    /// With nothing set, the request defaults to `exact = 1`.
    pub fn build(self) -> ModelResult<Resources> {
        let Self {
            exact,
            min,
            max,
            split_into,
        } = self;

        for (field, value) in [
            ("exact", exact),
            ("min", min),
            ("max", max),
            ("split_into", split_into),
        ] {
            if value == Some(0) {
                return Err(ModelError::InvalidResources(format!(
                    "'{field}' must be at least 1"
                )));
            }
        }

        if exact.is_none() && min.is_none() && max.is_none() && split_into.is_none() {
            return Ok(Resources {
                exact: Some(1),
                min: None,
                max: None,
                split_into: None,
            });
        }

        if exact.is_some() && (min.is_some() || max.is_some()) {
            return Err(ModelError::InvalidResources(
                "'exact' cannot be combined with 'min' or 'max'".to_string(),
            ));
        }
        if split_into.is_some() && min.is_none() {
            return Err(ModelError::InvalidResources(
                "'split_into' cannot be used without 'min'".to_string(),
            ));
        }
        if max.is_some() && min.is_none() {
            return Err(ModelError::InvalidResources(
                "'max' cannot be used without 'min'".to_string(),
            ));
        }

        if let Some(min) = min {
            if max.is_none() && split_into.is_none() {
                return Err(ModelError::InvalidResources(
                    "'min' requires 'max' or 'split_into'".to_string(),
                ));
            }
            if let Some(max) = max {
                if min > max {
                    return Err(ModelError::InvalidResources(
                        "'min' cannot be larger than 'max'".to_string(),
                    ));
                }
            }
            if let Some(split_into) = split_into {
                if split_into > min {
                    return Err(ModelError::InvalidResources(
                        "'split_into' cannot be larger than 'min'".to_string(),
                    ));
                }
            }
        }

        Ok(Resources {
            exact,
            min,
            max,
            split_into,
        })
    }
}
