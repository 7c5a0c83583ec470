//! Store configuration.
//!
//! A [`StoreConfig`] decides the defaults of newly added tasks and what the
//! store does when a caller adds an id it already holds. It can be built in
//! code or loaded from the environment.
//!
//! # Environment Variables
//!
//! - `TASK_DEFAULT_STATUS`: `todo` (default) | `in_progress` | `done`
//! - `TASK_DEFAULT_PRIORITY`: `low` | `medium` (default) | `high`
//! - `TASK_DUPLICATE_POLICY`: `reject` (default) | `overwrite`
//!
//! # Example
//!
//! ```
//! use task_tracker::{DuplicatePolicy, Priority, StoreConfig};
//!
//! let config = StoreConfig::builder()
//!     .default_priority(Priority::Low)
//!     .duplicate_policy(DuplicatePolicy::Overwrite)
//!     .build();
//!
//! assert_eq!(config.default_priority, Priority::Low);
//! ```

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::{Priority, Status};

/// Environment variable for the default status of new tasks.
pub const DEFAULT_STATUS_VARIABLE: &str = "TASK_DEFAULT_STATUS";
/// Environment variable for the default priority of new tasks.
pub const DEFAULT_PRIORITY_VARIABLE: &str = "TASK_DEFAULT_PRIORITY";
/// Environment variable for the duplicate id policy.
pub const DUPLICATE_POLICY_VARIABLE: &str = "TASK_DUPLICATE_POLICY";

// =============================================================================
// Configuration Error
// =============================================================================

/// Errors that can occur while loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Unrecognized status name.
    #[error("Invalid default status: {0}")]
    InvalidStatus(String),

    /// Unrecognized priority name.
    #[error("Invalid default priority: {0}")]
    InvalidPriority(String),

    /// Unrecognized duplicate policy name.
    #[error("Invalid duplicate policy: {0}. Valid values: reject, overwrite")]
    InvalidDuplicatePolicy(String),

    /// The variable is set but is not valid UTF-8.
    #[error("Environment variable {variable} is not valid UTF-8")]
    InvalidEnvironment {
        /// Name of the offending variable.
        variable: &'static str,
    },
}

// =============================================================================
// Configuration Types
// =============================================================================

/// What `add_task` does when the id is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail with `StoreError::DuplicateId` and leave the store unchanged.
    #[default]
    Reject,
    /// Replace the stored task with the new one.
    Overwrite,
}

impl FromStr for DuplicatePolicy {
    type Err = ConfigurationError;

    /// Parses a duplicate policy from a string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidDuplicatePolicy` if the string is not recognized.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "reject" | "error" | "deny" => Ok(Self::Reject),
            "overwrite" | "replace" => Ok(Self::Overwrite),
            _ => Err(ConfigurationError::InvalidDuplicatePolicy(value.to_string())),
        }
    }
}

/// Configuration for a [`TaskStore`](super::TaskStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreConfig {
    /// Status given to added tasks when the caller supplies none.
    pub default_status: Status,
    /// Priority given to added tasks when the caller supplies none.
    pub default_priority: Priority,
    /// Behavior on duplicate ids.
    pub duplicate_policy: DuplicatePolicy,
}

impl StoreConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Creates a configuration from environment variables.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if a variable holds an unrecognized or
    /// non-UTF-8 value.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(env::var)
    }

    /// Creates a configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over a fixed map.
    ///
    /// # Errors
    ///
    /// Same as [`StoreConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&'static str) -> Result<String, env::VarError>,
    {
        let mut builder = Self::builder();

        if let Some(value) = read_variable(&lookup, DEFAULT_STATUS_VARIABLE)? {
            let status = value
                .parse::<Status>()
                .map_err(|_| ConfigurationError::InvalidStatus(value))?;
            builder = builder.default_status(status);
        }

        if let Some(value) = read_variable(&lookup, DEFAULT_PRIORITY_VARIABLE)? {
            let priority = value
                .parse::<Priority>()
                .map_err(|_| ConfigurationError::InvalidPriority(value))?;
            builder = builder.default_priority(priority);
        }

        if let Some(value) = read_variable(&lookup, DUPLICATE_POLICY_VARIABLE)? {
            builder = builder.duplicate_policy(value.parse()?);
        }

        Ok(builder.build())
    }
}

fn read_variable<F>(lookup: &F, variable: &'static str) -> Result<Option<String>, ConfigurationError>
where
    F: Fn(&'static str) -> Result<String, env::VarError>,
{
    match lookup(variable) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(ConfigurationError::InvalidEnvironment { variable })
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`StoreConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Sets the default status.
    #[must_use]
    pub const fn default_status(mut self, status: Status) -> Self {
        self.config.default_status = status;
        self
    }

    /// Sets the default priority.
    #[must_use]
    pub const fn default_priority(mut self, priority: Priority) -> Self {
        self.config.default_priority = priority;
        self
    }

    /// Sets the duplicate id policy.
    #[must_use]
    pub const fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub const fn build(self) -> StoreConfig {
        self.config
    }
}
