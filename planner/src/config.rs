//! Planner configuration.
//!
//! Plain struct with `Default`; also loadable from JSON. Every field is
//! optional in JSON and falls back to its default:
//!
//! ```json
//! { "timeout_ms": 10000, "conjunction": "first_literal",
//!   "max_column_height": null, "narrate": false }
//! ```

use std::path::Path;
use std::time::Duration;

use blocksworld_kernel::operators::ActionRules;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Default wall-clock search budget.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How many literals of a conjunction the goal test and heuristic consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjunctionSemantics {
    /// Only the first literal of each conjunction.
    #[default]
    FirstLiteral,
    /// Every literal of a conjunction must hold.
    AllLiterals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Wall-clock budget for one search.
    #[serde(rename = "timeout_ms", with = "duration_ms")]
    pub timeout: Duration,
    pub conjunction: ConjunctionSemantics,
    /// Cap on column height for put-down. `None` means unbounded.
    pub max_column_height: Option<usize>,
    /// Precede each action with a human-readable description.
    pub narrate: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            conjunction: ConjunctionSemantics::FirstLiteral,
            max_column_height: None,
            narrate: false,
        }
    }
}

impl PlannerConfig {
    /// Action physics implied by this configuration.
    #[must_use]
    pub const fn rules(&self) -> ActionRules {
        ActionRules {
            max_column_height: self.max_column_height,
        }
    }

    /// # Errors
    ///
    /// Returns [`PlanError::Config`] on malformed JSON or unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self, PlanError> {
        serde_json::from_str(json).map_err(|e| PlanError::Config {
            detail: e.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns [`PlanError::Config`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PlanError::Config {
            detail: format!("{}: {e}", path.display()),
        })?;
        Self::from_json_str(&text)
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
