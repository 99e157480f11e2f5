//! World fixtures: JSON documents describing an initial world.
//!
//! Shape:
//!
//! ```json
//! {
//!   "stacks": [["e"], ["g", "l"], []],
//!   "holding": null,
//!   "arm": 0,
//!   "objects": { "e": { "form": "ball", "size": "large", "color": "white" } }
//! }
//! ```
//!
//! `objects` may list a larger catalog than the world uses; entries for
//! objects that are neither stacked nor held are dropped on load.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::world::object::{ObjectAttributes, ObjectId};
use crate::world::state::WorldState;
use crate::world::WorldError;

/// Serde mirror of the fixture document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldFixture {
    pub stacks: Vec<Vec<ObjectId>>,
    #[serde(default)]
    pub holding: Option<ObjectId>,
    #[serde(default)]
    pub arm: usize,
    pub objects: BTreeMap<ObjectId, ObjectAttributes>,
}

impl WorldFixture {
    /// Validate into a [`WorldState`].
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] for any violated world invariant.
    pub fn into_state(self) -> Result<WorldState, WorldError> {
        let Self {
            stacks,
            holding,
            arm,
            mut objects,
        } = self;
        objects.retain(|id, _| {
            holding.as_ref() == Some(id) || stacks.iter().any(|column| column.contains(id))
        });
        WorldState::new(stacks, arm, holding, objects)
    }

    /// Fixture describing `state` exactly.
    #[must_use]
    pub fn from_state(state: &WorldState) -> Self {
        Self {
            stacks: state.columns().map(<[ObjectId]>::to_vec).collect(),
            holding: state.held().cloned(),
            arm: state.arm(),
            objects: state.objects().clone(),
        }
    }
}

impl WorldState {
    /// Parse and validate a world fixture from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Fixture`] on malformed JSON, or the relevant
    /// invariant error.
    pub fn from_json_str(json: &str) -> Result<Self, WorldError> {
        let fixture: WorldFixture =
            serde_json::from_str(json).map_err(|e| WorldError::Fixture {
                detail: e.to_string(),
            })?;
        fixture.into_state()
    }

    /// Read, parse and validate a world fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Fixture`] if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| WorldError::Fixture {
            detail: format!("{}: {e}", path.display()),
        })?;
        Self::from_json_str(&text)
    }
}
