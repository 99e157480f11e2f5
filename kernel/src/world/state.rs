//! `WorldState`: immutable snapshot of the blocks world.
//!
//! # Sharing
//!
//! Columns are held behind `Arc` so a transition copies only the column it
//! touches; the attribute table is shared by every state derived from the
//! same initial world.
//!
//! # Equality semantics
//!
//! Two states are equal iff their canonical keys are equal. The key covers
//! column contents, arm index and held object. The attribute table is not part
//! of the key: it never changes along a transition.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, OnceLock};

use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};
use crate::world::object::{ObjectAttributes, ObjectId, Support};
use crate::world::WorldError;

/// Characters reserved by the canonical key encoding.
const KEY_RESERVED: [char; 4] = [',', '|', '@', '#'];

/// Where an object currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// In the gripper.
    Held,
    /// In column `column`, `row` positions above the floor (0 = bottom).
    Column { column: usize, row: usize },
}

/// Immutable world configuration.
#[derive(Debug, Clone)]
pub struct WorldState {
    columns: Vec<Arc<Vec<ObjectId>>>,
    arm: usize,
    held: Option<ObjectId>,
    objects: Arc<BTreeMap<ObjectId, ObjectAttributes>>,
    /// Canonical key, derived on first use.
    key: OnceLock<String>,
}

impl WorldState {
    /// Build a validated world.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if there are no columns, the arm is out of
    /// range, an identifier is duplicated, malformed or lacks attributes, or
    /// an attribute record belongs to an object that is not in the world.
    pub fn new(
        columns: Vec<Vec<ObjectId>>,
        arm: usize,
        held: Option<ObjectId>,
        objects: BTreeMap<ObjectId, ObjectAttributes>,
    ) -> Result<Self, WorldError> {
        if columns.is_empty() {
            return Err(WorldError::NoColumns);
        }
        if arm >= columns.len() {
            return Err(WorldError::ArmOutOfRange {
                arm,
                columns: columns.len(),
            });
        }

        let mut seen: BTreeSet<&ObjectId> = BTreeSet::new();
        for id in columns.iter().flatten().chain(held.iter()) {
            if id.as_str().is_empty() || id.as_str().contains(KEY_RESERVED) {
                return Err(WorldError::InvalidObjectId {
                    id: id.to_string(),
                });
            }
            if !seen.insert(id) {
                return Err(WorldError::DuplicateObject { id: id.to_string() });
            }
            if !objects.contains_key(id) {
                return Err(WorldError::MissingAttributes { id: id.to_string() });
            }
        }
        if let Some(unplaced) = objects.keys().find(|id| !seen.contains(id)) {
            return Err(WorldError::UnplacedObject {
                id: unplaced.to_string(),
            });
        }

        Ok(Self {
            columns: columns.into_iter().map(Arc::new).collect(),
            arm,
            held,
            objects: Arc::new(objects),
            key: OnceLock::new(),
        })
    }

    /// Successor snapshot sharing the attribute table. Callers in the
    /// operators layer are responsible for preserving the invariants.
    pub(crate) fn successor(
        &self,
        columns: Vec<Arc<Vec<ObjectId>>>,
        arm: usize,
        held: Option<ObjectId>,
    ) -> Self {
        Self {
            columns,
            arm,
            held,
            objects: Arc::clone(&self.objects),
            key: OnceLock::new(),
        }
    }

    /// Shared column handles, for copy-on-write transitions.
    pub(crate) fn column_handles(&self) -> &[Arc<Vec<ObjectId>>] {
        &self.columns
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Objects in column `index`, bottom first. Panics if out of bounds.
    #[must_use]
    pub fn column(&self, index: usize) -> &[ObjectId] {
        &self.columns[index]
    }

    /// All columns, left to right, each bottom first.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &[ObjectId]> + '_ {
        self.columns.iter().map(|c| c.as_slice())
    }

    /// Column index the arm is over.
    #[must_use]
    pub const fn arm(&self) -> usize {
        self.arm
    }

    #[must_use]
    pub fn held(&self) -> Option<&ObjectId> {
        self.held.as_ref()
    }

    #[must_use]
    pub fn is_holding(&self, id: &ObjectId) -> bool {
        self.held.as_ref() == Some(id)
    }

    /// The full attribute table.
    #[must_use]
    pub fn objects(&self) -> &BTreeMap<ObjectId, ObjectAttributes> {
        &self.objects
    }

    #[must_use]
    pub fn attributes(&self, id: &ObjectId) -> Option<&ObjectAttributes> {
        self.objects.get(id)
    }

    /// Topmost object of column `index`, if any.
    #[must_use]
    pub fn top_of(&self, index: usize) -> Option<&ObjectId> {
        self.columns.get(index).and_then(|c| c.last())
    }

    /// What a put-down over column `index` would rest on.
    #[must_use]
    pub fn support_at(&self, index: usize) -> Support<'_> {
        match self.top_of(index).and_then(|id| self.attributes(id)) {
            Some(attrs) => Support::Object(attrs),
            None => Support::Floor,
        }
    }

    /// Current location of `id`, or `None` if it is not in this world.
    #[must_use]
    pub fn locate(&self, id: &ObjectId) -> Option<Location> {
        if self.is_holding(id) {
            return Some(Location::Held);
        }
        self.columns.iter().enumerate().find_map(|(column, stack)| {
            stack
                .iter()
                .position(|o| o == id)
                .map(|row| Location::Column { column, row })
        })
    }

    /// Column index of `id`, or `None` if held or absent.
    #[must_use]
    pub fn column_of(&self, id: &ObjectId) -> Option<usize> {
        match self.locate(id) {
            Some(Location::Column { column, .. }) => Some(column),
            _ => None,
        }
    }

    /// Number of objects stacked above `id`. Zero when held or absent.
    #[must_use]
    pub fn items_above(&self, id: &ObjectId) -> usize {
        match self.locate(id) {
            Some(Location::Column { column, row }) => self.columns[column].len() - row - 1,
            _ => 0,
        }
    }

    /// Total number of objects in the world, held object included.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Canonical key: column contents, arm index and held object.
    ///
    /// Format: columns joined by `|` (objects bottom-first, joined by `,`),
    /// then `@<arm>`, then `#<held>` or `#` when empty-handed. Computed once
    /// and cached.
    #[must_use]
    pub fn key(&self) -> &str {
        self.key.get_or_init(|| {
            let mut key = String::new();
            for (i, column) in self.columns.iter().enumerate() {
                if i > 0 {
                    key.push('|');
                }
                for (j, id) in column.iter().enumerate() {
                    if j > 0 {
                        key.push(',');
                    }
                    key.push_str(id.as_str());
                }
            }
            key.push('@');
            key.push_str(&self.arm.to_string());
            key.push('#');
            if let Some(held) = &self.held {
                key.push_str(held.as_str());
            }
            key
        })
    }

    /// JSON value in world-fixture shape (`stacks`, `arm`, `holding`,
    /// `objects`).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let stacks: Vec<Vec<&str>> = self
            .columns
            .iter()
            .map(|c| c.iter().map(ObjectId::as_str).collect())
            .collect();
        let objects: serde_json::Map<String, serde_json::Value> = self
            .objects
            .iter()
            .map(|(id, attrs)| {
                (
                    id.to_string(),
                    serde_json::json!({
                        "color": attrs.color,
                        "form": attrs.shape.as_str(),
                        "size": attrs.size.as_str(),
                    }),
                )
            })
            .collect();
        serde_json::json!({
            "arm": self.arm,
            "holding": self.held.as_ref().map(ObjectId::as_str),
            "objects": objects,
            "stacks": stacks,
        })
    }

    /// Content hash of the canonical JSON form of this state.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn fingerprint(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::WorldState, &bytes))
    }
}

impl PartialEq for WorldState {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for WorldState {}

impl std::hash::Hash for WorldState {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
