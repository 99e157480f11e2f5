//! Object identifiers and immutable per-object attributes.
//!
//! Attributes are fixed when a world is built. Only `shape` and `size` take
//! part in placement legality; `color` is carried for narration.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Identifier of a physical object in the world (e.g. `"a"`).
///
/// Cheap to clone: the string is shared. Ordering is lexicographic on the
/// underlying string, which keeps `BTreeMap` iteration canonical.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(Arc<str>);

impl ObjectId {
    /// Construct an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Physical form of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Ball,
    Box,
    Brick,
    Plank,
    Pyramid,
    Table,
}

impl Shape {
    /// Lowercase name, as used in world fixtures.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ball => "ball",
            Self::Box => "box",
            Self::Brick => "brick",
            Self::Plank => "plank",
            Self::Pyramid => "pyramid",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ball" => Ok(Self::Ball),
            "box" => Ok(Self::Box),
            "brick" => Ok(Self::Brick),
            "plank" => Ok(Self::Plank),
            "pyramid" => Ok(Self::Pyramid),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown shape: {other}")),
        }
    }
}

/// Object size. `Small < Large`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

impl Size {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable attribute record for one object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectAttributes {
    #[serde(rename = "form")]
    pub shape: Shape,
    pub size: Size,
    pub color: String,
}

impl ObjectAttributes {
    #[must_use]
    pub fn new(shape: Shape, size: Size, color: impl Into<String>) -> Self {
        Self {
            shape,
            size,
            color: color.into(),
        }
    }

    /// Human-readable description, e.g. `"small white ball"`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} {} {}", self.size, self.color, self.shape)
    }
}

/// What an object would rest on after a put-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support<'a> {
    /// Bottom of an empty column. Accepts anything.
    Floor,
    /// The topmost object of a non-empty column.
    Object(&'a ObjectAttributes),
}
