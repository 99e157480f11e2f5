//! World model: columns of stacked objects, one arm, an optional held object.
//!
//! This is the foundational layer. `operators` and `proof` depend on it; it
//! depends on `proof` only for fingerprinting.

pub mod fixture;
pub mod object;
pub mod state;

pub use object::{ObjectAttributes, ObjectId, Shape, Size, Support};
pub use state::{Location, WorldState};

/// Typed failure for world construction. Fail-closed: no partially valid
/// world is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// A world needs at least one column for the arm to stand over.
    #[error("world has no columns")]
    NoColumns,

    #[error("arm index {arm} out of range for {columns} columns")]
    ArmOutOfRange { arm: usize, columns: usize },

    /// The same identifier is placed twice (two columns, or a column and the
    /// gripper).
    #[error("object {id} appears more than once")]
    DuplicateObject { id: String },

    /// A placed or held identifier has no attribute record.
    #[error("object {id} has no attributes")]
    MissingAttributes { id: String },

    /// An attribute record exists for an object that is neither placed nor
    /// held.
    #[error("object {id} is neither in a column nor held")]
    UnplacedObject { id: String },

    /// Identifiers must be non-empty and free of canonical-key separators.
    #[error("invalid object identifier {id:?}")]
    InvalidObjectId { id: String },

    /// World fixture could not be read or decoded.
    #[error("world fixture error: {detail}")]
    Fixture { detail: String },
}
