//! Errors surfaced by registry reads.

use gantry_path::Path;

use crate::{ProjectComponentIdentifier, SourceError};

/// Error returned by a read that had to flush pending builds.
///
/// Absence of a project is never an error; lookups return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A build source failed to enumerate or translate its projects.
    ///
    /// The source's own error, passed through untouched.
    #[error(transparent)]
    Source(SourceError),

    /// Two builds claimed the same identity path under
    /// [`CollisionPolicy::Reject`](crate::CollisionPolicy::Reject).
    #[error("identity path {path} is claimed by both {existing} and {incoming}")]
    PathCollision {
        path: Path,
        existing: ProjectComponentIdentifier,
        incoming: ProjectComponentIdentifier,
    },
}
