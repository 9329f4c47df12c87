//! Materialized project entries.

use std::fmt;
use std::sync::Arc;

use gantry_path::Path;

use crate::ProjectComponentIdentifier;

/// The registry's record for one project.
///
/// Immutable once created. The parent is not stored; ask the registry with
/// [`ProjectRegistry::parent_of`](crate::ProjectRegistry::parent_of) or
/// [`ProjectRegistry::resolve_parent`](crate::ProjectRegistry::resolve_parent).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    identity_path: Path,
    name: String,
    identifier: ProjectComponentIdentifier,
    added_implicitly: bool,
}

impl ProjectEntry {
    pub fn new(
        identity_path: Path,
        name: impl Into<String>,
        identifier: ProjectComponentIdentifier,
        added_implicitly: bool,
    ) -> Self {
        ProjectEntry {
            identity_path,
            name: name.into(),
            identifier,
            added_implicitly,
        }
    }

    /// Workspace-wide key of this project.
    pub fn identity_path(&self) -> &Path {
        &self.identity_path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component_identifier(&self) -> &ProjectComponentIdentifier {
        &self.identifier
    }

    /// Inherited from the owning build.
    pub fn is_added_implicitly(&self) -> bool {
        self.added_implicitly
    }
}

impl fmt::Display for ProjectEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.identifier, f)
    }
}

/// Outcome of resolving an entry's parent.
///
/// Separates the true root from a parent path that has no entry (yet).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParentLookup {
    /// The entry's path has no parent.
    Root,
    /// The parent path exists structurally but no project is registered there.
    Unresolved(Path),
    Found(Arc<ProjectEntry>),
}

impl ParentLookup {
    /// Collapse to the parent entry, if one was found.
    pub fn found(self) -> Option<Arc<ProjectEntry>> {
        match self {
            ParentLookup::Found(entry) => Some(entry),
            ParentLookup::Root | ParentLookup::Unresolved(_) => None,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, ParentLookup::Root)
    }
}
