//! Build sources: the collaborators that declare a build's projects.
//!
//! The registry only reads from a [`BuildSource`], and only once, when the
//! source is flushed. Sources are created and owned by whatever discovers
//! builds; [`DeclaredBuild`] is a ready-made in-memory implementation.

use std::fmt;
use std::sync::Arc;

use gantry_path::Path;

use crate::{BuildIdentifier, ProjectEntry};

/// Error produced by a build source.
///
/// The registry hands it back to the reader unchanged.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A project as declared by its build: local path plus simple name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProjectDescriptor {
    pub path: Path,
    pub name: String,
}

impl ProjectDescriptor {
    pub fn new(path: Path, name: impl Into<String>) -> Self {
        ProjectDescriptor {
            path,
            name: name.into(),
        }
    }
}

/// One registered build.
///
/// # Contract
/// - `projects` and `identity_path_for_project` are called while the
///   registry's lock is held. They must not call back into the registry.
/// - They are called at most once per successful flush of this source; a
///   failing source is retried on the next read until it succeeds or is
///   discarded with [`ProjectRegistry::discard_pending`](crate::ProjectRegistry::discard_pending).
pub trait BuildSource: Send + Sync {
    fn build_identifier(&self) -> &BuildIdentifier;

    /// Whether the build was pulled in indirectly rather than declared.
    fn is_implicit_build(&self) -> bool;

    /// Translate a build-local project path to its workspace identity path.
    fn identity_path_for_project(&self, project_path: &Path) -> Result<Path, SourceError>;

    /// Enumerate the build's declared projects.
    fn projects(&self) -> Result<Vec<ProjectDescriptor>, SourceError>;
}

impl fmt::Debug for dyn BuildSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuildSource({})", self.build_identifier())
    }
}

/// Anything that knows the identity path of the project it stands for.
///
/// Lets hosts look projects up with their own project handles via
/// [`ProjectRegistry::state_for`](crate::ProjectRegistry::state_for).
pub trait ProjectHandle {
    fn identity_path(&self) -> Path;
}

impl ProjectHandle for Path {
    fn identity_path(&self) -> Path {
        self.clone()
    }
}

impl ProjectHandle for ProjectEntry {
    fn identity_path(&self) -> Path {
        ProjectEntry::identity_path(self).clone()
    }
}

impl<T: ProjectHandle + ?Sized> ProjectHandle for Arc<T> {
    fn identity_path(&self) -> Path {
        (**self).identity_path()
    }
}

/// In-memory build with an explicit list of projects.
///
/// Local paths are translated by appending them to the build's identity
/// root, so project `:sub` of a build rooted at `:composite` has identity
/// path `:composite:sub`.
///
/// # Usage
/// ```text
/// let build = DeclaredBuild::included("plugins")
///     .implicit(true)
///     .project(":", "plugins")
///     .project(":lint", "lint");
/// registry.register_build(Arc::new(build));
/// ```
#[derive(Clone, Debug)]
pub struct DeclaredBuild {
    identifier: BuildIdentifier,
    identity_root: Path,
    implicit: bool,
    projects: Vec<ProjectDescriptor>,
}

impl DeclaredBuild {
    /// Create an explicit build with no projects.
    pub fn new(identifier: BuildIdentifier, identity_root: Path) -> Self {
        DeclaredBuild {
            identifier,
            identity_root,
            implicit: false,
            projects: Vec::new(),
        }
    }

    /// The root build, whose identity root is `:`.
    pub fn root() -> Self {
        Self::new(BuildIdentifier::root(), Path::root())
    }

    /// An included build rooted at `:<name>`. A `name` containing `:` nests.
    pub fn included(name: &str) -> Self {
        Self::new(BuildIdentifier::included(name), Path::root().child(name))
    }

    #[must_use]
    pub fn implicit(mut self, implicit: bool) -> Self {
        self.implicit = implicit;
        self
    }

    /// Declare a project by its build-local path.
    #[must_use]
    pub fn project(mut self, path: &str, name: impl Into<String>) -> Self {
        self.projects.push(ProjectDescriptor::new(Path::new(path), name));
        self
    }

    pub fn identity_root(&self) -> &Path {
        &self.identity_root
    }
}

impl BuildSource for DeclaredBuild {
    fn build_identifier(&self) -> &BuildIdentifier {
        &self.identifier
    }

    fn is_implicit_build(&self) -> bool {
        self.implicit
    }

    fn identity_path_for_project(&self, project_path: &Path) -> Result<Path, SourceError> {
        Ok(self.identity_root.append(project_path))
    }

    fn projects(&self) -> Result<Vec<ProjectDescriptor>, SourceError> {
        Ok(self.projects.clone())
    }
}

#[cfg(test)]
mod tests;
