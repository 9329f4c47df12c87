//! Build and project component identifiers.

use std::fmt;

use gantry_path::Path;

/// Stable identity of one build in the workspace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BuildIdentifier {
    name: String,
    is_root: bool,
}

impl BuildIdentifier {
    /// The build the workspace was started from.
    pub fn root() -> Self {
        BuildIdentifier {
            name: ":".to_owned(),
            is_root: true,
        }
    }

    /// A build included into the workspace under `name`.
    pub fn included(name: impl Into<String>) -> Self {
        BuildIdentifier {
            name: name.into(),
            is_root: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }
}

impl fmt::Display for BuildIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "build '{}'", self.name)
    }
}

/// Opaque token naming a project within its owning build.
///
/// Two projects in different builds may share a `project_path`; the build
/// identifier keeps them apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProjectComponentIdentifier {
    build: BuildIdentifier,
    project_path: Path,
}

impl ProjectComponentIdentifier {
    pub fn new(build: BuildIdentifier, project_path: Path) -> Self {
        ProjectComponentIdentifier {
            build,
            project_path,
        }
    }

    pub fn build(&self) -> &BuildIdentifier {
        &self.build
    }

    /// Path of the project inside its own build.
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Human-readable name, e.g. `project :sub` or `project :composite:sub`.
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProjectComponentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.build.is_root {
            return write!(f, "project {}", self.project_path);
        }
        if self.project_path.is_root() {
            write!(f, "project :{}", self.build.name)
        } else {
            write!(f, "project :{}{}", self.build.name, self.project_path)
        }
    }
}
