//! Shared handle to a project registry.

use std::fmt;
use std::sync::Arc;

use crate::{ProjectRegistry, RegistryConfig};

/// Shared registry for passing to collaborators and threads.
///
/// This newtype is how a registry gets injected into the subsystems that
/// need it; there is no global instance.
///
/// # When to Use This vs `&ProjectRegistry`
///
/// **Use `SharedProjectRegistry` (Arc) when:**
/// - Handing the registry to threads or components that outlive the caller
/// - Several owners need their own handle
///
/// **Use `&ProjectRegistry` (borrowed) when:**
/// - The caller owns the registry and callees only query it
/// - Inside `std::thread::scope`
#[derive(Clone, Default)]
pub struct SharedProjectRegistry(Arc<ProjectRegistry>);

impl SharedProjectRegistry {
    /// Create a new shared registry with the default config.
    pub fn new() -> Self {
        SharedProjectRegistry(Arc::new(ProjectRegistry::new()))
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        SharedProjectRegistry(Arc::new(ProjectRegistry::with_config(config)))
    }
}

impl From<ProjectRegistry> for SharedProjectRegistry {
    fn from(registry: ProjectRegistry) -> Self {
        SharedProjectRegistry(Arc::new(registry))
    }
}

impl std::ops::Deref for SharedProjectRegistry {
    type Target = ProjectRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedProjectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedProjectRegistry({:?})", &*self.0)
    }
}
