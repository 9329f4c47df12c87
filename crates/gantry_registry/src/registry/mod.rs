//! The project registry and its flush.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use gantry_path::Path;
use indexmap::IndexMap;
use parking_lot::Mutex;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::{
    BuildIdentifier, BuildSource, CollisionPolicy, ParentLookup, ProjectComponentIdentifier,
    ProjectEntry, ProjectHandle, RegistryConfig, RegistryError,
};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Mutable state behind the registry lock.
struct RegistryState {
    /// Materialized entries in first-insertion order.
    projects: FxIndexMap<Path, Arc<ProjectEntry>>,
    /// Registered builds not yet enumerated, in registration order.
    pending: VecDeque<Arc<dyn BuildSource>>,
}

impl RegistryState {
    fn new() -> Self {
        RegistryState {
            projects: FxIndexMap::default(),
            pending: VecDeque::new(),
        }
    }

    /// Drain pending builds into the mapping.
    ///
    /// Each build is committed as a whole. On failure the failing build and
    /// everything queued after it stay pending; builds committed earlier in
    /// the same flush stay materialized.
    fn flush(&mut self, policy: CollisionPolicy) -> Result<(), RegistryError> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let queued = self.pending.len();
        let mut materialized = 0usize;
        while let Some(build) = self.pending.front().cloned() {
            let entries = materialize(build.as_ref()).inspect_err(|err| {
                tracing::debug!(
                    build = %build.build_identifier(),
                    error = %err,
                    "build source failed during flush"
                );
            })?;
            if policy == CollisionPolicy::Reject {
                self.check_collisions(&entries)?;
            }

            self.pending.pop_front();
            materialized += entries.len();
            for entry in entries {
                self.insert(entry);
            }
        }

        tracing::debug!(
            builds = queued,
            projects = materialized,
            total = self.projects.len(),
            "flushed pending builds"
        );
        Ok(())
    }

    /// Fail if any entry would replace a project owned by someone else.
    fn check_collisions(&self, entries: &[ProjectEntry]) -> Result<(), RegistryError> {
        let mut batch: FxHashMap<&Path, &ProjectComponentIdentifier> = FxHashMap::default();
        for entry in entries {
            let path = entry.identity_path();
            let incoming = entry.component_identifier();
            let existing = batch
                .get(path)
                .copied()
                .or_else(|| self.projects.get(path).map(|e| e.component_identifier()));
            if let Some(existing) = existing {
                if existing != incoming {
                    return Err(RegistryError::PathCollision {
                        path: path.clone(),
                        existing: existing.clone(),
                        incoming: incoming.clone(),
                    });
                }
            }
            batch.insert(path, incoming);
        }
        Ok(())
    }

    /// Insert or replace, keeping the original position on replace.
    fn insert(&mut self, entry: ProjectEntry) {
        tracing::trace!(path = %entry.identity_path(), project = %entry, "materialized project");
        let path = entry.identity_path().clone();
        let incoming_build = entry.component_identifier().build().clone();
        if let Some(replaced) = self.projects.insert(path, Arc::new(entry)) {
            if replaced.component_identifier().build() != &incoming_build {
                tracing::warn!(
                    path = %replaced.identity_path(),
                    replaced = %replaced,
                    by = %incoming_build,
                    "identity path claimed by another build, replacing entry"
                );
            }
        }
    }

    fn snapshot(&self, filter: impl Fn(&ProjectEntry) -> bool) -> Vec<Arc<ProjectEntry>> {
        self.projects
            .values()
            .filter(|entry| filter(entry))
            .cloned()
            .collect()
    }

    fn resolve_parent(&self, entry: &ProjectEntry) -> ParentLookup {
        match entry.identity_path().parent() {
            None => ParentLookup::Root,
            Some(parent) => match self.projects.get(&parent) {
                Some(found) => ParentLookup::Found(Arc::clone(found)),
                None => ParentLookup::Unresolved(parent),
            },
        }
    }
}

/// Enumerate one build and turn its projects into entries.
fn materialize(build: &dyn BuildSource) -> Result<Vec<ProjectEntry>, RegistryError> {
    let identifier = build.build_identifier();
    let implicit = build.is_implicit_build();
    let projects = build.projects().map_err(RegistryError::Source)?;

    let mut entries = Vec::with_capacity(projects.len());
    for descriptor in projects {
        let identity_path = build
            .identity_path_for_project(&descriptor.path)
            .map_err(RegistryError::Source)?;
        let component = ProjectComponentIdentifier::new(identifier.clone(), descriptor.path);
        entries.push(ProjectEntry::new(
            identity_path,
            descriptor.name,
            component,
            implicit,
        ));
    }
    Ok(entries)
}

/// Registry of every project across all registered builds.
///
/// Registration queues a build without enumerating it. Every read flushes
/// the queue first, under the same lock, then answers from the mapping.
///
/// # Thread Safety
/// All state sits behind one `parking_lot::Mutex`. Share the registry with
/// [`SharedProjectRegistry`](crate::SharedProjectRegistry) or a plain
/// reference in scoped threads.
pub struct ProjectRegistry {
    config: RegistryConfig,
    state: Mutex<RegistryState>,
}

impl ProjectRegistry {
    /// Create an empty registry with the default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        ProjectRegistry {
            config,
            state: Mutex::new(RegistryState::new()),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Queue a build. Its projects are enumerated by the next read.
    pub fn register_build(&self, build: Arc<dyn BuildSource>) {
        let mut state = self.state.lock();
        tracing::debug!(
            build = %build.build_identifier(),
            implicit = build.is_implicit_build(),
            "registered build"
        );
        state.pending.push_back(build);
    }

    /// Drain all pending builds now.
    pub fn flush(&self) -> Result<(), RegistryError> {
        self.state.lock().flush(self.config.collision)
    }

    /// Every project, in first-insertion order.
    pub fn all_projects(&self) -> Result<Vec<Arc<ProjectEntry>>, RegistryError> {
        self.read(|state| state.snapshot(|_| true))
    }

    /// Projects from builds that were declared explicitly.
    pub fn explicit_projects(&self) -> Result<Vec<Arc<ProjectEntry>>, RegistryError> {
        self.read(|state| state.snapshot(|entry| !entry.is_added_implicitly()))
    }

    /// Projects from builds that were added implicitly.
    pub fn implicit_projects(&self) -> Result<Vec<Arc<ProjectEntry>>, RegistryError> {
        self.read(|state| state.snapshot(ProjectEntry::is_added_implicitly))
    }

    /// Look up the project registered at `identity_path`.
    pub fn lookup(&self, identity_path: &Path) -> Result<Option<Arc<ProjectEntry>>, RegistryError> {
        self.read(|state| state.projects.get(identity_path).cloned())
    }

    /// Look up the project a host-side handle stands for.
    pub fn state_for(
        &self,
        project: &impl ProjectHandle,
    ) -> Result<Option<Arc<ProjectEntry>>, RegistryError> {
        self.lookup(&project.identity_path())
    }

    /// The entry registered at the parent of `entry`'s path.
    ///
    /// `None` both for the root and for a parent path with no entry; use
    /// [`resolve_parent`](Self::resolve_parent) to tell them apart.
    pub fn parent_of(
        &self,
        entry: &ProjectEntry,
    ) -> Result<Option<Arc<ProjectEntry>>, RegistryError> {
        self.resolve_parent(entry).map(ParentLookup::found)
    }

    pub fn resolve_parent(&self, entry: &ProjectEntry) -> Result<ParentLookup, RegistryError> {
        self.read(|state| state.resolve_parent(entry))
    }

    /// Number of materialized projects (flushes first).
    pub fn len(&self) -> Result<usize, RegistryError> {
        self.read(|state| state.projects.len())
    }

    pub fn is_empty(&self) -> Result<bool, RegistryError> {
        self.read(|state| state.projects.is_empty())
    }

    /// Number of builds registered but not yet enumerated. Does not flush.
    pub fn pending_builds(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Drop queued builds with this identifier without enumerating them.
    ///
    /// Returns how many were removed. Materialized entries are untouched.
    pub fn discard_pending(&self, build: &BuildIdentifier) -> usize {
        let mut state = self.state.lock();
        let before = state.pending.len();
        state
            .pending
            .retain(|queued| queued.build_identifier() != build);
        let removed = before - state.pending.len();
        if removed > 0 {
            tracing::debug!(build = %build, removed, "discarded pending build");
        }
        removed
    }

    /// Flush, then run `f` against the state, all under one lock.
    fn read<R>(&self, f: impl FnOnce(&RegistryState) -> R) -> Result<R, RegistryError> {
        let mut state = self.state.lock();
        state.flush(self.config.collision)?;
        Ok(f(&state))
    }
}

impl Default for ProjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProjectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("ProjectRegistry");
        debug.field("config", &self.config);
        match self.state.try_lock() {
            Some(state) => debug
                .field("projects", &state.projects.len())
                .field("pending", &state.pending.len()),
            None => debug.field("state", &"<locked>"),
        };
        debug.finish()
    }
}
