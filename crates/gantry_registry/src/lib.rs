//! Gantry Registry - the lazily-populated project registry.
//!
//! Maps each project's identity [`Path`] to a [`ProjectEntry`] across every
//! build registered in a multi-build workspace.
//!
//! # Laziness
//!
//! Registering a build is O(1): the [`BuildSource`] is queued and its
//! projects are not enumerated. The first read after a registration drains
//! the queue ("flush") and materializes one entry per declared project.
//! Later reads are served from the materialized mapping.
//!
//! ```text
//! let registry = SharedProjectRegistry::new();
//! registry.register_build(Arc::new(DeclaredBuild::root().project(":", "app")));
//! // nothing enumerated yet
//! let all = registry.all_projects()?; // flush happens here
//! ```
//!
//! # Thread Safety
//!
//! A single `parking_lot::Mutex` guards the pending queue and the mapping.
//! Every operation holds it for its whole duration, so a flush is atomic with
//! respect to concurrent registrations and reads. Callers only ever receive
//! `Arc<ProjectEntry>` snapshots.
//!
//! # Logging
//!
//! Registration and flushes are reported through `tracing`. Binaries and
//! tests can call [`init_tracing`] to print them (`RUST_LOG=gantry_registry=trace`).

mod config;
mod entry;
mod error;
mod identifier;
mod registry;
mod shared;
pub mod source;

pub use config::{CollisionPolicy, RegistryConfig};
pub use entry::{ParentLookup, ProjectEntry};
pub use error::RegistryError;
pub use gantry_path::Path;
pub use identifier::{BuildIdentifier, ProjectComponentIdentifier};
pub use registry::ProjectRegistry;
pub use shared::SharedProjectRegistry;
pub use source::{BuildSource, DeclaredBuild, ProjectDescriptor, ProjectHandle, SourceError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=gantry_registry=debug` or `RUST_LOG=gantry_registry=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed by the host wins.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
