//! Gantry Path - hierarchical identity paths.
//!
//! A [`Path`] names a project (or a build) inside a multi-build workspace.
//! It is a purely logical identifier and has nothing to do with file-system
//! paths:
//!
//! ```text
//! :                 the absolute root
//! :app              an absolute path with one segment
//! :composite:lib    an absolute path with two segments
//! lib:core          a relative path
//! ```
//!
//! # Design Philosophy
//!
//! - **Structural identity**: equality, hashing and ordering are computed from
//!   the segment sequence, so paths work as map keys regardless of how they
//!   were built.
//! - **Derived hierarchy**: a path never stores its parent; [`Path::parent`]
//!   computes it from the segments.
//! - **Cheap clones**: segments live in shared storage.

mod error;
mod path;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::PathError;
pub use path::{Path, SEPARATOR};
