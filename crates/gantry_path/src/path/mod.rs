//! The `Path` value type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::PathError;

/// Segment separator in the textual form of a path.
pub const SEPARATOR: char = ':';

/// Hierarchical identity path.
///
/// Layout: an absolute flag plus a shared slice of segments. Cloning bumps a
/// reference count; deriving a parent or child allocates only the new
/// segment slice (the segment strings themselves are shared).
///
/// # Equality
/// Two paths are equal iff both are absolute (or both relative) and their
/// segment sequences are equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Path {
    absolute: bool,
    segments: Arc<[Arc<str>]>,
}

impl Path {
    /// The absolute root path `:`.
    pub fn root() -> Self {
        Path {
            absolute: true,
            segments: Arc::from([]),
        }
    }

    /// Parse a path leniently.
    ///
    /// A leading `:` makes the path absolute. Empty and blank segments are
    /// dropped, so `::a: :b` is the same path as `:a:b`. The result always
    /// displays as text that [`parse_strict`](Self::parse_strict) accepts.
    pub fn new(text: &str) -> Self {
        let absolute = text.starts_with(SEPARATOR);
        Path {
            absolute,
            segments: split_segments(text).into(),
        }
    }

    /// Parse a path, rejecting empty or blank segments.
    ///
    /// `:` is the root and the empty string is the empty relative path.
    pub fn parse_strict(text: &str) -> Result<Self, PathError> {
        let (absolute, body) = match text.strip_prefix(SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if body.is_empty() {
            return Ok(Path {
                absolute,
                segments: Arc::from([]),
            });
        }

        let mut segments: Vec<Arc<str>> = Vec::new();
        for (index, segment) in body.split(SEPARATOR).enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment {
                    path: text.to_owned(),
                    index,
                });
            }
            if segment.trim().is_empty() {
                return Err(PathError::BlankSegment {
                    path: text.to_owned(),
                    index,
                });
            }
            segments.push(Arc::from(segment));
        }

        Ok(Path {
            absolute,
            segments: segments.into(),
        })
    }

    /// Check if this is the absolute root `:`.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.absolute && self.segments.is_empty()
    }

    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Number of segments (0 for the root).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Segment at `index`, if any.
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(|segment| &**segment)
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().map(|segment| &**segment)
    }

    /// The last segment, or `None` for a path without segments.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(|segment| &**segment)
    }

    /// Compute the parent path.
    ///
    /// Returns `None` for the absolute root and for a relative path with a
    /// single segment. The parent of `:a` is the root.
    pub fn parent(&self) -> Option<Path> {
        let len = self.segments.len();
        if len == 0 || (!self.absolute && len == 1) {
            return None;
        }
        Some(Path {
            absolute: self.absolute,
            segments: Arc::from(&self.segments[..len - 1]),
        })
    }

    /// Create a descendant path from `name`.
    ///
    /// `name` is split like [`new`](Self::new): `child("a:b")` adds two
    /// segments, and a blank `name` yields `self` unchanged.
    #[must_use]
    pub fn child(&self, name: &str) -> Path {
        let added = split_segments(name);
        if added.is_empty() {
            return self.clone();
        }
        let mut segments = Vec::with_capacity(self.segments.len() + added.len());
        segments.extend(self.segments.iter().cloned());
        segments.extend(added);
        Path {
            absolute: self.absolute,
            segments: segments.into(),
        }
    }

    /// Append the segments of `other` to this path.
    ///
    /// The result keeps this path's absoluteness, so `:build` appended with
    /// `:sub` is `:build:sub` and the root appended with `a:b` is `:a:b`.
    #[must_use]
    pub fn append(&self, other: &Path) -> Path {
        if other.segments.is_empty() {
            return self.clone();
        }
        if self.segments.is_empty() && self.absolute == other.absolute {
            return other.clone();
        }
        let mut segments = Vec::with_capacity(self.segments.len() + other.segments.len());
        segments.extend(self.segments.iter().cloned());
        segments.extend(other.segments.iter().cloned());
        Path {
            absolute: self.absolute,
            segments: segments.into(),
        }
    }

    /// Check if `self` is a strict ancestor of `other`.
    pub fn is_ancestor_of(&self, other: &Path) -> bool {
        self.absolute == other.absolute
            && self.segments.len() < other.segments.len()
            && other.segments.starts_with(&self.segments)
    }

    /// Strip `ancestor` from the front of this path, yielding a relative
    /// path (the empty relative path, displayed as `""`, when
    /// `ancestor == self`).
    pub fn relative_to(&self, ancestor: &Path) -> Option<Path> {
        if self.absolute != ancestor.absolute || !self.segments.starts_with(&ancestor.segments) {
            return None;
        }
        Some(Path {
            absolute: false,
            segments: Arc::from(&self.segments[ancestor.segments.len()..]),
        })
    }
}

/// Split on the separator, dropping empty and blank segments.
fn split_segments(text: &str) -> Vec<Arc<str>> {
    text.split(SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .map(Arc::from)
        .collect()
}

impl Default for Path {
    fn default() -> Self {
        Self::root()
    }
}

impl Ord for Path {
    /// Absolute paths first, then segment-wise, shorter prefix first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .absolute
            .cmp(&self.absolute)
            .then_with(|| self.segments.cmp(&other.segments))
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(":");
        }
        for (idx, segment) in self.segments.iter().enumerate() {
            if self.absolute || idx > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse_strict(s)
    }
}

impl From<&str> for Path {
    fn from(text: &str) -> Self {
        Path::new(text)
    }
}
