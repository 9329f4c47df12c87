//! Registry configuration.

/// What a flush does when a project's identity path is already taken by a
/// project from another build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollisionPolicy {
    /// Last write wins. The replaced entry keeps its iteration position.
    #[default]
    Replace,
    /// Fail the flush with [`RegistryError::PathCollision`](crate::RegistryError::PathCollision).
    /// The offending build stays queued.
    Reject,
}

/// Configuration for a [`ProjectRegistry`](crate::ProjectRegistry).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegistryConfig {
    /// Handling of identity path collisions between builds.
    pub collision: CollisionPolicy,
}

impl RegistryConfig {
    /// Create a config that rejects identity path collisions.
    pub fn strict() -> Self {
        RegistryConfig {
            collision: CollisionPolicy::Reject,
        }
    }

    /// Set the collision policy.
    #[must_use]
    pub fn with_collision_policy(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }
}
