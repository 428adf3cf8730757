use async_trait::async_trait;

/// Privilege that must be granted before any sensor is opened.
pub const HEALTH_INFO_PRIVILEGE: &str = "http://tizen.org/privilege/healthinfo";

/// Runtime permission check that gates access to the sensors.
#[async_trait]
pub trait PermissionGate: Send + Sync {
    /// Resolves to `true` if `privilege` is granted.
    async fn request(&self, privilege: &str) -> bool;
}
