//! Device identity.

use std::fmt;

/// A deterministic device identity presented to the service.
///
/// The seed is derived from the application name and version, so the
/// service sees the same device across runs of a given build rather
/// than a new login origin every time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Device(String);

impl Device {
    /// Create a device identity for an application build.
    pub fn new(app_name: &str, app_version: &str) -> Self {
        Self(format!("{}-{}", app_name, app_version))
    }

    /// Returns the device seed string.
    pub fn seed(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
