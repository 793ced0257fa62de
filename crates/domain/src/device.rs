//! Device identification types.
//!
//! A device index selects one entry among the input devices enumerable on the
//! host. The index is configured once at process start and never mutated after
//! the application component is constructed.

use std::fmt;

use crate::error::DomainError;

/// Position of a hardware input device in the host's enumeration order.
///
/// A `DeviceIndex` is always non-negative by construction; whether it actually
/// names an attached device is only known against a concrete device catalog
/// and is checked at component construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DeviceIndex(usize);

impl DeviceIndex {
    /// Creates a device index from an in-range position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based position.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for DeviceIndex {
    type Error = DomainError;

    /// Converts a raw configured integer into a device index.
    ///
    /// Configuration reaches the bootstrap as a plain integer, so a negative
    /// value is representable there; it is rejected here.
    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        usize::try_from(raw)
            .map(Self)
            .map_err(|_| DomainError::InvalidDeviceIndex(raw))
    }
}

impl fmt::Display for DeviceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One enumerable input device as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    index: DeviceIndex,
    name: String,
}

impl DeviceDescriptor {
    /// Creates a descriptor for the device at `index`.
    pub fn new(index: DeviceIndex, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    /// Returns the device's position in the host enumeration.
    #[must_use]
    pub const fn index(&self) -> DeviceIndex {
        self.index
    }

    /// Returns the host-reported device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DeviceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (input {})", self.name, self.index)
    }
}
