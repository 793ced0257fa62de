//! Device catalog port

use auris_domain::DeviceDescriptor;
use thiserror::Error;

/// Errors reported by a device catalog backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The audio backend could not enumerate devices.
    #[error("audio backend unavailable: {0}")]
    Backend(String),
}

/// Port for enumerating the host's audio input devices.
///
/// Implementations must report devices in a stable order so that an index
/// chosen at configuration time keeps naming the same device for the lifetime
/// of the process.
pub trait DeviceCatalog {
    /// Returns the currently attached input devices, in host order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be queried.
    fn input_devices(&self) -> Result<Vec<DeviceDescriptor>, CatalogError>;
}
