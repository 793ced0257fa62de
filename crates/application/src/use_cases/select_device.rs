//! Select device use case

use auris_domain::{DeviceDescriptor, DeviceIndex, DomainError};

use crate::ports::{CatalogError, DeviceCatalog};

/// Errors that can occur when selecting an input device.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DeviceSelectionError {
    /// The configured index is not a valid device index at all.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The host has no input devices.
    #[error("no input devices available on this host")]
    NoDevices,

    /// The index does not name any currently attached device.
    #[error("device index {index} is out of range ({available} input devices available)")]
    OutOfRange {
        /// The requested index.
        index: DeviceIndex,
        /// How many input devices the host reported.
        available: usize,
    },

    /// The catalog backend failed.
    #[error("device enumeration failed: {0}")]
    Catalog(#[from] CatalogError),
}

/// Resolves a configured device index to a concrete input device.
pub struct SelectDevice<C> {
    catalog: C,
}

impl<C: DeviceCatalog> SelectDevice<C> {
    /// Creates a new `SelectDevice` use case.
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Executes the use case.
    ///
    /// # Errors
    ///
    /// Returns an error if the host has no input devices, the index exceeds
    /// the enumerable count, or the backend cannot be queried.
    pub fn execute(&self, index: DeviceIndex) -> Result<DeviceDescriptor, DeviceSelectionError> {
        let mut devices = self.catalog.input_devices()?;
        if devices.is_empty() {
            return Err(DeviceSelectionError::NoDevices);
        }
        let available = devices.len();
        if index.get() >= available {
            return Err(DeviceSelectionError::OutOfRange { index, available });
        }
        Ok(devices.swap_remove(index.get()))
    }
}
