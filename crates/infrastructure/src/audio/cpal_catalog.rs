//! cpal-backed device catalog adapter

use auris_application::ports::{CatalogError, DeviceCatalog};
use auris_domain::{DeviceDescriptor, DeviceIndex};
use cpal::traits::{DeviceTrait, HostTrait};

/// Device catalog backed by the default cpal host.
///
/// Devices are indexed in the order the host reports them, which is stable
/// for the lifetime of the process.
pub struct CpalDeviceCatalog {
    host: cpal::Host,
}

impl CpalDeviceCatalog {
    /// Creates a catalog over the platform's default audio host.
    #[must_use]
    pub fn new() -> Self {
        Self {
            host: cpal::default_host(),
        }
    }

    /// Returns the audio host's name, for diagnostics.
    #[must_use]
    pub fn host_name(&self) -> &'static str {
        self.host.id().name()
    }
}

impl Default for CpalDeviceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceCatalog for CpalDeviceCatalog {
    fn input_devices(&self) -> Result<Vec<DeviceDescriptor>, CatalogError> {
        let devices = self
            .host
            .input_devices()
            .map_err(|err| CatalogError::Backend(err.to_string()))?;

        Ok(devices
            .enumerate()
            .map(|(i, device)| {
                // Some backends cannot name every device; keep it addressable.
                let name = device.name().unwrap_or_else(|_| format!("input {i}"));
                DeviceDescriptor::new(DeviceIndex::new(i), name)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_reports_a_host() {
        let catalog = CpalDeviceCatalog::new();
        assert!(!catalog.host_name().is_empty());
    }

    #[test]
    fn test_enumeration_does_not_panic() {
        // Hardware-dependent: hosts without sound servers may report an error
        // or an empty list. Either is acceptable here.
        let catalog = CpalDeviceCatalog::new();
        match catalog.input_devices() {
            Ok(devices) => {
                for (i, device) in devices.iter().enumerate() {
                    assert_eq!(device.index(), DeviceIndex::new(i));
                }
            }
            Err(CatalogError::Backend(message)) => assert!(!message.is_empty()),
        }
    }
}
