//! Application component construction contract.
//!
//! The component owns all behavior past the bootstrap boundary. The bootstrap
//! only sees its construction: the component receives a non-owning reference to
//! the GUI root and the raw configured device index, validates the index
//! against the host's enumerable input devices, and binds the resolved device
//! to the window. Construction fails with an explicit error when the index
//! does not name an attached device.

use auris_domain::{DeviceDescriptor, DeviceIndex};

use crate::ports::{DeviceCatalog, GuiRoot};
use crate::use_cases::{DeviceSelectionError, SelectDevice};

/// The application component, bound to one audio input device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceComponent {
    device: DeviceDescriptor,
}

impl DeviceComponent {
    /// Constructs the component against `root`, bound to the device named by
    /// the raw configured `device_index`.
    ///
    /// # Errors
    ///
    /// Returns an error when the index is negative, out of range for the
    /// catalog, or the catalog cannot be queried. The root is left untouched
    /// on failure.
    pub fn new<R, C>(
        root: &R,
        catalog: C,
        device_index: i64,
    ) -> Result<Self, DeviceSelectionError>
    where
        R: GuiRoot + ?Sized,
        C: DeviceCatalog,
    {
        let index = DeviceIndex::try_from(device_index)?;
        let device = SelectDevice::new(catalog).execute(index)?;
        root.bind_device(&device);
        Ok(Self { device })
    }

    /// Returns the device this component is bound to.
    #[must_use]
    pub const fn device(&self) -> &DeviceDescriptor {
        &self.device
    }
}
