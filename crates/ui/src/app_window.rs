//! Application window management
//!
//! This module wraps the generated Slint window behind the application
//! layer's `GuiRoot` port.

use auris_application::ports::GuiRoot;
use auris_application::PlatformError;
use auris_domain::DeviceDescriptor;
use slint::{ComponentHandle, SharedString};

use crate::MainWindow;

/// The native top-level window; exactly one exists per process.
pub struct AppWindow {
    window: MainWindow,
}

impl AppWindow {
    /// Creates the application window.
    ///
    /// # Errors
    ///
    /// Returns a `PlatformError` when the host has no usable display or
    /// windowing subsystem.
    pub fn new() -> Result<Self, PlatformError> {
        let window = MainWindow::new().map_err(|err| PlatformError::new(err.to_string()))?;
        Ok(Self { window })
    }

    /// Runs the window's event loop, blocking until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns a `PlatformError` if the event loop fails.
    pub fn run(&self) -> Result<(), PlatformError> {
        self.window
            .run()
            .map_err(|err| PlatformError::new(err.to_string()))
    }

    /// Returns a reference to the underlying Slint window.
    #[must_use]
    pub const fn window(&self) -> &MainWindow {
        &self.window
    }
}

impl GuiRoot for AppWindow {
    fn bind_device(&self, device: &DeviceDescriptor) {
        self.window
            .set_device_name(SharedString::from(device.name()));
        self.window
            .set_device_label(SharedString::from(format!("input {}", device.index())));
    }

    fn run_event_loop(&self) -> Result<(), PlatformError> {
        self.run()
    }
}
