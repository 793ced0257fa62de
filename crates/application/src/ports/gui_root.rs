//! GUI root port

use auris_domain::DeviceDescriptor;

use crate::error::PlatformError;

/// Port for the native top-level window and its owning event-loop driver.
///
/// Exactly one implementation instance exists per process; the bootstrap owns
/// it and hands the application component a non-owning reference at
/// construction time.
pub trait GuiRoot {
    /// Surfaces the bound device on the window.
    fn bind_device(&self, device: &DeviceDescriptor);

    /// Blocks the calling thread, dispatching window events until the root is
    /// closed by the user or the window manager.
    ///
    /// This is the single suspension point of the whole program.
    ///
    /// # Errors
    ///
    /// Returns an error if the windowing backend fails while the loop runs.
    fn run_event_loop(&self) -> Result<(), PlatformError>;
}
