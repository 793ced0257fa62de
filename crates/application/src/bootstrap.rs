//! Process bootstrap.
//!
//! The bootstrap owns the single GUI root and the single application
//! component, and drives the lifecycle:
//!
//! `NotStarted -> RootCreated -> ComponentConstructed -> EventLoopRunning -> Terminated`
//!
//! Transitions are strictly sequential and irreversible. Any failure before
//! the event loop starts short-circuits to `Terminated`; a component
//! construction failure additionally releases the root before the error is
//! reported, so no half-initialized window outlives the failure.

use auris_domain::BootstrapPhase;
use thiserror::Error;

use crate::component::DeviceComponent;
use crate::error::PlatformError;
use crate::ports::{DeviceCatalog, GuiRoot};
use crate::use_cases::DeviceSelectionError;

/// Fatal bootstrap failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// The host windowing subsystem could not be initialized or failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The application component could not be constructed.
    #[error("component construction failed: {0}")]
    Device(#[from] DeviceSelectionError),

    /// A bootstrap step was invoked out of order.
    #[error("bootstrap step invoked in phase \"{0}\"")]
    OutOfPhase(BootstrapPhase),
}

impl BootstrapError {
    /// Maps the failure class to the process exit status.
    ///
    /// 1 = platform/display error, 2 = device/component construction error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Platform(_) => 1,
            Self::Device(_) | Self::OutOfPhase(_) => 2,
        }
    }
}

/// The process bootstrap: sole owner of the GUI root and the component.
pub struct Bootstrap<R: GuiRoot> {
    root: Option<R>,
    component: Option<DeviceComponent>,
    phase: BootstrapPhase,
}

impl<R: GuiRoot> Bootstrap<R> {
    /// Creates a bootstrap in the `NotStarted` phase.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            component: None,
            phase: BootstrapPhase::NotStarted,
        }
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    /// Returns the constructed component, if the bootstrap got that far.
    #[must_use]
    pub const fn component(&self) -> Option<&DeviceComponent> {
        self.component.as_ref()
    }

    /// Step 1: create the GUI root.
    ///
    /// # Errors
    ///
    /// Returns `BootstrapError::Platform` when the factory fails; the phase
    /// moves to `Terminated` and nothing is ever displayed.
    pub fn create_root<F>(&mut self, create: F) -> Result<(), BootstrapError>
    where
        F: FnOnce() -> Result<R, PlatformError>,
    {
        if self.phase != BootstrapPhase::NotStarted {
            return Err(BootstrapError::OutOfPhase(self.phase));
        }
        match create() {
            Ok(root) => {
                self.root = Some(root);
                self.phase = BootstrapPhase::RootCreated;
                Ok(())
            }
            Err(err) => {
                self.phase = BootstrapPhase::Terminated;
                Err(err.into())
            }
        }
    }

    /// Step 2: construct the application component against the root.
    ///
    /// The component receives a non-owning reference to the root and the raw
    /// configured device index; no range validation happens at this layer.
    ///
    /// # Errors
    ///
    /// Returns `BootstrapError::Device` when construction fails. On that path
    /// the root is dropped before the error is returned, releasing the native
    /// window.
    pub fn construct_component<C: DeviceCatalog>(
        &mut self,
        catalog: C,
        device_index: i64,
    ) -> Result<(), BootstrapError> {
        if self.phase != BootstrapPhase::RootCreated {
            return Err(BootstrapError::OutOfPhase(self.phase));
        }
        let Some(root) = self.root.as_ref() else {
            return Err(BootstrapError::OutOfPhase(self.phase));
        };
        match DeviceComponent::new(root, catalog, device_index) {
            Ok(component) => {
                self.component = Some(component);
                self.phase = BootstrapPhase::ComponentConstructed;
                Ok(())
            }
            Err(err) => {
                self.root = None;
                self.phase = BootstrapPhase::Terminated;
                Err(err.into())
            }
        }
    }

    /// Step 3: block on the GUI event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns `BootstrapError::Platform` if the loop itself fails. Either
    /// way the phase ends at `Terminated`.
    pub fn run_event_loop(&mut self) -> Result<(), BootstrapError> {
        if self.phase != BootstrapPhase::ComponentConstructed {
            return Err(BootstrapError::OutOfPhase(self.phase));
        }
        let Some(root) = self.root.as_ref() else {
            return Err(BootstrapError::OutOfPhase(self.phase));
        };
        self.phase = BootstrapPhase::EventLoopRunning;
        let result = root.run_event_loop();
        self.phase = BootstrapPhase::Terminated;
        result.map_err(BootstrapError::from)
    }

    /// Drives all three steps in order; this is the whole of `main`.
    ///
    /// # Errors
    ///
    /// Propagates the first failing step's error.
    pub fn run<F, C>(create: F, catalog: C, device_index: i64) -> Result<(), BootstrapError>
    where
        F: FnOnce() -> Result<R, PlatformError>,
        C: DeviceCatalog,
    {
        let mut bootstrap = Self::new();
        bootstrap.create_root(create)?;
        bootstrap.construct_component(catalog, device_index)?;
        bootstrap.run_event_loop()
    }
}

impl<R: GuiRoot> Default for Bootstrap<R> {
    fn default() -> Self {
        Self::new()
    }
}
