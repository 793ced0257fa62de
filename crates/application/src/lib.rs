//! Auris Application - Ports and bootstrap orchestration
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the GUI root and the device catalog)
//! - The device selection use case
//! - The application component construction contract
//! - The bootstrap state machine that wires everything together

pub mod bootstrap;
pub mod component;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use bootstrap::{Bootstrap, BootstrapError};
pub use component::DeviceComponent;
pub use error::PlatformError;
pub use ports::{CatalogError, DeviceCatalog, GuiRoot};
pub use use_cases::{DeviceSelectionError, SelectDevice};
