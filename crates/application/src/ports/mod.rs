//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure or UI layer.

mod device_catalog;
mod gui_root;

pub use device_catalog::{CatalogError, DeviceCatalog};
pub use gui_root::GuiRoot;
