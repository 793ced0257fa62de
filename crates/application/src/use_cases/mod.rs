//! Use case orchestration

mod select_device;

pub use select_device::{DeviceSelectionError, SelectDevice};
