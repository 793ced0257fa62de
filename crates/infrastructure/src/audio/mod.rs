//! Audio backend adapters

mod cpal_catalog;

pub use cpal_catalog::CpalDeviceCatalog;
