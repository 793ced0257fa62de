//! Auris Domain - Core types
//!
//! This crate defines the domain model for the Auris desktop application.
//! All types here are pure Rust with no I/O dependencies.

pub mod device;
pub mod error;
pub mod phase;

pub use device::{DeviceDescriptor, DeviceIndex};
pub use error::{DomainError, DomainResult};
pub use phase::BootstrapPhase;
