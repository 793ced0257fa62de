//! Auris UI - User interface layer
//!
//! This crate provides the Slint-based window for the Auris desktop
//! application.

// Allow lints that trigger on Slint-generated code which we cannot control
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]

mod app_window;

pub use app_window::AppWindow;

// Include the generated Slint code
slint::include_modules!();
