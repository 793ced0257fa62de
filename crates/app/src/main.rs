//! Auris - Main Entry Point
//!
//! This is the desktop application entry point: it creates the window,
//! constructs the device-bound application component, and blocks on the UI
//! event loop until the window closes.

use std::process::ExitCode;

use auris_application::{Bootstrap, BootstrapError};
use auris_infrastructure::CpalDeviceCatalog;
use auris_ui::AppWindow;

/// The one configured value: which input device the component binds to.
const DEVICE_INDEX: i64 = 0;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("auris: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<(), BootstrapError> {
    Bootstrap::run(AppWindow::new, CpalDeviceCatalog::new(), DEVICE_INDEX)
}
