//! # Storefront Shell Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration (`STOREFRONT_*` variables)
//! 3. Create the session state
//! 4. Answer JSON commands from stdin until it closes

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match storefront_shell::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("storefront: {}", e);
            ExitCode::FAILURE
        }
    }
}
