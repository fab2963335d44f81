//! # Storefront Shell Library
//!
//! The root shell of the storefront: it owns the cart and header state,
//! routes between pages and answers every UI event with a fresh view.
//!
//! ## Module Organization
//! ```text
//! storefront_shell/
//! ├── lib.rs          ◄─── You are here (event loop & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── ShellState
//! │   ├── config.rs   ◄─── Configuration from STOREFRONT_* variables
//! │   ├── currency.rs ◄─── Selected display currency
//! │   ├── navigation.rs ◄─ Current path and route
//! │   └── overlay.rs  ◄─── Mini-cart / currency popup flags
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command enum & dispatch
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── navigation.rs ◄─ navigate, set_category
//! │   └── overlay.rs  ◄─── Popup and currency commands
//! ├── view.rs         ◄─── ShellView composition
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Protocol
//! One JSON command per line on stdin, one JSON response per line on stdout:
//! ```text
//! → {"command":"add_to_cart","product":{"id":"ps-5","name":"PlayStation 5"}}
//! ← {"ok":{"header":{...},"overlayClass":"overlay","page":{...}}}
//! → {"command":"remove_from_cart","uniqueId":9}
//! ← {"error":{"code":"NOT_FOUND","message":"Line item not found: 9"}}
//! ```
//! Logs go to stderr, so stdout carries responses only.

pub mod commands;
pub mod error;
pub mod state;
pub mod view;

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::{dispatch, Command};
use error::ApiError;
use state::{ConfigState, ShellState};
use view::ShellView;

/// One line of output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Response {
    Ok(ShellView),
    Error(ApiError),
}

/// Runs the shell until stdin closes.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr)
/// 2. Load configuration from the environment
/// 3. Create the session state (empty cart, start route)
/// 4. Answer commands line by line
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ConfigState::load()?;
    info!(store = %config.store_name, currency = %config.currency_code, "Starting storefront shell");

    let mut state = ShellState::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(response) = handle_line(&mut state, &line) {
            write_response(&mut out, &response)?;
        }
    }

    info!(rows = state.cart.item_count(), "Input closed, ending session");
    Ok(())
}

/// Decodes and applies one input line. Blank lines produce no response.
pub fn handle_line(state: &mut ShellState, line: &str) -> Option<Response> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let result = serde_json::from_str::<Command>(line)
        .map_err(ApiError::from)
        .and_then(|command| dispatch(state, command));

    Some(match result {
        Ok(view) => Response::Ok(view),
        Err(e) => {
            warn!(code = ?e.code, "{}", e.message);
            Response::Error(e)
        }
    })
}

fn write_response<W: Write>(out: &mut W, response: &Response) -> io::Result<()> {
    match serde_json::to_string(response) {
        Ok(json) => writeln!(out, "{}", json)?,
        Err(e) => {
            let fallback = Response::Error(ApiError::internal(e.to_string()));
            let json = serde_json::to_string(&fallback).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    debug!("response written");
    out.flush()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=storefront_shell=trace` - Trace for the shell only
/// - Default: INFO, with DEBUG for the shell
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_shell=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
