//! # State Module
//!
//! Manages application state for the storefront shell.
//!
//! ## Multiple State Types
//! Instead of one struct with every field, each concern gets its own type.
//! Commands declare exactly which parts they touch.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Event Loop (lib.rs)                        │   │
//! │  │  let mut state = ShellState::new(config);                       │   │
//! │  │  dispatch(&mut state, command)                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌──────────────┬─────────┼──────────────┬──────────────┐           │
//! │     ▼              ▼         ▼              ▼              ▼           │
//! │  ┌────────┐  ┌──────────┐ ┌──────────┐ ┌────────────┐ ┌──────────┐     │
//! │  │ Cart   │  │ Overlay  │ │ Currency │ │ Navigation │ │ Config   │     │
//! │  │ Store  │  │ State    │ │ State    │ │ State      │ │ State    │     │
//! │  └────────┘  └──────────┘ └──────────┘ └────────────┘ └──────────┘     │
//! │                                                                         │
//! │  OWNERSHIP:                                                            │
//! │  • One writer (the event loop), so no Mutex and no Arc around state     │
//! │  • Handlers borrow only the parts they need                            │
//! │  • ConfigState is read-only after startup                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod currency;
mod navigation;
mod overlay;

pub use config::{ConfigError, ConfigState};
pub use currency::CurrencyState;
pub use navigation::NavigationState;
pub use overlay::OverlayState;

use storefront_core::CartStore;

/// Everything the shell owns for one session.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub cart: CartStore,
    pub overlay: OverlayState,
    pub currency: CurrencyState,
    pub navigation: NavigationState,
    pub config: ConfigState,
}

impl ShellState {
    /// Fresh session: empty cart, popups closed, configured start page.
    pub fn new(config: ConfigState) -> Self {
        ShellState {
            cart: CartStore::new(),
            overlay: OverlayState::new(),
            currency: CurrencyState::from_config(&config),
            navigation: NavigationState::new(&config.start_path),
            config,
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(ConfigState::default())
    }
}
