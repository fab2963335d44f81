//! # Commands Module
//!
//! All commands the pages and the header can send to the shell.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (Command enum + dispatch)
//! ├── cart.rs        ◄─── add, remove, change option, replace, clear
//! ├── navigation.rs  ◄─── navigate, set category
//! └── overlay.rs     ◄─── popups, overlay click, currency choice
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Page / Header                                                          │
//! │  ─────────────                                                          │
//! │  {"command":"remove_from_cart","uniqueId":0}                            │
//! │         │                                                               │
//! │         │ (one JSON line on stdin)                                      │
//! │         ▼                                                               │
//! │  Shell                                                                  │
//! │  ─────                                                                  │
//! │  Command::RemoveFromCart { unique_id: 0 }                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch(&mut state, command)                                          │
//! │         │    └── cart::remove_from_cart(&mut state.cart, 0)             │
//! │         ▼                                                               │
//! │  Ok(ShellView) ──► {"ok": {...}}     Err(ApiError) ──► {"error": {...}} │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod navigation;
pub mod overlay;

use serde::Deserialize;
use storefront_core::{LineItem, Product, SelectedOption};

use crate::error::ApiError;
use crate::state::ShellState;
use crate::view::ShellView;

/// A UI event, as sent by a page or the header.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Command {
    GetView,
    Navigate {
        path: String,
    },
    SetCategory {
        category: String,
    },
    AddToCart {
        product: Product,
        #[serde(default)]
        selected_options: Option<Vec<SelectedOption>>,
    },
    RemoveFromCart {
        unique_id: u64,
    },
    ChangeOption {
        unique_id: u64,
        option_id: String,
        value: String,
    },
    ReplaceCart {
        items: Vec<LineItem>,
    },
    ClearCart,
    ToggleMiniCart,
    ToggleCurrencies,
    SelectCurrency {
        code: String,
    },
    DismissOverlay,
}

/// Applies a command and returns the new view.
///
/// A command that fails leaves the state as it was.
pub fn dispatch(state: &mut ShellState, command: Command) -> Result<ShellView, ApiError> {
    match command {
        Command::GetView => {}
        Command::Navigate { path } => {
            navigation::navigate(&mut state.navigation, &path);
        }
        Command::SetCategory { category } => navigation::set_category(&mut state.cart, category),
        Command::AddToCart {
            product,
            selected_options,
        } => {
            cart::add_to_cart(&mut state.cart, product, selected_options)?;
        }
        Command::RemoveFromCart { unique_id } => {
            cart::remove_from_cart(&mut state.cart, unique_id)?;
        }
        Command::ChangeOption {
            unique_id,
            option_id,
            value,
        } => {
            cart::change_option(&mut state.cart, unique_id, &option_id, &value)?;
        }
        Command::ReplaceCart { items } => {
            cart::replace_cart(&mut state.cart, items)?;
        }
        Command::ClearCart => {
            cart::clear_cart(&mut state.cart);
        }
        Command::ToggleMiniCart => {
            overlay::toggle_mini_cart(&mut state.overlay);
        }
        Command::ToggleCurrencies => {
            overlay::toggle_currencies(&mut state.overlay);
        }
        Command::SelectCurrency { code } => {
            overlay::select_currency(&mut state.currency, &mut state.overlay, &code)?;
        }
        Command::DismissOverlay => {
            overlay::dismiss_overlay(&mut state.overlay);
        }
    }

    Ok(ShellView::compose(state))
}
