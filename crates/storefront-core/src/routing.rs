//! # Routing
//!
//! Maps storefront paths to pages.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Path                   Route                   Page receives           │
//! │  ────                   ─────                   ─────────────           │
//! │  /                      Home                    items, add              │
//! │  /category/:name        Category { name }       items, add              │
//! │  /product/:id           Product { id }          currency, add           │
//! │  /cart                  Cart                    items, currency,        │
//! │                                                 add, remove, change     │
//! │  anything else          (no match)              nothing rendered        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Matching is exact. Query strings and fragments are ignored, and one
//! trailing slash is tolerated.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::RouteError;

/// A matched storefront route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum Route {
    Home,
    Category { name: String },
    Product { id: String },
    Cart,
}

impl Route {
    /// Matches a path against the four storefront pages.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Route;
    ///
    /// assert_eq!(Route::parse("/cart").unwrap(), Route::Cart);
    /// assert_eq!(
    ///     Route::parse("/category/tech").unwrap(),
    ///     Route::Category { name: "tech".to_string() }
    /// );
    /// assert!(Route::parse("/checkout").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Route, RouteError> {
        let no_match = || RouteError::NoMatch(path.to_string());

        let pathname = path.split(['?', '#']).next().unwrap_or_default();
        let pathname = match pathname.strip_suffix('/') {
            // At most one trailing slash is forgiven.
            Some(stripped) if !stripped.is_empty() && !stripped.ends_with('/') => stripped,
            _ => pathname,
        };

        if pathname == "/" {
            return Ok(Route::Home);
        }

        let rest = pathname.strip_prefix('/').ok_or_else(no_match)?;
        let segments: Vec<&str> = rest.split('/').collect();

        match segments.as_slice() {
            ["cart"] => Ok(Route::Cart),
            ["category", name] if !name.is_empty() => Ok(Route::Category {
                name: (*name).to_string(),
            }),
            ["product", id] if !id.is_empty() => Ok(Route::Product {
                id: (*id).to_string(),
            }),
            _ => Err(no_match()),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Category { name } => format!("/category/{}", name),
            Route::Product { id } => format!("/product/{}", id),
            Route::Cart => "/cart".to_string(),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Route::Home => Page::Home,
            Route::Category { .. } => Page::Category,
            Route::Product { .. } => Page::Product,
            Route::Cart => Page::Cart,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Page kinds, without route parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Home,
    Category,
    Product,
    Cart,
}

impl Page {
    /// What the shell passes down to this page.
    pub const fn bindings(self) -> PageBindings {
        match self {
            Page::Home | Page::Category => PageBindings {
                cart_items: true,
                currency: false,
                on_add: true,
                on_remove: false,
                on_change: false,
            },
            Page::Product => PageBindings {
                cart_items: false,
                currency: true,
                on_add: true,
                on_remove: false,
                on_change: false,
            },
            Page::Cart => PageBindings {
                cart_items: true,
                currency: true,
                on_add: true,
                on_remove: true,
                on_change: true,
            },
        }
    }
}

/// The state and callbacks a page is wired to.
///
/// The header is not listed here: it is rendered on every route and gets
/// every callback plus the category and the whole-cart setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PageBindings {
    pub cart_items: bool,
    pub currency: bool,
    pub on_add: bool,
    pub on_remove: bool,
    pub on_change: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("/cart").unwrap(), Route::Cart);
        assert_eq!(
            Route::parse("/category/clothes").unwrap(),
            Route::Category {
                name: "clothes".to_string()
            }
        );
        assert_eq!(
            Route::parse("/product/apple-airtag").unwrap(),
            Route::Product {
                id: "apple-airtag".to_string()
            }
        );
    }

    #[test]
    fn test_parse_tolerates_trailing_slash_and_query() {
        assert_eq!(Route::parse("/cart/").unwrap(), Route::Cart);
        assert_eq!(Route::parse("/cart?ref=header").unwrap(), Route::Cart);
        assert_eq!(Route::parse("/#top").unwrap(), Route::Home);
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        for path in [
            "",
            "//",
            "cart",
            "/checkout",
            "/category",
            "/category/",
            "/category/tech/extra",
            "/product//",
            "/cart//",
        ] {
            assert_eq!(
                Route::parse(path),
                Err(RouteError::NoMatch(path.to_string())),
                "{path}"
            );
        }
    }

    #[test]
    fn test_path_round_trips() {
        let routes = [
            Route::Home,
            Route::Cart,
            Route::Category {
                name: "all".to_string(),
            },
            Route::Product {
                id: "ps-5".to_string(),
            },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_page_bindings() {
        assert!(Page::Cart.bindings().on_remove);
        assert!(Page::Cart.bindings().on_change);
        assert!(!Page::Home.bindings().on_remove);
        assert!(!Page::Product.bindings().cart_items);
        assert!(Page::Product.bindings().currency);
        assert_eq!(Page::Home.bindings(), Page::Category.bindings());
    }

    #[test]
    fn test_route_wire_shape() {
        let json = serde_json::to_value(Route::Category {
            name: "tech".to_string(),
        })
        .unwrap();
        assert_eq!(json["page"], "category");
        assert_eq!(json["name"], "tech");
    }
}
