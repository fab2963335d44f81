//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                     │
//! │  ├── CoreError        - Cart operation failures                         │
//! │  ├── ValidationError  - Input validation failures                       │
//! │  └── RouteError       - Path did not match any page                     │
//! │                                                                         │
//! │  Shell errors (in app)                                                  │
//! │  └── ApiError         - What the page layer sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Page                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (unique id, field, path)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart operation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No line item in the cart carries the given unique id.
    ///
    /// ## When This Occurs
    /// - A page holds a stale cart snapshot and clicks "-" on a row that was
    ///   already removed
    /// - A caller invents a unique id instead of taking it from the rendered cart
    ///
    /// This is a caller bug, never a transient fault. The cart is left untouched.
    #[error("Line item not found: {0}")]
    LineItemNotFound(u64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any cart state is replaced, so a rejected input never
/// leaves a half-applied cart behind.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. a lowercase currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. two line items sharing a unique id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Route Error
// =============================================================================

/// Routing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The path matches none of the four storefront pages.
    #[error("No page matches path: {0}")]
    NoMatch(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
