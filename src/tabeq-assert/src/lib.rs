//! Table equality assertions for behavior-driven test suites.
//!
//! Given an "expected" and an "actual" [`Table`], this crate decides
//! whether they are equivalent under configurable rules — header
//! validation and row-order sensitivity — and, on mismatch, reports a
//! typed error carrying a ready-to-display message: labeled blocks of
//! missing and unexpected rows when order is ignored, or a unified
//! line-diff of the rendered bodies when order matters.
//!
//! # Example
//!
//! ```
//! use tabeq_assert::{CompareError, Table, TableEqualityAssertion};
//!
//! let expected = Table::from_rows([["id1", "Label one"], ["id2", "Label two"]]);
//! let actual = Table::from_rows([["id1", "Label one"]]);
//!
//! let err = TableEqualityAssertion::new(expected, actual)
//!     .ignore_row_order()
//!     .assert_equal()
//!     .unwrap_err();
//!
//! assert!(matches!(err, CompareError::BodyMismatch { .. }));
//! assert_eq!(err.message(), "--- Missing rows\n| id2 | Label two |");
//! ```
//!
//! Each assertion is a stateless, single-shot decision procedure:
//! independent instances are safe to use concurrently without locking.

mod assertion;
mod diff;
mod error;

pub use assertion::{
    DEFAULT_MISSING_ROWS_LABEL, DEFAULT_UNEXPECTED_ROWS_LABEL, TableEqualityAssertion,
    UNSPECIFIED_DIFFERENCE_NOTICE,
};
pub use error::{CompareError, CompareResult};

// Re-exported so callers need only one dependency.
pub use tabeq_table::Table;
