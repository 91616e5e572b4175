//! Table data model and rendering for tabeq.
//!
//! A [`Table`] is an immutable, ordered sequence of rows of text cells.
//! Its [`Display`](std::fmt::Display) implementation renders an aligned,
//! pipe-delimited text block suitable for embedding in diff messages:
//!
//! ```
//! use tabeq_table::Table;
//!
//! let table = Table::from_rows([["a", "bb"], ["ccc", "d"]]);
//! assert_eq!(table.to_string(), "| a   | bb |\n| ccc | d  |");
//! ```

mod render;
mod table;

pub use render::render_rows;
pub use table::Table;
