//! Split a dotted path expression into segments, ready for stepwise
//! traversal of a nested structure.
//!
//! ## Tokenizing
//!
//! Dots separate segments. Square brackets escape a segment that contains
//! dots of its own.
//!
//! ```
//! use rust_topath::{errors::PathError, tokenize};
//!
//! fn main() -> Result<(), PathError> {
//!     let segments = tokenize("config[server.tls].cert")?;
//!     assert_eq!(segments, vec!["config", "server.tls", "cert"]);
//!     Ok(())
//! }
//! ```
//!
//! A few edge cases produce empty segments. A leading dot, or empty
//! brackets, yield an empty string; consecutive dots and a trailing dot do
//! not.
//!
//! ```text
//! .a    -> ["", "a"]
//! a[]b  -> ["a", "", "b"]
//! a..b  -> ["a", "b"]
//! a.    -> ["a"]
//! ```
//!
//! ## Errors
//!
//! A nested `[` or an unmatched `]` is a [`PathErrorType::MalformedPath`],
//! and a path that ends inside brackets is a
//! [`PathErrorType::UnclosedBracket`]. Use [`PathError::pointer`] to show
//! where things went wrong.
//!
//! ```
//! use rust_topath::tokenize;
//!
//! let err = tokenize("a[[b]").unwrap_err();
//! assert_eq!(err.pointer("a[[b]"), "a[[b]\n  ^");
//! ```
//!
//! ## Segments in, segments out
//!
//! A path that is already split is returned unchanged. [`join`] goes the
//! other way, although segments are not, in general, path strings
//! themselves: `tokenize` applied to a segment like `"b.c"` splits it
//! again.
pub mod errors;
pub mod lexer;
pub mod path;

pub use errors::PathError;
pub use errors::PathErrorType;
pub use path::join;
pub use path::tokenize;
pub use path::PathExpr;
