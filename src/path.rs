use std::fmt::Write;

use crate::{errors::PathError, lexer::lex};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLAIN_SEGMENT: Regex = Regex::new(r"^[^.\[\]]+$").unwrap();
}

/// A path expression, either a path string or an already tokenized
/// sequence of segments.
#[derive(Debug, PartialEq, Clone)]
pub enum PathExpr<'p> {
    Str(&'p str),
    Segments(Vec<String>),
}

impl<'p> From<&'p str> for PathExpr<'p> {
    fn from(path: &'p str) -> Self {
        PathExpr::Str(path)
    }
}

impl<'p> From<&'p String> for PathExpr<'p> {
    fn from(path: &'p String) -> Self {
        PathExpr::Str(path.as_str())
    }
}

impl From<Vec<String>> for PathExpr<'_> {
    fn from(segments: Vec<String>) -> Self {
        PathExpr::Segments(segments)
    }
}

impl From<Vec<&str>> for PathExpr<'_> {
    fn from(segments: Vec<&str>) -> Self {
        PathExpr::Segments(segments.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for PathExpr<'_> {
    fn from(segments: &[&str]) -> Self {
        PathExpr::Segments(segments.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// Convert a path expression into a vector of segments.
///
/// Square brackets escape dots that would otherwise be read as separators.
///
/// ```
/// use rust_topath::tokenize;
///
/// assert_eq!(tokenize("a.b.c").unwrap(), vec!["a", "b", "c"]);
/// assert_eq!(tokenize("a[b].c").unwrap(), vec!["a", "b", "c"]);
/// assert_eq!(tokenize("a[b.c].e.f").unwrap(), vec!["a", "b.c", "e", "f"]);
/// assert_eq!(tokenize("a[b][c][d]").unwrap(), vec!["a", "b", "c", "d"]);
/// ```
///
/// Segments are returned as they are, without validation.
///
/// ```
/// use rust_topath::tokenize;
///
/// let segments = vec![String::from("a]"), String::from("")];
/// assert_eq!(tokenize(segments.clone()).unwrap(), segments);
/// ```
pub fn tokenize<'p>(path: impl Into<PathExpr<'p>>) -> Result<Vec<String>, PathError> {
    match path.into() {
        PathExpr::Str(path) => lex(path),
        PathExpr::Segments(segments) => Ok(segments),
    }
}

/// Render segments as a path string that tokenizes back to `segments`.
///
/// Returns `None` if any segment contains `[` or `]`, which can't be
/// escaped.
///
/// ```
/// use rust_topath::join;
///
/// assert_eq!(join(&["a", "b.c", "", "d"]).as_deref(), Some("a[b.c][].d"));
/// assert_eq!(join(&["a[0]"]), None);
/// ```
pub fn join<S: AsRef<str>>(segments: &[S]) -> Option<String> {
    let mut buf = String::new();

    for (i, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        if PLAIN_SEGMENT.is_match(segment) {
            if i > 0 {
                buf.push('.');
            }
            buf.push_str(segment);
        } else if segment.contains(['[', ']']) {
            return None;
        } else {
            write!(buf, "[{}]", segment).ok()?;
        }
    }

    Some(buf)
}
