use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PathErrorType {
    /// An unmatched `]`, or a `[` inside a bracketed segment.
    MalformedPath,
    /// The path ended before a matching `]`.
    UnclosedBracket,
}

#[derive(Debug, PartialEq)]
pub struct PathError {
    pub kind: PathErrorType,
    pub msg: String,
    /// Byte offset of the offending character.
    pub index: usize,
}

impl PathError {
    pub fn new(kind: PathErrorType, msg: String, index: usize) -> Self {
        Self { kind, msg, index }
    }

    pub fn malformed(msg: String, index: usize) -> Self {
        Self {
            kind: PathErrorType::MalformedPath,
            msg,
            index,
        }
    }

    pub fn unclosed(msg: String, index: usize) -> Self {
        Self {
            kind: PathErrorType::UnclosedBracket,
            msg,
            index,
        }
    }

    /// Render `path` with a caret under the offending character.
    ///
    /// ```text
    /// a[[b]
    ///   ^
    /// ```
    pub fn pointer(&self, path: &str) -> String {
        let column = path
            .get(..self.index)
            .map_or(self.index, |prefix| prefix.chars().count());
        format!("{}\n{}^", path, " ".repeat(column))
    }
}

impl fmt::Display for PathErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathErrorType::MalformedPath => f.write_str("malformed path:"),
            PathErrorType::UnclosedBracket => f.write_str("unclosed path:"),
        }
    }
}

impl std::error::Error for PathError {}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.msg, self.index)
    }
}
