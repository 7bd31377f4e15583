//! The path tokenizer.
//!
//! A single left-to-right scan over the characters of a path string. Three
//! characters drive state transitions (`[`, `]` and `.` outside brackets),
//! everything else accumulates into the pending segment.
use crate::errors::PathError;

use std::str::CharIndices;

#[derive(Debug, PartialEq, Clone, Copy)]
enum State {
    Start,
    InProperty,
    InBrackets,
}

/// A path tokenizer, producing a vector of segments.
struct Lexer<'p> {
    path: &'p str,
    segments: Vec<String>,

    chars: CharIndices<'p>,
    state: State,

    // Start of the pending segment.
    start: usize,

    // Position of the most recent `[`.
    bracket: usize,
}

impl<'p> Lexer<'p> {
    fn new(path: &'p str) -> Self {
        Self {
            path,
            segments: Vec::new(),
            chars: path.char_indices(),
            state: State::Start,
            start: 0,
            bracket: 0,
        }
    }

    fn run(&mut self) -> Result<(), PathError> {
        while let Some((pos, ch)) = self.chars.next() {
            match ch {
                '[' => self.lex_open_bracket(pos)?,
                ']' => self.lex_close_bracket(pos)?,
                '.' if self.state != State::InBrackets => self.lex_dot(pos),
                _ => self.lex_char(pos, ch),
            }
        }

        if self.state == State::InBrackets {
            return Err(PathError::unclosed(
                String::from("expected ']' before end of path"),
                self.bracket,
            ));
        }

        Ok(())
    }

    fn value(&self, end: usize) -> &str {
        #[cfg(debug_assertions)]
        debug_assert!(
            self.start <= end && end <= self.path.len(),
            "segment bounds are out of range"
        );

        // `start` and `end` always sit next to an ASCII delimiter or at the
        // ends of the path, so both are on char boundaries.
        &self.path[self.start..end]
    }

    fn emit(&mut self, end: usize) {
        let segment = self.value(end).to_owned();
        self.segments.push(segment);
    }

    fn lex_open_bracket(&mut self, pos: usize) -> Result<(), PathError> {
        if self.state == State::InBrackets {
            return Err(PathError::malformed(
                String::from("unexpected '[' inside brackets"),
                pos,
            ));
        }

        // Nothing pending after `]` or at the start of the path.
        if self.start != pos {
            self.emit(pos);
        }

        self.state = State::InBrackets;
        self.bracket = pos;
        self.start = pos + 1;
        Ok(())
    }

    fn lex_close_bracket(&mut self, pos: usize) -> Result<(), PathError> {
        if self.state != State::InBrackets {
            return Err(PathError::malformed(
                String::from("unexpected ']' without a matching '['"),
                pos,
            ));
        }

        // Empty brackets are an empty segment.
        self.emit(pos);

        self.state = State::InProperty;
        self.start = pos + 1;
        Ok(())
    }

    fn lex_dot(&mut self, pos: usize) {
        // A leading dot yields an empty segment, consecutive dots do not.
        if self.start != pos || self.state == State::Start {
            self.emit(pos);
        }

        self.state = State::InProperty;
        self.start = pos + 1;
    }

    fn lex_char(&mut self, pos: usize, ch: char) {
        let end = pos + ch.len_utf8();
        if end == self.path.len() {
            self.emit(end);
        }
    }
}

/// Split `path` into segments.
pub fn lex(path: &str) -> Result<Vec<String>, PathError> {
    let mut lexer = Lexer::new(path);
    lexer.run()?;
    Ok(lexer.segments)
}
