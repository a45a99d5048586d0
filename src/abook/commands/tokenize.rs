//! Splitting of input lines into a command name and argument tokens.
//!
//! Arguments are separated by whitespace. A double-quoted run is part of a
//! single token with the quotes removed, so names with spaces can be typed
//! as `"Mary Ann"`. Inside quotes `\"` is a literal quote and `\\` a literal
//! backslash; any other backslash is kept as-is. Quoted and unquoted pieces
//! that touch are joined (`a"b c"` is the single token `ab c`).

use crate::error::{AbookError, Result};
use std::iter::Peekable;
use std::str::Chars;

/// Split a raw input line into the command name and the untouched rest.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], line[pos..].trim_start()),
        None => (line, ""),
    }
}

pub fn tokenize(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_token = true;
                read_quoted(&mut chars, &mut current)?;
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

fn read_quoted(chars: &mut Peekable<Chars<'_>>, out: &mut String) -> Result<()> {
    while let Some(c) = chars.next() {
        match c {
            '"' => return Ok(()),
            '\\' => {
                if let Some(&escaped @ ('"' | '\\')) = chars.peek() {
                    out.push(escaped);
                    chars.next();
                } else {
                    out.push('\\');
                }
            }
            c => out.push(c),
        }
    }
    Err(AbookError::Parse("unterminated quoted argument".to_string()))
}
