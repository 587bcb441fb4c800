//! Bracket matching over `()`, `[]` and `{}`, built on [`Stack`].
//!
//! Every other character is ignored, so these functions can be run directly over source text or
//! arithmetic expressions. Positions are counted in `char`s from the start of the input, not bytes.

use derive_more::{Display, Error, IsVariant};

use crate::collections::adapters::Stack;

mod tests;

/// The reason a string failed [`check`]. Each variant records the position of the offending
/// bracket.
#[derive(Debug, Display, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// A closing bracket appeared with no opener left to match it.
    #[display("Unexpected '{close}' at position {pos}!")]
    Unexpected { close: char, pos: usize },
    /// A closing bracket didn't match the most recent unclosed opener.
    #[display("Mismatched '{close}' at position {pos}, expected a match for '{open}' from position {open_pos}!")]
    Mismatched {
        open: char,
        open_pos: usize,
        close: char,
        pos: usize,
    },
    /// The input ended while an opener was still waiting to be closed. The innermost one is
    /// reported.
    #[display("Unclosed '{open}' at position {pos}!")]
    Unclosed { open: char, pos: usize },
}

/// Returns the closing bracket for `open`, if it is an opening bracket.
pub const fn closer_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

const fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// Checks that every bracket in `expression` is closed by the matching kind, in nesting order.
///
/// # Examples
/// ```
/// # use linear_collections::brackets::{self, BracketError};
/// assert_eq!(brackets::check("f(a[0]) { }"), Ok(()));
/// assert_eq!(
///     brackets::check("(]"),
///     Err(BracketError::Mismatched { open: '(', open_pos: 0, close: ']', pos: 1 })
/// );
/// ```
pub fn check(expression: &str) -> Result<(), BracketError> {
    let mut open = Stack::new();

    for (pos, c) in expression.chars().enumerate() {
        if closer_for(c).is_some() {
            open.push((c, pos));
        } else if is_closer(c) {
            let Some((top, open_pos)) = open.pop() else {
                return Err(BracketError::Unexpected { close: c, pos });
            };

            if closer_for(top) != Some(c) {
                return Err(BracketError::Mismatched {
                    open: top,
                    open_pos,
                    close: c,
                    pos,
                });
            }
        }
    }

    match open.pop() {
        Some((c, pos)) => Err(BracketError::Unclosed { open: c, pos }),
        None => Ok(()),
    }
}

/// Returns true if `expression` contains only balanced, correctly nested brackets. A string with
/// no brackets at all is balanced.
pub fn is_balanced(expression: &str) -> bool {
    check(expression).is_ok()
}
