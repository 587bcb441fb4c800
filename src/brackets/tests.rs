#![cfg(test)]

use super::*;

#[test]
fn test_balanced() {
    assert!(is_balanced("{[()]}"));
    assert!(is_balanced("()[]{}"));
    assert!(is_balanced(""));
    assert!(is_balanced("no brackets here"));
    assert!(is_balanced("let x = v[(a + b) * 2] { y };"));
}

#[test]
fn test_unbalanced() {
    assert!(!is_balanced("(]"));
    assert!(!is_balanced("([)]"));
    assert!(!is_balanced("(("));
    assert!(!is_balanced("())"));
    assert!(!is_balanced("}{"));
}

#[test]
fn test_error_kinds() {
    assert_eq!(check(")"), Err(BracketError::Unexpected { close: ')', pos: 0 }));
    assert_eq!(
        check("a{b]"),
        Err(BracketError::Mismatched {
            open: '{',
            open_pos: 1,
            close: ']',
            pos: 3,
        })
    );
    assert_eq!(check("[(x)"), Err(BracketError::Unclosed { open: '[', pos: 0 }));
    assert!(check("(()").is_err_and(|e| e.is_unclosed()));
    assert_eq!(
        check("([]").map_err(|e| e.to_string()),
        Err("Unclosed '(' at position 0!".to_owned())
    );
}

#[test]
fn test_innermost_unclosed_reported() {
    assert_eq!(check("({["), Err(BracketError::Unclosed { open: '[', pos: 2 }));
}

#[test]
fn test_positions_count_chars() {
    assert_eq!(check("ää)"), Err(BracketError::Unexpected { close: ')', pos: 2 }));
}

#[test]
fn test_closer_for() {
    assert_eq!(closer_for('('), Some(')'));
    assert_eq!(closer_for('{'), Some('}'));
    assert_eq!(closer_for(']'), None);
    assert_eq!(closer_for('a'), None);
}
