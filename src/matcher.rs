//! Context pattern matching for letter-to-sound rules.
//!
//! A pattern constrains the text on one side of a matched letter span.
//! Patterns are written moving outward from the matched span, so a left
//! pattern is scanned mirrored: last pattern symbol against the character
//! immediately before the span, and so on outward. No reversed copies are
//! made; the context is read with decrementing indices instead.

use alloc::borrow::ToOwned;
use core::fmt;

use crate::rules::RuleError;

/// Which side of the matched span a pattern applies to.
///
/// The suffix class `%` is only meaningful on the right; a `%` in a left
/// pattern is a malformed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// Tests a context pattern against the text on one side of a matched span.
///
/// `context` is the raw text adjacent to the span, not reversed by the
/// caller: for [`Direction::Left`] it is everything before the span, for
/// [`Direction::Right`] everything after it. An empty pattern matches any
/// context. Reading past the end of the context is never an error; class
/// symbols simply stop matching there.
///
/// # Symbols
///
/// ```text
///    A-Z ' space   literal character
///    #             one or more vowels
///    :             zero or more consonants
///    ^             exactly one consonant
///    .             one voiced consonant (B D V G J L M N R W Z)
///    +             one front vowel (E I Y)
///    %             a suffix: ING/ERY/ELY, ER/ES/ED or E (right only)
/// ```
///
/// # Errors
///
/// Returns [`RuleError::BadPatternSymbol`] for a symbol outside the table
/// above, including `%` in a left pattern.
pub fn matches(pattern: &str, context: &[char], direction: Direction) -> Result<bool, RuleError> {
    match direction {
        Direction::Right => scan(pattern, pattern.chars(), context, direction),
        Direction::Left => scan(pattern, pattern.chars().rev(), context, direction),
    }
}

fn scan(
    pattern: &str,
    symbols: impl Iterator<Item = char>,
    context: &[char],
    direction: Direction,
) -> Result<bool, RuleError> {
    // Logical offset from the span boundary; mapped to a real index per side.
    let at = |i: usize| match direction {
        Direction::Right => context.get(i).copied(),
        Direction::Left => context.len().checked_sub(i + 1).map(|j| context[j]),
    };
    let mut pos = 0;
    for symbol in symbols {
        match symbol {
            'A'..='Z' | '\'' | ' ' => {
                if at(pos) != Some(symbol) {
                    return Ok(false);
                }
                pos += 1;
            }
            '#' => {
                if !at(pos).is_some_and(is_vowel) {
                    return Ok(false);
                }
                pos += 1;
                while at(pos).is_some_and(is_vowel) {
                    pos += 1;
                }
            }
            ':' => {
                while at(pos).is_some_and(is_consonant) {
                    pos += 1;
                }
            }
            '^' => {
                if !at(pos).is_some_and(is_consonant) {
                    return Ok(false);
                }
                pos += 1;
            }
            '.' => {
                if !at(pos).is_some_and(is_voiced) {
                    return Ok(false);
                }
                pos += 1;
            }
            '+' => {
                if !at(pos).is_some_and(is_front_vowel) {
                    return Ok(false);
                }
                pos += 1;
            }
            '%' if direction == Direction::Right => match suffix_end(context, pos) {
                Some(next) => pos = next,
                None => return Ok(false),
            },
            _ => {
                return Err(RuleError::BadPatternSymbol {
                    symbol,
                    direction,
                    pattern: pattern.to_owned(),
                });
            }
        }
    }
    Ok(true)
}

/// End position of a suffix-class match, one character past the suffix text.
fn suffix_end(context: &[char], pos: usize) -> Option<usize> {
    let rest = context.get(pos..).unwrap_or(&[]);
    let starts = |s: &str| rest.len() >= s.len() && s.chars().zip(rest).all(|(a, &b)| a == b);
    if starts("ING") || starts("ERY") || starts("ELY") {
        Some(pos + 4)
    } else if starts("ER") || starts("ES") || starts("ED") {
        Some(pos + 3)
    } else if starts("E") {
        Some(pos + 2)
    } else {
        None
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_uppercase() && !is_vowel(c)
}

fn is_voiced(c: char) -> bool {
    matches!(c, 'B' | 'D' | 'V' | 'G' | 'J' | 'L' | 'M' | 'N' | 'R' | 'W' | 'Z')
}

fn is_front_vowel(c: char) -> bool {
    matches!(c, 'E' | 'I' | 'Y')
}
