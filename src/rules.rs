//! The letter-to-sound rule model.
//!
//! A rule has four parts: the left context, the text to match, the right
//! context, and the phonemes to substitute for the matched text. Rules are
//! bucketed by the first character of their match text and kept in their
//! declared order; the first rule that fits wins, so order is load-bearing.

use alloc::{string::String, vec::Vec};
use core::array;
use core::fmt;
use thiserror::Error;

use crate::matcher::Direction;

/// A defect in the rule data itself.
///
/// These are configuration errors, not input errors: a table that produces
/// one should fail validation at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A rule's match text is empty, so it could never consume input.
    #[error("rule with output \"{0}\" has an empty match text")]
    EmptyMatchText(String),
    /// A context pattern contains a symbol outside the pattern alphabet.
    /// `%` in a left pattern lands here as well.
    #[error("bad char '{symbol}' in {direction} pattern \"{pattern}\"")]
    BadPatternSymbol {
        symbol: char,
        direction: Direction,
        pattern: String,
    },
}

/// One letter-to-sound rewrite rule.
///
/// `output` is a whitespace-separated sequence of phonetic symbols and may be
/// empty, meaning the matched text is silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub left: String,
    pub text: String,
    pub right: String,
    pub output: String,
}

impl Rule {
    pub fn new(left: &str, text: &str, right: &str, output: &str) -> Self {
        Rule {
            left: left.into(),
            text: text.into(),
            right: right.into(),
            output: output.into(),
        }
    }

    fn validate(&self) -> Result<(), RuleError> {
        if self.text.is_empty() {
            return Err(RuleError::EmptyMatchText(self.output.clone()));
        }
        validate_pattern(&self.left, Direction::Left)?;
        validate_pattern(&self.right, Direction::Right)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]{}=/{}/",
            self.left, self.text, self.right, self.output
        )
    }
}

fn validate_pattern(pattern: &str, direction: Direction) -> Result<(), RuleError> {
    for symbol in pattern.chars() {
        let known = matches!(symbol, 'A'..='Z' | '\'' | ' ' | '#' | ':' | '^' | '.' | '+')
            || (symbol == '%' && direction == Direction::Right);
        if !known {
            return Err(RuleError::BadPatternSymbol {
                symbol,
                direction,
                pattern: pattern.into(),
            });
        }
    }
    Ok(())
}

/// An ordered rule table: one bucket per letter of the alphabet, plus one
/// bucket for everything else (apostrophes, hyphens, sentence punctuation).
///
/// Immutable once built; translation only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    letters: [Vec<Rule>; 26],
    punctuation: Vec<Rule>,
}

impl RuleSet {
    /// Builds a table from rules in priority order, validating every rule.
    ///
    /// Rules keep their relative order within each bucket.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleError`] found in the data.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Result<Self, RuleError> {
        let mut letters: [Vec<Rule>; 26] = array::from_fn(|_| Vec::new());
        let mut punctuation = Vec::new();
        for rule in rules {
            rule.validate()?;
            match rule.text.chars().next() {
                Some(first @ 'A'..='Z') => {
                    letters[(first as usize) - ('A' as usize)].push(rule);
                }
                _ => punctuation.push(rule),
            }
        }
        Ok(RuleSet {
            letters,
            punctuation,
        })
    }

    /// The candidate rules for the character at the current scan position:
    /// the letter bucket for A-Z, the punctuation bucket for anything else.
    #[must_use]
    pub fn bucket(&self, c: char) -> &[Rule] {
        if c.is_ascii_uppercase() {
            &self.letters[(c as usize) - ('A' as usize)]
        } else {
            &self.punctuation
        }
    }
}
