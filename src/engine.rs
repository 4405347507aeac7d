//! Rule selection and word translation.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::iter;
use tracing::{error, warn};

use crate::inventory::{Inventory, PAUSE};
use crate::matcher::{self, Direction};
use crate::rules::{Rule, RuleError, RuleSet};
use crate::vocabulary::Vocabulary;
use crate::{en_us, sp0256};

/// Outcome of scanning the candidate rules at one scan position.
#[derive(Debug, PartialEq, Eq)]
enum Selection<'a> {
    /// A rule fit; scanning resumes at `next`.
    Matched { next: usize, output: &'a str },
    /// No candidate rule fit this position. The caller recovers by advancing
    /// one character and emitting nothing.
    NoMatch,
}

/// Finds the first candidate rule whose match text equals the padded word at
/// `index` and whose left and right context patterns both hold.
///
/// A malformed context pattern fails that rule cleanly and is reported; the
/// remaining candidates are still tried.
fn select_rule<'a>(word: &[char], index: usize, candidates: &'a [Rule]) -> Selection<'a> {
    for rule in candidates {
        if !text_matches(word, index, &rule.text) {
            continue;
        }
        let remainder = index + rule.text.chars().count();
        let left = &word[..index];
        let right = &word[remainder..];
        if context_holds(rule, &rule.left, left, Direction::Left)
            && context_holds(rule, &rule.right, right, Direction::Right)
        {
            return Selection::Matched {
                next: remainder,
                output: &rule.output,
            };
        }
    }
    Selection::NoMatch
}

fn context_holds(rule: &Rule, pattern: &str, context: &[char], direction: Direction) -> bool {
    match matcher::matches(pattern, context, direction) {
        Ok(ok) => ok,
        Err(error) => {
            error!(rule = %rule, error = %error, "malformed context pattern in rule");
            false
        }
    }
}

fn text_matches(word: &[char], index: usize, text: &str) -> bool {
    let mut i = index;
    for t in text.chars() {
        if word.get(i).copied() != Some(t) {
            return false;
        }
        i += 1;
    }
    true
}

/// The letter-to-sound translation engine.
///
/// Holds the three immutable tables: the rule table, the whole-word exception
/// vocabulary, and the target inventory mapping. All methods take `&self`, so
/// one `Translator` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Translator {
    rules: RuleSet,
    vocabulary: Vocabulary,
    inventory: Inventory,
}

impl Translator {
    #[must_use]
    pub fn new(rules: RuleSet, vocabulary: Vocabulary, inventory: Inventory) -> Self {
        Translator {
            rules,
            vocabulary,
            inventory,
        }
    }

    /// A translator for US English with the SP0256-AL2 allophone inventory.
    ///
    /// # Errors
    ///
    /// Propagates validation of the built-in rule table.
    pub fn english() -> Result<Self, RuleError> {
        Ok(Translator::new(
            en_us::rules()?,
            sp0256::vocabulary(),
            sp0256::inventory(),
        ))
    }

    /// Translates one word into phonetic symbols in the engine's native
    /// notation, without consulting the vocabulary or the inventory.
    ///
    /// The word is uppercased and padded with one boundary space on each
    /// side; scanning starts on the first real character and stops before
    /// the final space. A position no rule fits is skipped with a diagnostic
    /// rather than aborting the word.
    #[must_use]
    pub fn translate_word(&self, word: &str) -> Vec<String> {
        let padded: Vec<char> = iter::once(' ')
            .chain(word.chars().flat_map(char::to_uppercase))
            .chain(iter::once(' '))
            .collect();
        let mut phonemes = Vec::new();
        let mut index = 1;
        while index < padded.len() - 1 {
            match select_rule(&padded, index, self.rules.bucket(padded[index])) {
                Selection::Matched { next, output } => {
                    phonemes.extend(output.split_whitespace().map(ToOwned::to_owned));
                    index = next;
                }
                Selection::NoMatch => {
                    let character = padded[index];
                    warn!(%character, word, "no rule matched; skipping one character");
                    index += 1;
                }
            }
        }
        phonemes
    }

    /// Translates one word into the target inventory.
    ///
    /// A vocabulary hit is returned verbatim (split into symbols) without
    /// running the rule engine. Otherwise the word is rule-translated and
    /// every native symbol is remapped; symbols the inventory does not cover
    /// are dropped.
    #[must_use]
    pub fn translate(&self, word: &str) -> Vec<String> {
        if let Some(literal) = self.vocabulary.get(word) {
            return literal.split_whitespace().map(ToOwned::to_owned).collect();
        }
        self.translate_word(word)
            .iter()
            .filter_map(|symbol| self.inventory.remap(symbol))
            .flat_map(str::split_whitespace)
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Translates a sequence of words into one flat symbol sequence, with a
    /// pause marker after every word's output, the last included.
    #[must_use]
    pub fn translate_text<'w>(&self, words: impl IntoIterator<Item = &'w str>) -> Vec<String> {
        let mut sequence = Vec::new();
        for word in words {
            sequence.extend(self.translate(word));
            if let Some(pause) = self.inventory.remap(PAUSE) {
                sequence.extend(pause.split_whitespace().map(ToOwned::to_owned));
            }
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::{Selection, Translator, select_rule};
    use crate::inventory::Inventory;
    use crate::rules::{Rule, RuleSet};
    use crate::vocabulary::Vocabulary;
    use alloc::vec::Vec;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn first_satisfiable_rule_wins_in_declared_order() {
        // Both rules match the text; only the second's context holds. The
        // first must be tried, fail, and fall through.
        let set = RuleSet::new([
            Rule::new("", "C", "#", "first"),
            Rule::new("", "C", "^", "second"),
        ])
        .unwrap();
        let word = chars(" CT ");
        assert_eq!(
            select_rule(&word, 1, set.bucket('C')),
            Selection::Matched {
                next: 2,
                output: "second"
            }
        );

        let word = chars(" CA ");
        assert_eq!(
            select_rule(&word, 1, set.bucket('C')),
            Selection::Matched {
                next: 2,
                output: "first"
            }
        );
    }

    #[test]
    fn no_candidate_yields_no_match() {
        let set = RuleSet::new([Rule::new("", "CH", "", "CH")]).unwrap();
        let word = chars(" CT ");
        assert_eq!(select_rule(&word, 1, set.bucket('C')), Selection::NoMatch);
    }

    #[test]
    fn longer_match_text_advances_past_all_of_it() {
        let set = RuleSet::new([Rule::new("", "TH", "", "TH")]).unwrap();
        let word = chars(" THE ");
        assert_eq!(
            select_rule(&word, 1, set.bucket('T')),
            Selection::Matched {
                next: 3,
                output: "TH"
            }
        );
    }

    fn letters_only() -> Translator {
        let set = RuleSet::new([
            Rule::new("", "A", "", "AE"),
            Rule::new("", "B", "", "b"),
            Rule::new("", "C", "", "k AE t"),
        ])
        .unwrap();
        Translator::new(set, Vocabulary::default(), Inventory::default())
    }

    #[test]
    fn translate_word_uppercases_and_concatenates() {
        assert_eq!(letters_only().translate_word("aba"), ["AE", "b", "AE"]);
    }

    #[test]
    fn multi_symbol_outputs_are_split() {
        assert_eq!(letters_only().translate_word("c"), ["k", "AE", "t"]);
    }

    #[test]
    fn unmatched_characters_are_skipped_not_fatal() {
        // No rule for D and nothing in the punctuation bucket: both fall out
        // through the recovery path.
        let t = letters_only();
        assert_eq!(t.translate_word("adb5a"), ["AE", "b", "AE"]);
        assert!(t.translate_word("").is_empty());
    }

    #[test]
    fn vocabulary_override_bypasses_the_rules() {
        let set = RuleSet::new([Rule::new("", "A", "", "AE")]).unwrap();
        let inventory = Inventory::from_pairs([("AE", "AE")]);
        let vocabulary = Vocabulary::from_entries([("a", "OW OW")]);
        let t = Translator::new(set, vocabulary, inventory);
        assert_eq!(t.translate("a"), ["OW", "OW"]);
        assert_eq!(t.translate("A"), ["OW", "OW"]);
        // Without the override the rules would have produced AE.
        assert_eq!(t.translate("aa"), ["AE", "AE"]);
    }

    #[test]
    fn remap_expands_and_drops() {
        let set = RuleSet::new([
            Rule::new("", "A", "", "AH"),
            Rule::new("", "B", "", "b"),
        ])
        .unwrap();
        // AH expands to two symbols; b has no entry and is dropped.
        let inventory = Inventory::from_pairs([("AH", "AX AX")]);
        let t = Translator::new(set, Vocabulary::default(), inventory);
        assert_eq!(t.translate("ab"), ["AX", "AX"]);
    }

    #[test]
    fn translate_text_inserts_a_pause_after_every_word() {
        let set = RuleSet::new([Rule::new("", "A", "", "AE")]).unwrap();
        let inventory = Inventory::from_pairs([("AE", "AE"), ("PAUSE", "PA4")]);
        let t = Translator::new(set, Vocabulary::default(), inventory);
        assert_eq!(
            t.translate_text(["a", "aa"]),
            ["AE", "PA4", "AE", "AE", "PA4"]
        );
    }
}
