//! Whole-word exception lookup.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// A map from whole words to literal, target-inventory phoneme strings.
///
/// Consulted before the rule engine; a hit bypasses translation entirely.
/// Keys are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: BTreeMap<String, String>,
}

impl Vocabulary {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Vocabulary {
            words: entries
                .into_iter()
                .map(|(word, phonemes)| (word.to_lowercase(), phonemes.into()))
                .collect(),
        }
    }

    /// The stored phoneme string for a word, if it has one.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(&word.to_lowercase()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::Vocabulary;

    #[test]
    fn lookup_is_case_insensitive() {
        let vocabulary = Vocabulary::from_entries([("Iron", "AY ER1 NN1")]);
        assert_eq!(vocabulary.get("iron"), Some("AY ER1 NN1"));
        assert_eq!(vocabulary.get("IRON"), Some("AY ER1 NN1"));
        assert_eq!(vocabulary.get("irony"), None);
    }
}
