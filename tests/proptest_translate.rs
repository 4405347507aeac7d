//! Property-based tests for the translation engine using proptest.
//!
//! Translation is best-effort by design, so the properties here are about
//! robustness: any input terminates without panicking, and everything the
//! built-in rules can emit is representable in the built-in inventory.

use elovitz::{Translator, sp0256};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_printable_input_translates_without_panicking(word in "[ -~]{0,12}") {
        let translator = Translator::english().unwrap();
        let _ = translator.translate(&word);
    }

    #[test]
    fn word_lists_always_end_on_a_pause(words in prop::collection::vec("[a-z]{1,8}", 1..4)) {
        let translator = Translator::english().unwrap();
        let sequence = translator.translate_text(words.iter().map(String::as_str));
        prop_assert_eq!(sequence.last().map(String::as_str), Some("PA4"));
    }

    #[test]
    fn rule_outputs_always_remap(word in "[a-zA-Z']{1,12}") {
        let translator = Translator::english().unwrap();
        let inventory = sp0256::inventory();
        for symbol in translator.translate_word(&word) {
            prop_assert!(
                inventory.remap(&symbol).is_some(),
                "no inventory entry for {}", symbol
            );
        }
    }
}
