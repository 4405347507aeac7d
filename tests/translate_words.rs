use elovitz::Translator;

fn english() -> Translator {
    Translator::english().expect("the built-in rule table validates")
}

#[test]
fn built_in_table_validates() {
    assert!(Translator::english().is_ok());
}

#[test]
fn cat_in_native_symbols() {
    assert_eq!(english().translate_word("cat"), ["k", "AE", "t"]);
}

#[test]
fn cat_in_allophones() {
    assert_eq!(english().translate("cat"), ["KK1", "AE", "TT1"]);
}

#[test]
fn hello_world_is_one_flat_sequence_with_pauses() {
    let sequence = english().translate_text(["hello", "world"]);
    assert_eq!(
        sequence,
        ["HH1", "EH", "LL", "OW", "PA4", "WW", "ER1", "LL", "DD1", "PA4"]
    );
}

#[test]
fn vocabulary_words_bypass_the_rules() {
    let translator = english();
    // The rules would say AY RR1 AX NN1 here; the vocabulary wins.
    assert_eq!(translator.translate("iron"), ["AY", "ER1", "NN1"]);
    assert_eq!(translator.translate("IRON"), ["AY", "ER1", "NN1"]);
}

#[test]
fn characters_without_rules_degrade_to_partial_output() {
    // No digit rules exist; the 5 is skipped and the rest still translates.
    assert_eq!(english().translate("q5"), ["KK1"]);
}

#[test]
fn possessives_and_hyphens_use_the_punctuation_bucket() {
    assert_eq!(english().translate("dog's"), ["DD1", "AA", "GG2", "ZZ"]);
    // The hyphen is silent; both halves still come through.
    let hyphenated = english().translate("a-b");
    assert_eq!(hyphenated, ["AE", "BB1"]);
}

#[test]
fn one_translator_is_shared_across_threads() {
    let translator = english();
    let words = ["hello", "world", "cat", "iron"];
    let sequential: Vec<Vec<String>> = words.iter().map(|w| translator.translate(w)).collect();
    let parallel: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = words
            .iter()
            .map(|w| scope.spawn(|| translator.translate(w)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, parallel);
}
