//! The SP0256-AL2 allophone inventory and its exception vocabulary.
//!
//! The engine's native phoneme set is a superset of what the SP0256-AL2 can
//! say, and a few native symbols need two allophones (`AH` becomes a doubled
//! schwa). The pause marker becomes the chip's `PA4` silence.

use crate::inventory::Inventory;
use crate::vocabulary::Vocabulary;

const INVENTORY: &[(&str, &str)] = &[
    ("AA", "AA"),
    ("AE", "AE"),
    ("AH", "AX AX"),
    ("AO", "AO"),
    ("AW", "AW"),
    ("AX", "AX"),
    ("AY", "AY"),
    ("b", "BB1"),
    ("CH", "CH"),
    ("d", "DD1"),
    ("DH", "DH1"),
    ("EH", "EH"),
    ("ER", "ER1"),
    ("EY", "EY"),
    ("f", "FF"),
    ("g", "GG2"),
    ("h", "HH1"),
    ("IH", "IH"),
    ("IY", "IY"),
    ("j", "JH"),
    ("k", "KK1"),
    ("l", "LL"),
    ("m", "MM"),
    ("n", "NN1"),
    ("NG", "NG"),
    ("OW", "OW"),
    ("OY", "OY"),
    ("p", "PP"),
    ("r", "RR1"),
    ("s", "SS"),
    ("SH", "SH"),
    ("t", "TT1"),
    ("TH", "TH"),
    ("UH", "UH"),
    ("UW", "UW2"),
    ("v", "VV"),
    ("w", "WW"),
    ("WH", "WH"),
    ("y", "YY1"),
    ("z", "ZZ"),
    ("ZH", "ZH"),
    ("PAUSE", "PA4"),
];

/// Words the rules mispronounce, stored as literal allophone strings.
const VOCABULARY: &[(&str, &str)] = &[
    ("busy", "BB1 IH ZZ IY"),
    ("colonel", "KK1 ER1 NN1 AX LL"),
    ("gauge", "GG2 EY JH"),
    ("iron", "AY ER1 NN1"),
    ("says", "SS EH ZZ"),
    ("women", "WW IH MM IH NN1"),
];

#[must_use]
pub fn inventory() -> Inventory {
    Inventory::from_pairs(INVENTORY.iter().copied())
}

#[must_use]
pub fn vocabulary() -> Vocabulary {
    Vocabulary::from_entries(VOCABULARY.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::{inventory, vocabulary};

    #[test]
    fn pause_maps_to_chip_silence() {
        assert_eq!(inventory().remap(crate::PAUSE), Some("PA4"));
    }

    #[test]
    fn exception_words_are_present() {
        assert_eq!(vocabulary().get("iron"), Some("AY ER1 NN1"));
    }
}
