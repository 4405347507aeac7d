//! The US English letter-to-sound rule table.
//!
//! Entries are `(left context, match text, right context, phoneme output)`,
//! in priority order within each letter group. Outputs are space-separated
//! symbols in the engine's native notation: two-letter uppercase vowel codes
//! (`IY` bEEt, `EY` gAte, `AE` fAt, ...), lowercase single-letter consonants
//! (`p` Pack, `b` Back, ...) and uppercase consonant digraphs (`CH`, `DH`,
//! `NG`, `SH`, `TH`, `WH`, `ZH`).
//!
//! The historical table wrote some context constraints with shorthand
//! classes for sibilants and dentals; those entries appear here expanded
//! into one literal rule per letter, since the engine's pattern alphabet is
//! the closed set documented in [`crate::matches`].

use crate::rules::{Rule, RuleError, RuleSet};

type Entry = (&'static str, &'static str, &'static str, &'static str);

const A: &[Entry] = &[
    ("", "A", " ", "AX"),
    (" ", "ARE", " ", "AA r"),
    (" ", "AR", "O", "AX r"),
    ("", "AR", "#", "EH r"),
    ("^", "AS", "#", "EY s"),
    ("", "A", "WA", "AX"),
    ("", "AW", "", "AO"),
    (" :", "ANY", "", "EH n IY"),
    ("", "A", "^+#", "EY"),
    ("#:", "ALLY", "", "AX l IY"),
    (" ", "AL", "#", "AX l"),
    ("", "AGAIN", "", "AX g EH n"),
    ("#:", "AG", "E", "IH j"),
    ("", "A", "^+:#", "AE"),
    (" :", "A", "^+ ", "EY"),
    ("", "A", "^%", "EY"),
    (" ", "ARR", "", "AX r"),
    ("", "ARR", "", "AE r"),
    (" :", "AR", " ", "AA r"),
    ("", "AR", " ", "ER"),
    ("", "AR", "", "AA r"),
    ("", "AIR", "", "EH r"),
    ("", "AI", "", "EY"),
    ("", "AY", "", "EY"),
    ("", "AU", "", "AO"),
    ("#:", "AL", " ", "AX l"),
    ("#:", "ALS", " ", "AX l z"),
    ("", "ALK", "", "AO k"),
    ("", "AL", "^", "AO l"),
    (" :", "ABLE", "", "EY b AX l"),
    ("", "ABLE", "", "AX b AX l"),
    ("", "ANG", "+", "EY n j"),
    ("", "A", "", "AE"),
];

const B: &[Entry] = &[
    (" ", "BE", "^#", "b IH"),
    ("", "BEING", "", "b IY IH NG"),
    (" ", "BOTH", " ", "b OW TH"),
    (" ", "BUS", "#", "b IH z"),
    ("", "BUIL", "", "b IH l"),
    ("", "B", "", "b"),
];

const C: &[Entry] = &[
    (" ", "CH", "^", "k"),
    ("^E", "CH", "", "k"),
    ("", "CH", "", "CH"),
    (" S", "CI", "#", "s AY"),
    ("", "CI", "A", "SH"),
    ("", "CI", "O", "SH"),
    ("", "CI", "EN", "SH"),
    ("", "C", "+", "s"),
    ("", "CK", "", "k"),
    ("", "COM", "%", "k AH m"),
    ("", "C", "", "k"),
];

const D: &[Entry] = &[
    ("#:", "DED", " ", "d IH d"),
    (".E", "D", " ", "d"),
    ("#:^E", "D", " ", "t"),
    (" ", "DE", "^#", "d IH"),
    (" ", "DO", " ", "d UW"),
    (" ", "DOES", "", "d AH z"),
    (" ", "DOING", "", "d UW IH NG"),
    (" ", "DOW", "", "d AW"),
    ("", "DU", "A", "j UW"),
    ("", "D", "", "d"),
];

const E: &[Entry] = &[
    ("#:", "E", " ", ""),
    ("':^", "E", " ", ""),
    (" :", "E", " ", "IY"),
    ("#", "ED", " ", "d"),
    ("#:", "E", "D ", ""),
    ("", "EV", "ER", "EH v"),
    ("", "E", "^%", "IY"),
    ("", "ERI", "#", "IY r IY"),
    ("", "ERI", "", "EH r IH"),
    ("#:", "ER", "#", "ER"),
    ("", "ER", "#", "EH r"),
    ("", "ER", "", "ER"),
    (" ", "EVEN", "", "IY v EH n"),
    ("#:", "E", "W", ""),
    ("T", "EW", "", "UW"),
    ("S", "EW", "", "UW"),
    ("R", "EW", "", "UW"),
    ("D", "EW", "", "UW"),
    ("L", "EW", "", "UW"),
    ("Z", "EW", "", "UW"),
    ("N", "EW", "", "UW"),
    ("J", "EW", "", "UW"),
    ("TH", "EW", "", "UW"),
    ("CH", "EW", "", "UW"),
    ("SH", "EW", "", "UW"),
    ("", "EW", "", "y UW"),
    ("", "E", "O", "IY"),
    ("#:S", "ES", " ", "IH z"),
    ("#:C", "ES", " ", "IH z"),
    ("#:G", "ES", " ", "IH z"),
    ("#:Z", "ES", " ", "IH z"),
    ("#:X", "ES", " ", "IH z"),
    ("#:J", "ES", " ", "IH z"),
    ("#:CH", "ES", " ", "IH z"),
    ("#:SH", "ES", " ", "IH z"),
    ("#:", "E", "S ", ""),
    ("#:", "ELY", " ", "l IY"),
    ("#:", "EMENT", "", "m EH n t"),
    ("", "EFUL", "", "f UH l"),
    ("", "EE", "", "IY"),
    ("", "EARN", "", "ER n"),
    (" ", "EAR", "^", "ER"),
    ("", "EAD", "", "EH d"),
    ("#:", "EA", " ", "IY AX"),
    ("", "EA", "SU", "EH"),
    ("", "EA", "", "IY"),
    ("", "EIGH", "", "EY"),
    ("", "EI", "", "IY"),
    (" ", "EYE", "", "AY"),
    ("", "EY", "", "IY"),
    ("", "EU", "", "y UW"),
    ("", "E", "", "EH"),
];

const F: &[Entry] = &[
    ("", "FUL", "", "f UH l"),
    ("", "F", "", "f"),
];

const G: &[Entry] = &[
    ("", "GIV", "", "g IH v"),
    (" ", "G", "I^", "g"),
    ("", "GE", "T", "g EH"),
    ("SU", "GGES", "", "g j EH s"),
    ("", "GG", "", "g"),
    (" B#", "G", "", "g"),
    ("", "G", "+", "j"),
    ("", "GREAT", "", "g r EY t"),
    ("#", "GH", "", ""),
    ("", "G", "", "g"),
];

const H: &[Entry] = &[
    (" ", "HAV", "", "h AE v"),
    (" ", "HERE", "", "h IY r"),
    (" ", "HOUR", "", "AW ER"),
    ("", "HOW", "", "h AW"),
    ("", "H", "#", "h"),
    ("", "H", "", ""),
];

const I: &[Entry] = &[
    (" ", "IN", "", "IH n"),
    (" ", "I", " ", "AY"),
    ("", "IN", "D", "AY n"),
    ("", "IER", "", "IY ER"),
    ("#:R", "IED", "", "IY d"),
    ("", "IED", " ", "AY d"),
    ("", "IEN", "", "IY EH n"),
    ("", "IE", "T", "AY EH"),
    (" :", "I", "%", "AY"),
    ("", "I", "%", "IY"),
    ("", "IE", "", "IY"),
    ("", "I", "^+:#", "IH"),
    ("", "IR", "#", "AY r"),
    ("", "IZ", "%", "AY z"),
    ("", "IS", "%", "AY z"),
    ("", "I", "D%", "AY"),
    ("+^", "I", "^+", "IH"),
    ("", "I", "T%", "AY"),
    ("#:^", "I", "^+", "IH"),
    ("", "I", "^+", "AY"),
    ("", "IR", "", "ER"),
    ("", "IGH", "", "AY"),
    ("", "ILD", "", "AY l d"),
    ("", "IGN", " ", "AY n"),
    ("", "IGN", "^", "AY n"),
    ("", "IGN", "%", "AY n"),
    ("", "IQUE", "", "IY k"),
    ("", "I", "", "IH"),
];

const J: &[Entry] = &[
    ("", "J", "", "j"),
];

const K: &[Entry] = &[
    (" ", "K", "N", ""),
    ("", "K", "", "k"),
];

const L: &[Entry] = &[
    ("", "LO", "C#", "l OW"),
    ("L", "L", "", ""),
    ("#:^", "L", "%", "AX l"),
    ("", "LEAD", "", "l IY d"),
    ("", "L", "", "l"),
];

const M: &[Entry] = &[
    ("", "MOV", "", "m UW v"),
    ("", "M", "", "m"),
];

const N: &[Entry] = &[
    ("E", "NG", "+", "n j"),
    ("", "NG", "R", "NG g"),
    ("", "NG", "#", "NG g"),
    ("", "NGL", "%", "NG g AX l"),
    ("", "NG", "", "NG"),
    ("", "NK", "", "NG k"),
    (" ", "NOW", " ", "n AW"),
    ("", "N", "", "n"),
];

const O: &[Entry] = &[
    ("", "OF", " ", "AX v"),
    ("", "OROUGH", "", "ER OW"),
    ("#:", "OR", " ", "ER"),
    ("#:", "ORS", " ", "ER z"),
    ("", "OR", "", "AO r"),
    (" ", "ONE", "", "w AH n"),
    ("", "OW", "", "OW"),
    (" ", "OVER", "", "OW v ER"),
    ("", "OV", "", "AH v"),
    ("", "O", "^%", "OW"),
    ("", "O", "^EN", "OW"),
    ("", "O", "^I#", "OW"),
    ("", "OL", "D", "OW l"),
    ("", "OUGHT", "", "AO t"),
    ("", "OUGH", "", "AH f"),
    (" ", "OU", "", "AW"),
    ("H", "OU", "S#", "AW"),
    ("", "OUS", "", "AX s"),
    ("", "OUR", "", "AO r"),
    ("", "OULD", "", "UH d"),
    ("^", "OU", "^L", "AH"),
    ("", "OUP", "", "UW p"),
    ("", "OU", "", "AW"),
    ("", "OY", "", "OY"),
    ("", "OING", "", "OW IH NG"),
    ("", "OI", "", "OY"),
    ("", "OOR", "", "AO r"),
    ("", "OOK", "", "UH k"),
    ("", "OOD", "", "UH d"),
    ("", "OO", "", "UW"),
    ("", "O", "E", "OW"),
    ("", "O", " ", "OW"),
    ("", "OA", "", "OW"),
    (" ", "ONLY", "", "OW n l IY"),
    (" ", "ONCE", "", "w AH n s"),
    ("", "ON'T", "", "OW n t"),
    ("C", "O", "N", "AA"),
    ("", "O", "NG", "AO"),
    (" :^", "O", "N", "AH"),
    ("I", "ON", "", "AX n"),
    ("#:", "ON", " ", "AX n"),
    ("#^", "ON", "", "AX n"),
    ("", "O", "ST ", "OW"),
    ("", "OF", "^", "AO f"),
    ("", "OTHER", "", "AH DH ER"),
    ("", "OSS", " ", "AO s"),
    ("#:^", "OM", "", "AH m"),
    ("", "O", "", "AA"),
];

const P: &[Entry] = &[
    ("", "PH", "", "f"),
    ("", "PEOP", "", "p IY p"),
    ("", "POW", "", "p AW"),
    ("", "PUT", " ", "p UH t"),
    ("", "P", "", "p"),
];

const Q: &[Entry] = &[
    ("", "QUAR", "", "k w AO r"),
    ("", "QU", "", "k w"),
    ("", "Q", "", "k"),
];

const R: &[Entry] = &[
    (" ", "RE", "^#", "r IY"),
    ("", "R", "", "r"),
];

const S: &[Entry] = &[
    ("", "SH", "", "SH"),
    ("#", "SION", "", "ZH AX n"),
    ("", "SOME", "", "s AH m"),
    ("#", "SUR", "#", "ZH ER"),
    ("", "SUR", "#", "SH ER"),
    ("#", "SU", "#", "ZH UW"),
    ("#", "SSU", "#", "SH UW"),
    ("#", "SED", " ", "z d"),
    ("#", "S", "#", "z"),
    ("", "SAID", "", "s EH d"),
    ("^", "SION", "", "SH AX n"),
    ("", "S", "S", ""),
    (".", "S", " ", "z"),
    ("#:.E", "S", " ", "z"),
    ("#:^##", "S", " ", "z"),
    ("#:^#", "S", " ", "s"),
    ("U", "S", " ", "s"),
    (" :#", "S", " ", "z"),
    (" ", "SCH", "", "s k"),
    ("", "S", "C+", ""),
    ("#", "SM", "", "z m"),
    ("#", "SN", "'", "z AX n"),
    ("", "S", "", "s"),
];

const T: &[Entry] = &[
    (" ", "THE", " ", "DH AX"),
    ("", "TO", " ", "t UW"),
    ("", "THAT", " ", "DH AE t"),
    (" ", "THIS", " ", "DH IH s"),
    (" ", "THEY", "", "DH EY"),
    (" ", "THERE", "", "DH EH r"),
    ("", "THER", "", "DH ER"),
    ("", "THEIR", "", "DH EH r"),
    (" ", "THAN", " ", "DH AE n"),
    (" ", "THEM", " ", "DH EH m"),
    ("", "THESE", " ", "DH IY z"),
    (" ", "THEN", "", "DH EH n"),
    ("", "THROUGH", "", "TH r UW"),
    ("", "THOSE", "", "DH OW z"),
    ("", "THOUGH", " ", "DH OW"),
    (" ", "THUS", "", "DH AH s"),
    ("", "TH", "", "TH"),
    ("#:", "TED", " ", "t IH d"),
    ("S", "TI", "#N", "CH"),
    ("", "TI", "O", "SH"),
    ("", "TI", "A", "SH"),
    ("", "TIEN", "", "SH AX n"),
    ("", "TUR", "#", "CH ER"),
    ("", "TU", "A", "CH UW"),
    (" ", "TWO", "", "t UW"),
    ("", "T", "", "t"),
];

const U: &[Entry] = &[
    (" ", "UN", "I", "y UW n"),
    (" ", "UN", "", "AH n"),
    (" ", "UPON", "", "AX p AO n"),
    ("T", "UR", "#", "UH r"),
    ("S", "UR", "#", "UH r"),
    ("R", "UR", "#", "UH r"),
    ("D", "UR", "#", "UH r"),
    ("L", "UR", "#", "UH r"),
    ("Z", "UR", "#", "UH r"),
    ("N", "UR", "#", "UH r"),
    ("J", "UR", "#", "UH r"),
    ("TH", "UR", "#", "UH r"),
    ("CH", "UR", "#", "UH r"),
    ("SH", "UR", "#", "UH r"),
    ("", "UR", "#", "y UH r"),
    ("", "UR", "", "ER"),
    ("", "U", "^ ", "AH"),
    ("", "U", "^^", "AH"),
    ("", "UY", "", "AY"),
    (" G", "U", "#", ""),
    ("G", "U", "%", ""),
    ("G", "U", "#", "w"),
    ("#N", "U", "", "y UW"),
    ("T", "U", "", "UW"),
    ("S", "U", "", "UW"),
    ("R", "U", "", "UW"),
    ("D", "U", "", "UW"),
    ("L", "U", "", "UW"),
    ("Z", "U", "", "UW"),
    ("N", "U", "", "UW"),
    ("J", "U", "", "UW"),
    ("TH", "U", "", "UW"),
    ("CH", "U", "", "UW"),
    ("SH", "U", "", "UW"),
    ("", "U", "", "y UW"),
];

const V: &[Entry] = &[
    ("", "VIEW", "", "v y UW"),
    ("", "V", "", "v"),
];

const W: &[Entry] = &[
    (" ", "WERE", "", "w ER"),
    ("", "WA", "S", "w AA"),
    ("", "WA", "T", "w AA"),
    ("", "WHERE", "", "WH EH r"),
    ("", "WHAT", "", "WH AA t"),
    ("", "WHOL", "", "h OW l"),
    ("", "WHO", "", "h UW"),
    ("", "WH", "", "WH"),
    ("", "WAR", "", "w AO r"),
    ("", "WOR", "^", "w ER"),
    ("", "WR", "", "r"),
    ("", "W", "", "w"),
];

const X: &[Entry] = &[
    ("", "X", "", "k s"),
];

const Y: &[Entry] = &[
    ("", "YOUNG", "", "y AH NG"),
    (" ", "YOU", "", "y UW"),
    (" ", "YES", "", "y EH s"),
    (" ", "Y", "", "y"),
    ("#:^", "Y", " ", "IY"),
    ("#:^", "Y", "I", "IY"),
    (" :", "Y", " ", "AY"),
    (" :", "Y", "#", "AY"),
    (" :", "Y", "^+:#", "IH"),
    (" :", "Y", "^#", "AY"),
    ("", "Y", "", "IH"),
];

const Z: &[Entry] = &[
    ("", "Z", "", "z"),
];

/// Apostrophes, hyphens and sentence punctuation. Digits carry no rules and
/// fall out through the unmatched-character path.
const PUNCTUATION: &[Entry] = &[
    ("", " ", "", ""),
    ("", "-", "", ""),
    (".", "'S", "", "z"),
    ("#:.E", "'S", "", "z"),
    ("#", "'S", "", "z"),
    ("", "'", "", ""),
    ("", ",", "", "PAUSE"),
    ("", ".", "", "PAUSE"),
    ("", "?", "", "PAUSE"),
    ("", "!", "", "PAUSE"),
];

/// Builds the US English rule table.
///
/// # Errors
///
/// Propagates [`RuleError`] from table validation.
pub fn rules() -> Result<RuleSet, RuleError> {
    let groups: [&[Entry]; 27] = [
        A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z, PUNCTUATION,
    ];
    RuleSet::new(groups.iter().flat_map(|group| {
        group
            .iter()
            .map(|&(left, text, right, output)| Rule::new(left, text, right, output))
    }))
}
