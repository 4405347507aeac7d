//! NRL letter-to-sound rules for English text in Rust.
//!
//! *NOTE*: This is _not_ a speech synthesizer.
//! This only turns written words into phonetic symbols;
//! rendering those symbols as sound (or anything else) is a downstream concern.
//!
//! Translation runs in three stages:
//!
//! 1. A whole-word exception [`Vocabulary`] is consulted first; a hit is
//!    returned verbatim.
//! 2. Otherwise the word is translated letter by letter against an ordered
//!    [`RuleSet`], where each rule carries a left and right context pattern
//!    over the text around the matched letters.
//! 3. The resulting native symbols are remapped through an [`Inventory`]
//!    into the target symbol set, such as the SP0256-AL2 allophones in
//!    [`sp0256`].
//!
//! ## Context patterns
//!
//! ```text
//!    #       One or more vowels
//!    :       Zero or more consonants
//!    ^       One consonant
//!    .       One of B, D, V, G, J, L, M, N, R, W or Z (a voiced consonant)
//!    +       One of E, I or Y (a "front" vowel)
//!    %       One of ING, ERY, ELY, ER, ES, ED or E (a suffix)
//!            (right context only)
//! ```
//!
//! Any other pattern character is matched literally (uppercase letters,
//! apostrophe, space).
//!
//! ## `no_std`
//!
//! The library is `no_std` compatible when built without the `std` feature.
//! `alloc` is required.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    clippy::all,
    clippy::cargo,
    clippy::pedantic,
    unsafe_code,
    rustdoc::all
)]

extern crate alloc;

mod matcher;
pub use matcher::{Direction, matches};
mod rules;
pub use rules::{Rule, RuleError, RuleSet};
mod engine;
pub use engine::Translator;
mod inventory;
pub use inventory::{Inventory, PAUSE};
mod vocabulary;
pub use vocabulary::Vocabulary;
pub mod en_us;
pub mod sp0256;
