//! Remapping native phonetic symbols into a target inventory.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// The reserved native symbol for a silence boundary between words.
pub const PAUSE: &str = "PAUSE";

/// A mapping from the engine's native phonetic symbols to a target inventory.
///
/// One native symbol may expand to several target symbols, space-joined in
/// the entry. The native set is a superset of any one target inventory, so
/// symbols without an entry are dropped on remap rather than treated as an
/// error.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    map: BTreeMap<String, String>,
}

impl Inventory {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Inventory {
            map: pairs
                .into_iter()
                .map(|(native, target)| (native.into(), target.into()))
                .collect(),
        }
    }

    /// The target symbol(s) for a native symbol, or `None` if the inventory
    /// does not cover it.
    #[must_use]
    pub fn remap(&self, symbol: &str) -> Option<&str> {
        self.map.get(symbol).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::Inventory;

    #[test]
    fn remap_returns_entries_verbatim() {
        let inventory = Inventory::from_pairs([("k", "KK1"), ("AH", "AX AX")]);
        assert_eq!(inventory.remap("k"), Some("KK1"));
        assert_eq!(inventory.remap("AH"), Some("AX AX"));
        assert_eq!(inventory.remap("QQ"), None);
    }
}
