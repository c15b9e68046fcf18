//! A compact set of symbol codes.
//!
//! The parser uses these for FIRST sets and for the synchronization sets of panic-mode recovery.
//! All constructors are `const fn` so fixed sets can live in `const` items.

use std::fmt;

use mj_core::SymbolId;

/// Bitset over [`SymbolId`]; bit `n` is symbol code `n`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SymbolSet(u64);

// Every code must fit in the bitset.
const _: () = assert!(SymbolId::COUNT <= 64);

impl SymbolSet {
    pub const EMPTY: SymbolSet = SymbolSet(0);

    pub const fn new(symbols: &[SymbolId]) -> SymbolSet {
        let mut bits = 0u64;
        let mut i = 0;
        while i < symbols.len() {
            bits |= mask(symbols[i]);
            i += 1;
        }
        SymbolSet(bits)
    }

    pub const fn contains(self, symbol: SymbolId) -> bool {
        self.0 & mask(symbol) != 0
    }

    pub const fn union(self, other: SymbolSet) -> SymbolSet {
        SymbolSet(self.0 | other.0)
    }

    pub const fn with(self, symbol: SymbolId) -> SymbolSet {
        SymbolSet(self.0 | mask(symbol))
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in code order.
    pub fn iter(self) -> impl Iterator<Item = SymbolId> {
        SymbolId::all().filter(move |s| self.contains(*s))
    }
}

const fn mask(symbol: SymbolId) -> u64 {
    1u64 << (symbol as u8)
}

impl fmt::Debug for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<SymbolId> for SymbolSet {
    fn from_iter<T: IntoIterator<Item = SymbolId>>(iter: T) -> Self {
        iter.into_iter().fold(SymbolSet::EMPTY, SymbolSet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        const OPS: SymbolSet = SymbolSet::new(&[SymbolId::Plus, SymbolId::Minus]);
        assert!(OPS.contains(SymbolId::Plus));
        assert!(OPS.contains(SymbolId::Minus));
        assert!(!OPS.contains(SymbolId::Times));
        assert_eq!(OPS.len(), 2);
    }

    #[test]
    fn extremes_fit() {
        let set = SymbolSet::new(&[SymbolId::None, SymbolId::Eof]);
        assert!(set.contains(SymbolId::None));
        assert!(set.contains(SymbolId::Eof));
        assert!(!set.contains(SymbolId::While));
    }

    #[test]
    fn union_and_with() {
        let a = SymbolSet::new(&[SymbolId::LBrace]);
        let b = SymbolSet::new(&[SymbolId::RBrace]);
        let both = a.union(b).with(SymbolId::Eof);
        assert_eq!(both.iter().collect::<Vec<_>>(), vec![SymbolId::LBrace, SymbolId::RBrace, SymbolId::Eof]);
        assert!(SymbolSet::EMPTY.is_empty());
    }

    #[test]
    fn collects_from_iterator() {
        let set: SymbolSet = [SymbolId::If, SymbolId::While, SymbolId::If].into_iter().collect();
        assert_eq!(set, SymbolSet::new(&[SymbolId::While, SymbolId::If]));
        assert_eq!(format!("{set:?}"), "{If, While}");
    }
}
