//! Player symbols.
//!
//! ## Symbol
//!
//! The two marks that can be placed on the board. `X` always moves first.
//!
//! ## SymbolMap
//!
//! Fixed two-slot storage indexed by `Symbol`, used for per-symbol tallies.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Symbol {
    /// Both symbols in turn order.
    pub const ALL: [Symbol; 2] = [Symbol::X, Symbol::O];

    /// The other symbol.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Slot index (X = 0, O = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Symbol::X => 0,
            Symbol::O => 1,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

/// Per-symbol data storage with O(1) access.
///
/// ```
/// use rust_ttt::core::{Symbol, SymbolMap};
///
/// let mut wins: SymbolMap<u32> = SymbolMap::default();
/// wins[Symbol::O] += 1;
/// assert_eq!(wins[Symbol::X], 0);
/// assert_eq!(wins[Symbol::O], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolMap<T> {
    data: [T; 2],
}

impl<T> SymbolMap<T> {
    /// Create a map from the X and O values.
    pub const fn new(x: T, o: T) -> Self {
        Self { data: [x, o] }
    }

    /// Get a reference to a symbol's data.
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> &T {
        &self.data[symbol.index()]
    }

    /// Get a mutable reference to a symbol's data.
    pub fn get_mut(&mut self, symbol: Symbol) -> &mut T {
        &mut self.data[symbol.index()]
    }

    /// Iterate over (Symbol, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &T)> {
        Symbol::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Symbol> for SymbolMap<T> {
    type Output = T;

    fn index(&self, symbol: Symbol) -> &Self::Output {
        self.get(symbol)
    }
}

impl<T> IndexMut<Symbol> for SymbolMap<T> {
    fn index_mut(&mut self, symbol: Symbol) -> &mut Self::Output {
        self.get_mut(symbol)
    }
}
