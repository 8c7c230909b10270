//! Core type definitions for numeral conversion
//!
//! This module contains the fundamental types used throughout Romanus:
//! the canonical symbols, the symbol tables that map input characters to
//! them, and per-run conversion options.

use std::fmt;
use std::str::FromStr;

/// A canonical Roman numeral symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    /// All symbols in ascending order of value
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    /// Numeric value of the symbol
    pub const fn value(self) -> i64 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// The canonical (uppercase) glyph for this symbol
    pub const fn glyph(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

const STANDARD_GLYPHS: &[(char, Symbol)] = &[
    ('I', Symbol::I),
    ('V', Symbol::V),
    ('X', Symbol::X),
    ('L', Symbol::L),
    ('C', Symbol::C),
    ('D', Symbol::D),
    ('M', Symbol::M),
];

// Lowercase 'l' reads as fifty: inherited case-sensitivity defect.
const LEGACY_GLYPHS: &[(char, Symbol)] = &[
    ('I', Symbol::I),
    ('V', Symbol::V),
    ('X', Symbol::X),
    ('L', Symbol::L),
    ('l', Symbol::L),
    ('C', Symbol::C),
    ('D', Symbol::D),
    ('M', Symbol::M),
];

/// Mapping from input characters to symbols
///
/// Characters that are not in the table have no symbol. The legacy scan
/// treats them as contributing a value of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SymbolTable {
    /// `I V X L C D M` plus lowercase `l` for fifty
    #[default]
    Legacy,
    /// Exactly the seven uppercase glyphs
    Standard,
}

impl SymbolTable {
    /// The `(character, symbol)` pairs recognized by this table
    pub fn entries(&self) -> &'static [(char, Symbol)] {
        match self {
            SymbolTable::Legacy => LEGACY_GLYPHS,
            SymbolTable::Standard => STANDARD_GLYPHS,
        }
    }

    /// Look up the symbol for a character
    pub fn symbol(&self, c: char) -> Option<Symbol> {
        self.entries()
            .iter()
            .find(|(glyph, _)| *glyph == c)
            .map(|(_, symbol)| *symbol)
    }

    /// Value of a character, zero when it has no symbol
    pub fn value(&self, c: char) -> i64 {
        self.symbol(c).map(Symbol::value).unwrap_or(0)
    }

    /// Get all valid table names
    pub fn variants() -> &'static [&'static str] {
        &["legacy", "standard"]
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolTable::Legacy => write!(f, "legacy"),
            SymbolTable::Standard => write!(f, "standard"),
        }
    }
}

impl FromStr for SymbolTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(SymbolTable::Legacy),
            "standard" => Ok(SymbolTable::Standard),
            _ => Err(format!("Unknown symbol table: {}", s)),
        }
    }
}

/// Per-run conversion settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Table used to look up characters
    pub table: SymbolTable,
    /// Validate the numeral before converting
    pub strict: bool,
}

impl ConvertOptions {
    pub fn new(table: SymbolTable, strict: bool) -> Self {
        Self { table, strict }
    }
}
