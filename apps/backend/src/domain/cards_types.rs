//! Core card types: Suit, Value, CardFace

use std::fmt;

/// Size of the standard French deck.
pub const FULL_DECK_SIZE: usize = 52;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Value {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// Suit symbol table. Order is the canonical full-deck suit order.
pub(crate) static SUITS: [(char, &str, Suit); 4] = [
    ('S', "SPADES", Suit::Spades),
    ('D', "DIAMONDS", Suit::Diamonds),
    ('C', "CLUBS", Suit::Clubs),
    ('H', "HEARTS", Suit::Hearts),
];

/// Value prefix table. Order is the canonical within-suit order.
pub(crate) static VALUES: [(&str, &str, Value); 13] = [
    ("A", "ACE", Value::Ace),
    ("2", "2", Value::Two),
    ("3", "3", Value::Three),
    ("4", "4", Value::Four),
    ("5", "5", Value::Five),
    ("6", "6", Value::Six),
    ("7", "7", Value::Seven),
    ("8", "8", Value::Eight),
    ("9", "9", Value::Nine),
    ("10", "10", Value::Ten),
    ("J", "JACK", Value::Jack),
    ("Q", "QUEEN", Value::Queen),
    ("K", "KING", Value::King),
];

impl Suit {
    pub fn all() -> impl Iterator<Item = Suit> {
        SUITS.iter().map(|&(_, _, s)| s)
    }

    pub fn symbol(self) -> char {
        self.entry().0
    }

    /// Canonical name, e.g. "SPADES".
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn from_symbol(symbol: char) -> Option<Suit> {
        SUITS.iter().find(|(c, _, _)| *c == symbol).map(|&(_, _, s)| s)
    }

    pub fn from_name(name: &str) -> Option<Suit> {
        SUITS.iter().find(|(_, n, _)| *n == name).map(|&(_, _, s)| s)
    }

    fn entry(self) -> &'static (char, &'static str, Suit) {
        // Every variant has exactly one row.
        &SUITS[self as usize]
    }
}

impl Value {
    pub fn all() -> impl Iterator<Item = Value> {
        VALUES.iter().map(|&(_, _, v)| v)
    }

    /// Code prefix, e.g. "A" or "10".
    pub fn prefix(self) -> &'static str {
        VALUES[self as usize].0
    }

    /// Canonical name, e.g. "ACE" or "7".
    pub fn name(self) -> &'static str {
        VALUES[self as usize].1
    }

    pub fn from_prefix(prefix: &str) -> Option<Value> {
        VALUES.iter().find(|(p, _, _)| *p == prefix).map(|&(_, _, v)| v)
    }

    pub fn from_name(name: &str) -> Option<Value> {
        VALUES.iter().find(|(_, n, _)| *n == name).map(|&(_, _, v)| v)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A card's face: what is printed on it, independent of any deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CardFace {
    pub value: Value,
    pub suit: Suit,
}

impl CardFace {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Short code, e.g. "AS" or "10D".
    pub fn code(&self) -> String {
        super::cards_parsing::encode(self.value, self.suit)
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.prefix(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_line_up_with_discriminants() {
        for (i, (_, _, suit)) in SUITS.iter().enumerate() {
            assert_eq!(*suit as usize, i);
        }
        for (i, (_, _, value)) in VALUES.iter().enumerate() {
            assert_eq!(*value as usize, i);
        }
    }

    #[test]
    fn names_and_symbols() {
        assert_eq!(Suit::Hearts.symbol(), 'H');
        assert_eq!(Suit::Clubs.name(), "CLUBS");
        assert_eq!(Value::Ace.name(), "ACE");
        assert_eq!(Value::Ten.prefix(), "10");
        assert_eq!(Value::from_name("QUEEN"), Some(Value::Queen));
        assert_eq!(Suit::from_name("CLUB"), None);
    }

    #[test]
    fn display_is_the_code() {
        let face = CardFace::new(Value::Ten, Suit::Diamonds);
        assert_eq!(face.to_string(), "10D");
        assert_eq!(face.code(), "10D");
    }
}
