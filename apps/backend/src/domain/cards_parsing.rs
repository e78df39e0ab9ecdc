//! Card codes: parsing "AS" / "10D" into faces and back.

use std::str::FromStr;

use super::cards_types::{CardFace, Suit, Value};
use crate::errors::domain::DomainError;

/// Decode a card code into its face.
///
/// Surrounding whitespace is ignored. The code must be 2 or 3 characters: a
/// value prefix from {A, 2..10, J, Q, K} followed by a suit symbol from
/// {S, D, C, H}. Anything else is `InvalidCard`.
pub fn decode(code: &str) -> Result<CardFace, DomainError> {
    let trimmed = code.trim();
    let len = trimmed.chars().count();
    if !(2..=3).contains(&len) {
        return Err(DomainError::invalid_card(code));
    }

    let mut chars = trimmed.chars();
    let suit_ch = chars
        .next_back()
        .ok_or_else(|| DomainError::invalid_card(code))?;
    let prefix = chars.as_str();

    let suit = Suit::from_symbol(suit_ch).ok_or_else(|| DomainError::invalid_card(code))?;
    let value = Value::from_prefix(prefix).ok_or_else(|| DomainError::invalid_card(code))?;

    Ok(CardFace { value, suit })
}

/// Encode a face back into its code.
pub fn encode(value: Value, suit: Suit) -> String {
    format!("{}{}", value.prefix(), suit.symbol())
}

impl FromStr for CardFace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Rebuild a face from the canonical names stored alongside each card row.
pub fn from_stored_format(value: &str, suit: &str) -> Option<CardFace> {
    Some(CardFace {
        value: Value::from_name(value)?,
        suit: Suit::from_name(suit)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::domain::ValidationKind;

    fn assert_invalid(code: &str) {
        match decode(code) {
            Err(DomainError::Validation(ValidationKind::InvalidCard, _)) => {}
            other => panic!("expected InvalidCard for {code:?}, got {other:?}"),
        }
    }

    #[test]
    fn decodes_letters_and_numerals() {
        assert_eq!(decode("AS").unwrap(), CardFace::new(Value::Ace, Suit::Spades));
        assert_eq!(decode("KD").unwrap(), CardFace::new(Value::King, Suit::Diamonds));
        assert_eq!(decode("10H").unwrap(), CardFace::new(Value::Ten, Suit::Hearts));
        assert_eq!(decode("2C").unwrap(), CardFace::new(Value::Two, Suit::Clubs));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(decode("  QC ").unwrap(), CardFace::new(Value::Queen, Suit::Clubs));
    }

    #[test]
    fn rejects_bad_codes() {
        for code in ["", "A", "ASDF", "50K", "10T", "1S", "11S", "0S", "ZS", "as", "A S", "AX"] {
            assert_invalid(code);
        }
    }

    #[test]
    fn error_detail_carries_the_original_code() {
        let err = decode(" 11S").unwrap_err();
        assert!(err.to_string().contains(" 11S"));
    }

    #[test]
    fn encode_all_canonical() {
        assert_eq!(encode(Value::Ace, Suit::Spades), "AS");
        assert_eq!(encode(Value::Ten, Suit::Clubs), "10C");
        assert_eq!(encode(Value::Jack, Suit::Hearts), "JH");
    }

    #[test]
    fn stored_format_round_trip() {
        assert_eq!(
            from_stored_format("KING", "HEARTS"),
            Some(CardFace::new(Value::King, Suit::Hearts))
        );
        assert_eq!(from_stored_format("K", "HEARTS"), None);
    }
}
