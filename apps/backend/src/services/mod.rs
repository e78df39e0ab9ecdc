//! Use-case services. Each method takes the caller's connection or
//! transaction; none of them open transactions themselves.

pub mod creating;
pub mod drawing;
pub mod listing;

use uuid::Uuid;

use crate::errors::domain::{DomainError, ValidationKind};

pub use creating::CreatingService;
pub use drawing::DrawingService;
pub use listing::ListingService;

/// Parse a deck identifier supplied by a caller.
pub fn parse_deck_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        DomainError::validation(
            ValidationKind::InvalidDeckId,
            format!("invalid deck id: {raw}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_deck_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_deck_id("not-a-deck").unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidDeckId, _)
        ));
    }
}
