// Error mapping without HTTP or database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_kinds_to_400() {
    let cases = [
        (ValidationKind::InvalidCard, ErrorCode::InvalidCard),
        (ValidationKind::InvalidDeck, ErrorCode::InvalidDeck),
        (ValidationKind::InvalidDeckId, ErrorCode::InvalidDeckId),
        (ValidationKind::InvalidDrawAmount, ErrorCode::InvalidDrawAmount),
        (
            ValidationKind::InsufficientRemainingCards,
            ErrorCode::InsufficientRemainingCards,
        ),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "bad").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status().as_u16(), 400);
    }
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Deck, "no deck").into();
    assert_eq!(app.code().as_str(), "DECK_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::AvailableCards, "empty").into();
    assert_eq!(app.code().as_str(), "NO_CARDS_AVAILABLE");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_conflicts_to_409() {
    let app: AppError = DomainError::conflict(ConflictKind::DrawRace, "lost race").into();
    assert_eq!(app.code(), ErrorCode::DrawConflict);
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("something".into()), "generic").into();
    assert_eq!(app.code(), ErrorCode::Conflict);
}

#[test]
fn maps_infra_to_500() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code(), ErrorCode::DbTimeout);
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert!(matches!(app, AppError::DbUnavailable));
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad").into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);

    let app: AppError = DomainError::infra(InfraErrorKind::Other("x".into()), "other").into();
    assert_eq!(app.code(), ErrorCode::DbError);
    assert_eq!(app.status().as_u16(), 500);
}
