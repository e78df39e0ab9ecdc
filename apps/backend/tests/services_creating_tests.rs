mod common;

use croupier::db::txn::with_txn;
use croupier::domain::deck::DeckRequest;
use croupier::entities::{Cards, Decks};
use croupier::errors::domain::{DomainError, ValidationKind};
use croupier::services::CreatingService;
use croupier::AppError;
use sea_orm::{EntityTrait, PaginatorTrait};

use common::{codes, db, memory_state};

#[tokio::test]
async fn full_deck_is_created_in_canonical_order() -> Result<(), Box<dyn std::error::Error>> {
    let state = memory_state().await;

    let deck = with_txn(&state, |txn| {
        Box::pin(async move {
            let deck = CreatingService::new()
                .create(txn, DeckRequest::full(false))
                .await?;
            Ok::<_, AppError>(deck)
        })
    })
    .await?;

    assert!(!deck.shuffled);
    assert_eq!(deck.remaining, 52);
    assert_eq!(deck.cards.len(), 52);
    let codes = codes(&deck.cards);
    assert_eq!(codes[0], "AS");
    assert_eq!(codes[12], "KS");
    assert_eq!(codes[13], "AD");
    assert_eq!(codes[26], "AC");
    assert_eq!(codes[51], "KH");

    Ok(())
}

#[tokio::test]
async fn card_ids_increase_in_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
    let state = memory_state().await;

    let deck = CreatingService::new()
        .create(db(&state), DeckRequest::partial(false, ["2H", "3H", "4H"]))
        .await?;

    let ids: Vec<i64> = deck.cards.iter().map(|c| c.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {ids:?}");
    assert!(deck.cards.iter().all(|c| !c.drawn));

    Ok(())
}

#[tokio::test]
async fn partial_deck_keeps_caller_order_and_enriches() -> Result<(), Box<dyn std::error::Error>> {
    let state = memory_state().await;

    let deck = CreatingService::new()
        .create(
            db(&state),
            DeckRequest::partial(false, ["AS", "KD", "AC", "KH"]),
        )
        .await?;

    assert_eq!(deck.remaining, 4);
    let faces: Vec<(String, &str, &str)> = deck
        .cards
        .iter()
        .map(|c| (c.code(), c.face.value.name(), c.face.suit.name()))
        .collect();
    assert_eq!(
        faces,
        vec![
            ("AS".to_string(), "ACE", "SPADES"),
            ("KD".to_string(), "KING", "DIAMONDS"),
            ("AC".to_string(), "ACE", "CLUBS"),
            ("KH".to_string(), "KING", "HEARTS"),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn seeded_shuffle_is_a_permutation() -> Result<(), Box<dyn std::error::Error>> {
    let state = memory_state().await;

    let shuffled = CreatingService::with_seed(2024)
        .create(db(&state), DeckRequest::full(true))
        .await?;
    let again = CreatingService::with_seed(2024)
        .create(db(&state), DeckRequest::full(true))
        .await?;
    let ordered = CreatingService::new()
        .create(db(&state), DeckRequest::full(false))
        .await?;

    assert!(shuffled.shuffled);
    assert_ne!(shuffled.id, again.id);
    assert_eq!(codes(&shuffled.cards), codes(&again.cards));
    assert_ne!(codes(&shuffled.cards), codes(&ordered.cards));

    let mut sorted_shuffled = codes(&shuffled.cards);
    let mut sorted_ordered = codes(&ordered.cards);
    sorted_shuffled.sort();
    sorted_ordered.sort();
    assert_eq!(sorted_shuffled, sorted_ordered);

    Ok(())
}

#[tokio::test]
async fn invalid_deck_persists_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let state = memory_state().await;
    let mut request = DeckRequest::partial(false, ["AS", "KD"]);
    request.remaining = 5;

    let err = CreatingService::new()
        .create(db(&state), request)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidDeck, _)
    ));
    assert_eq!(Decks::find().count(db(&state)).await?, 0);
    assert_eq!(Cards::find().count(db(&state)).await?, 0);

    Ok(())
}

#[tokio::test]
async fn malformed_code_persists_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let state = memory_state().await;

    let result = with_txn(&state, |txn| {
        Box::pin(async move {
            let deck = CreatingService::new()
                .create(txn, DeckRequest::partial(false, ["AS", "KD", "1X", "KH"]))
                .await?;
            Ok::<_, AppError>(deck)
        })
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.code().as_str(), "INVALID_CARD");
    assert_eq!(err.status().as_u16(), 400);
    assert_eq!(Decks::find().count(db(&state)).await?, 0);
    assert_eq!(Cards::find().count(db(&state)).await?, 0);

    Ok(())
}

#[tokio::test]
async fn store_failure_is_internal() -> Result<(), Box<dyn std::error::Error>> {
    // A state whose schema was never created: every insert fails.
    let conn = croupier::connect_db(&croupier::DbProfile::InMemory).await?;

    let err = CreatingService::new()
        .create(&conn, DeckRequest::full(false))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Infra(..)), "got {err:?}");

    Ok(())
}
