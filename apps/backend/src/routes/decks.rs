//! Deck HTTP routes.

use actix_web::web;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::txn::with_txn;
use crate::domain::deck::DeckRequest;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::decks::{Card, Deck};
use crate::services::{CreatingService, DrawingService, ListingService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateDeckQuery {
    cards: Option<String>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
struct CreateDeckBody {
    #[serde(default)]
    shuffled: bool,
}

impl CreateDeckBody {
    /// An empty body means the defaults. Anything else must be a JSON object,
    /// whatever the request's content type says.
    fn from_bytes(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| {
            AppError::bad_request(
                ErrorCode::BadRequest,
                format!("invalid request body: {e}"),
            )
        })
    }
}

#[derive(Debug, Serialize)]
struct CardResponse {
    code: String,
    value: &'static str,
    suit: &'static str,
}

impl From<&Card> for CardResponse {
    fn from(card: &Card) -> Self {
        Self {
            code: card.code(),
            value: card.face.value.name(),
            suit: card.face.suit.name(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DeckCreatedResponse {
    deck_id: Uuid,
    shuffled: bool,
    remaining: usize,
}

#[derive(Debug, Serialize)]
struct DeckResponse {
    deck_id: Uuid,
    shuffled: bool,
    remaining: usize,
    cards: Vec<CardResponse>,
}

impl From<Deck> for DeckResponse {
    fn from(deck: Deck) -> Self {
        Self {
            deck_id: deck.id,
            shuffled: deck.shuffled,
            remaining: deck.remaining,
            cards: deck.cards.iter().map(CardResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DrawResponse {
    cards: Vec<CardResponse>,
}

fn deck_request(query: &CreateDeckQuery, shuffled: bool) -> DeckRequest {
    match query.cards.as_deref().map(str::trim) {
        Some(codes) if !codes.is_empty() => {
            DeckRequest::partial(shuffled, codes.split(',').map(str::trim))
        }
        _ => DeckRequest::full(shuffled),
    }
}

/// POST /decks?cards=AS,KD
///
/// Body `{"shuffled": true}` is optional. Without `cards` a full deck is created.
async fn create_deck(
    query: web::Query<CreateDeckQuery>,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<web::Json<DeckCreatedResponse>, AppError> {
    let body = CreateDeckBody::from_bytes(&body)?;
    let request = deck_request(&query, body.shuffled);

    let deck = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let deck = CreatingService::new().create(txn, request).await?;
            Ok::<_, AppError>(deck)
        })
    })
    .await?;

    Ok(web::Json(DeckCreatedResponse {
        deck_id: deck.id,
        shuffled: deck.shuffled,
        remaining: deck.remaining,
    }))
}

/// GET /decks/{deck_id}
async fn get_deck(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<DeckResponse>, AppError> {
    let deck_id = path.into_inner();

    let deck = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let deck = ListingService::new().list(txn, &deck_id).await?;
            Ok::<_, AppError>(deck)
        })
    })
    .await?;

    Ok(web::Json(DeckResponse::from(deck)))
}

/// PATCH /decks/{deck_id}/draw/{amount}
async fn draw_cards(
    path: web::Path<(String, String)>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<DrawResponse>, AppError> {
    let (deck_id, amount) = path.into_inner();
    let count = amount.trim().parse::<i64>().map_err(|_| {
        AppError::invalid(
            ErrorCode::InvalidDrawAmount,
            format!("draw amount must be a number, got '{amount}'"),
        )
    })?;

    let cards = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let cards = DrawingService::new().draw(txn, &deck_id, count).await?;
            Ok::<_, AppError>(cards)
        })
    })
    .await?;

    Ok(web::Json(DrawResponse {
        cards: cards.iter().map(CardResponse::from).collect(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_deck)))
        .service(web::resource("/{deck_id}").route(web::get().to(get_deck)))
        .service(web::resource("/{deck_id}/draw/{amount}").route(web::patch().to(draw_cards)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_without_cards_is_full_deck() {
        let query = CreateDeckQuery { cards: None };
        assert_eq!(deck_request(&query, true), DeckRequest::full(true));

        let blank = CreateDeckQuery {
            cards: Some("  ".into()),
        };
        assert_eq!(deck_request(&blank, false), DeckRequest::full(false));
    }

    #[test]
    fn empty_body_means_defaults() {
        assert_eq!(CreateDeckBody::from_bytes(b"").unwrap(), CreateDeckBody::default());
        assert_eq!(CreateDeckBody::from_bytes(b" \n").unwrap(), CreateDeckBody::default());
        assert_eq!(CreateDeckBody::from_bytes(b"{}").unwrap(), CreateDeckBody::default());
        assert!(CreateDeckBody::from_bytes(br#"{"shuffled": true}"#).unwrap().shuffled);
    }

    #[test]
    fn unreadable_body_is_bad_request() {
        let bodies: [&[u8]; 4] = [br#"{"shuffled": "yes"}"#, b"{", b"null", b"shuffled=true"];
        for body in bodies {
            let err = CreateDeckBody::from_bytes(body).unwrap_err();
            assert_eq!(err.code(), ErrorCode::BadRequest);
            assert_eq!(err.status().as_u16(), 400);
        }
    }

    #[test]
    fn query_cards_are_split_and_counted() {
        let query = CreateDeckQuery {
            cards: Some("AS, KD,10H".into()),
        };
        let request = deck_request(&query, false);
        assert_eq!(request.remaining, 3);
        assert_eq!(request.cards, vec!["AS", "KD", "10H"]);
    }
}
