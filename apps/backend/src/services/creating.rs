//! Deck creation: validate, assemble, persist.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::domain::assembly::assemble;
use crate::domain::deck::{validate, DeckRequest};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::decks::{self, Deck};

/// Deck creation service.
#[derive(Debug, Clone, Default)]
pub struct CreatingService {
    seed: Option<u64>,
}

impl CreatingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle deterministically from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }

    /// Create a deck. Nothing is written unless the request validates.
    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        request: DeckRequest,
    ) -> Result<Deck, DomainError> {
        let validated = validate(&request).inspect_err(|e| {
            debug!(error = %e, remaining = request.remaining, "deck request rejected");
        })?;

        let new_deck = assemble(validated, &mut self.rng());

        let deck = decks::create_deck(conn, &new_deck)
            .await
            .map_err(persistence_failure)?;

        info!(
            deck_id = %deck.id,
            shuffled = deck.shuffled,
            remaining = deck.remaining,
            "deck created"
        );
        Ok(deck)
    }
}

/// A failed insert is the server's problem, whatever the store said.
fn persistence_failure(e: DomainError) -> DomainError {
    match e {
        DomainError::Infra(..) => e,
        other => DomainError::infra(
            InfraErrorKind::Other("CreateDeck".into()),
            format!("failed to create deck: {other}"),
        ),
    }
}
