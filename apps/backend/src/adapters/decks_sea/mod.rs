//! SeaORM adapter for the decks table.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::decks;
use crate::infra::db_errors::DRAW_RACE_PREFIX;

pub mod dto;

pub use dto::DeckCreate;

pub async fn create_deck<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DeckCreate,
) -> Result<decks::Model, sea_orm::DbErr> {
    let deck_active = decks::ActiveModel {
        id: Set(dto.id),
        shuffled: Set(dto.shuffled),
        remaining: Set(dto.remaining),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    deck_active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    deck_id: Uuid,
) -> Result<Option<decks::Model>, sea_orm::DbErr> {
    decks::Entity::find_by_id(deck_id).one(conn).await
}

/// Read the deck row with an exclusive row lock held until the transaction ends.
///
/// Postgres renders `FOR UPDATE`; SQLite has no row locks and relies on its
/// single-writer lock instead.
pub async fn lock_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    deck_id: Uuid,
) -> Result<Option<decks::Model>, sea_orm::DbErr> {
    decks::Entity::find()
        .filter(decks::Column::Id.eq(deck_id))
        .lock_exclusive()
        .one(conn)
        .await
}

/// Subtract `count` from `remaining`, refusing to go below zero.
///
/// Fails with a draw-race `DbErr::Custom` when the guard matches no row.
pub async fn decrement_remaining<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    deck_id: Uuid,
    count: i32,
) -> Result<(), sea_orm::DbErr> {
    let result = decks::Entity::update_many()
        .col_expr(
            decks::Column::Remaining,
            Expr::col(decks::Column::Remaining).sub(count),
        )
        .filter(decks::Column::Id.eq(deck_id))
        .filter(decks::Column::Remaining.gte(count))
        .exec(conn)
        .await?;

    if result.rows_affected != 1 {
        return Err(sea_orm::DbErr::Custom(format!(
            "{DRAW_RACE_PREFIX}deck {deck_id} could not give up {count} cards"
        )));
    }
    Ok(())
}
