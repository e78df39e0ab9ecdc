//! SeaORM adapter for the cards table.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use crate::entities::cards;
use crate::infra::db_errors::DRAW_RACE_PREFIX;

pub mod dto;

pub use dto::{CardCreate, CardOrder};

pub async fn insert_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CardCreate,
) -> Result<cards::Model, sea_orm::DbErr> {
    let card_active = cards::ActiveModel {
        id: NotSet,
        deck_id: Set(dto.deck_id),
        code: Set(dto.code),
        value: Set(dto.value),
        suit: Set(dto.suit),
        drawn: Set(false),
    };

    card_active.insert(conn).await
}

pub async fn find_undrawn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    deck_id: Uuid,
    order: CardOrder,
) -> Result<Vec<cards::Model>, sea_orm::DbErr> {
    let query = cards::Entity::find()
        .filter(cards::Column::DeckId.eq(deck_id))
        .filter(cards::Column::Drawn.eq(false));

    let query = match order {
        CardOrder::Oldest => query.order_by_asc(cards::Column::Id),
        CardOrder::Newest => query.order_by_desc(cards::Column::Id),
    };

    query.all(conn).await
}

/// Flip `drawn` for exactly `card_ids`, all of which must be undrawn cards of `deck_id`.
pub async fn mark_drawn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    deck_id: Uuid,
    card_ids: &[i64],
) -> Result<(), sea_orm::DbErr> {
    let result = cards::Entity::update_many()
        .col_expr(cards::Column::Drawn, Expr::value(true))
        .filter(cards::Column::DeckId.eq(deck_id))
        .filter(cards::Column::Drawn.eq(false))
        .filter(cards::Column::Id.is_in(card_ids.iter().copied()))
        .exec(conn)
        .await?;

    if result.rows_affected != card_ids.len() as u64 {
        return Err(sea_orm::DbErr::Custom(format!(
            "{DRAW_RACE_PREFIX}deck {deck_id}: marked {} of {} cards",
            result.rows_affected,
            card_ids.len()
        )));
    }
    Ok(())
}
