use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Decks {
    Table,
    Id,
    Shuffled,
    Remaining,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Cards {
    Table,
    Id,
    DeckId,
    Code,
    Value,
    Suit,
    Drawn,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Decks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Decks::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Decks::Shuffled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Decks::Remaining)
                            .integer()
                            .not_null()
                            .check(Expr::col(Decks::Remaining).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Decks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Card ids come from the identity column; insertion order == id order.
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cards::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Cards::DeckId).uuid().not_null())
                    .col(ColumnDef::new(Cards::Code).string_len(3).not_null())
                    .col(ColumnDef::new(Cards::Value).string_len(8).not_null())
                    .col(ColumnDef::new(Cards::Suit).string_len(8).not_null())
                    .col(
                        ColumnDef::new(Cards::Drawn)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_deck_id")
                            .from(Cards::Table, Cards::DeckId)
                            .to(Decks::Table, Decks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cards_deck_id_drawn")
                    .table(Cards::Table)
                    .col(Cards::DeckId)
                    .col(Cards::Drawn)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cards::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Decks::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
