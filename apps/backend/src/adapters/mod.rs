//! SeaORM adapters. Functions are generic over `ConnectionTrait` and return
//! `sea_orm::DbErr`; the repos layer maps errors to `DomainError`.

pub mod cards_sea;
pub mod decks_sea;
