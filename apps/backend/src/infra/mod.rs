//! Infrastructure layer: database connection, state building, error translation.

pub mod db;
pub mod db_errors;
pub mod state;
