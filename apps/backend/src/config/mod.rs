//! Configuration read from environment variables.

pub mod db;
pub mod server;
