use actix_web::web;

pub mod decks;
pub mod health;

/// Register every route. Shared by `main.rs` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/decks").configure(decks::configure_routes));
}
