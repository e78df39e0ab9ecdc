//! Harness shared by the HTTP tests: state in, initialized actix service out.

pub mod app_builder;

pub use app_builder::{create_test_app, TestAppBuilder};
