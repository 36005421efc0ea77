//! Shared test fixtures.

pub mod database;

#[allow(unused_imports)]
pub use database::{create_test_account, unique_email, TestDatabase};
