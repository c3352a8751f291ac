//! Fixture helpers for inserting mock records.
//!
//! `catalog` and `user` insert rows through the test database, `factory` builds
//! in-memory models without touching a database.

pub mod catalog;
pub mod factory;
pub mod user;
