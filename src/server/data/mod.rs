//! Data access layer repositories.
//!
//! One repository per aggregate, each borrowing any SeaORM connection (a pool or an open
//! transaction). Reads that need related rows perform the join explicitly here so
//! serialization never triggers a database round-trip.

pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod starship;
pub mod user;

use sea_orm::ActiveValue;

/// Writes `value` into a nullable column only when it was provided
fn set_if_some(column: &mut ActiveValue<Option<String>>, value: Option<String>) {
    if let Some(value) = value {
        *column = ActiveValue::Set(Some(value));
    }
}
