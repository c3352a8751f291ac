//! Tests for character controller endpoints.

mod create_character;
mod get_character;

use super::*;
