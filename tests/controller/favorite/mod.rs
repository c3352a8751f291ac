//! Tests for favorite controller endpoints.

mod create_favorite;
mod get_user_favorites;

use super::*;
