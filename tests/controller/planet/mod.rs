//! Tests for planet controller endpoints.

mod create_planet;
mod update_planet;

use super::*;
