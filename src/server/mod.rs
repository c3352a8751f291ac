//! Server application core modules.
//!
//! This module contains the HTTP backend for the holonet catalog: configuration, the
//! repository layer over SeaORM, services enforcing the request validation policy,
//! axum controllers and the OpenAPI router.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
