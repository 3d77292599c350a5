//! Fitness Platform Backend Library
//!
//! Plan generation API. Exposes the backend modules for use in
//! integration tests.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
