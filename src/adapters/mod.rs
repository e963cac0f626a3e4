//! Adapters layer - concrete implementations of the ports.
//!
//! # Module Organization
//!
//! - `http` - axum REST adapter exposing the survey endpoints
//! - `postgres` - sqlx-backed submission persistence
//! - `memory` - in-memory persistence for tests and local development
//! - `gateway` - outbound HTTP client implementing the submission gateway

pub mod gateway;
pub mod http;
pub mod memory;
pub mod postgres;
