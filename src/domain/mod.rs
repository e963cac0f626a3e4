//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `survey` - Survey logic: allocations, question catalog, step navigation,
//!   in-progress sessions, submissions, and company analytics

pub mod foundation;
pub mod survey;
