//! Workplace Pulse - Weighted-allocation workplace assessment survey.
//!
//! Respondents distribute 100 points across four options per question, once
//! for their organisation's current state and once for its aspirational
//! state. Submissions are persisted and aggregated into per-question company
//! analytics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
