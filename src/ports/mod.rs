//! Ports layer - trait contracts between the domain and the adapters.
//!
//! # Module Organization
//!
//! - `submission_repository` - persistence gateway for stored submissions
//! - `submission_gateway` - client-side seam used to hand a finished
//!   session to a (possibly remote) backend

mod submission_gateway;
mod submission_repository;

pub use submission_gateway::{GatewayError, SubmissionGateway, SubmissionReceipt};
pub use submission_repository::{PageOptions, Pagination, SubmissionPage, SubmissionRepository};
