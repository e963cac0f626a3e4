//! Outbound gateway adapters.

mod http;

pub use http::{HttpGatewayConfig, HttpSubmissionGateway};
