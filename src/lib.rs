//! Courier - a typed adapter between AWS SQS and in-process values.
//!
//! The crate covers the three things a queue-backed service needs from SQS:
//!
//! 1. Decoding incoming Lambda SQS event payloads into
//!    [`crate::core::models::SqsMessage`] values, with typed delivery
//!    attributes and the source queue URL derived from the event ARN.
//! 2. Encoding outgoing payloads with a round-trip-safe JSON convention
//!    ([`codec`]) that preserves timestamps and UUIDs, and sending them to
//!    stage-namespaced queues.
//! 3. Backing off redelivered messages by extending their visibility timeout
//!    linearly with the receive count.
//!
//! Configuration is explicit: [`crate::core::config::AppConfig`] is injected at
//! construction, and a disabled config turns every network operation into a
//! no-op for test environments.
//!
//! # Example
//!
//! ```no_run
//! use courier::clients::SqsClient;
//! use courier::core::config::AppConfig;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     courier::setup_logging();
//!
//!     let config = AppConfig {
//!         stage: "dev".to_string(),
//!         region: "us-west-2".to_string(),
//!         account_id: "120356305272".to_string(),
//!         disabled: false,
//!     };
//!     let client = SqsClient::new(config).await;
//!
//!     let event = json!({ "Records": [] });
//!     for message in courier::sqs_parser::parse_sqs_messages(&event)? {
//!         client.set_visibility_timeout_with_backoff(&message).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod codec;
pub mod core;
pub mod errors;
pub mod sqs_parser;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at the start of each handler binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
