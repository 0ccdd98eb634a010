//! Client modules for external API interactions

pub mod sqs;

pub use sqs::SqsClient;
