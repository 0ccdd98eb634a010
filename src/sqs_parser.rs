//! Decode Lambda SQS event payloads into typed messages.
//!
//! The event envelope arrives as `{"Records": [...]}` with every attribute
//! stringly typed; this module is the pure half of the adapter that turns the
//! envelope into `SqsMessage` values. Decoding is all-or-nothing: one
//! malformed record fails the whole batch.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::codec;
use crate::core::models::{SqsMessage, SqsMessageAttributes};
use crate::errors::SqsError;

#[derive(Debug, Deserialize)]
struct RawSqsEvent {
    #[serde(rename = "Records")]
    records: Vec<RawSqsRecord>,
}

#[derive(Debug, Deserialize)]
struct RawSqsRecord {
    #[serde(rename = "messageId")]
    message_id: String,
    #[serde(rename = "receiptHandle")]
    receipt_handle: String,
    body: String,
    attributes: RawSqsAttributes,
    #[serde(rename = "md5OfBody")]
    md5_of_body: String,
    #[serde(rename = "eventSource")]
    event_source: String,
    #[serde(rename = "eventSourceARN")]
    event_source_arn: String,
    #[serde(rename = "awsRegion")]
    aws_region: String,
}

#[derive(Debug, Deserialize)]
struct RawSqsAttributes {
    #[serde(rename = "ApproximateReceiveCount")]
    approximate_receive_count: String,
    #[serde(rename = "SentTimestamp")]
    sent_timestamp: String,
    #[serde(rename = "SenderId")]
    sender_id: String,
    #[serde(rename = "ApproximateFirstReceiveTimestamp")]
    approximate_first_receive_timestamp: String,
}

/// Parse a raw SQS event envelope into messages, preserving record order.
///
/// # Errors
///
/// Returns `SqsError::FormatError` if the envelope shape is wrong or any
/// record carries a malformed id, body, attribute, or source ARN.
pub fn parse_sqs_messages(event: &Value) -> Result<Vec<SqsMessage>, SqsError> {
    let envelope: RawSqsEvent = serde_json::from_value(event.clone())
        .map_err(|e| SqsError::FormatError(format!("Failed to parse SQS event envelope: {e}")))?;

    envelope.records.into_iter().map(parse_record).collect()
}

fn parse_record(raw: RawSqsRecord) -> Result<SqsMessage, SqsError> {
    let event_source_url = url_from_arn(&raw.event_source_arn)?;

    Ok(SqsMessage {
        message_id: Uuid::parse_str(&raw.message_id)?,
        receipt_handle: raw.receipt_handle,
        body: codec::decode(&raw.body)?,
        attributes: SqsMessageAttributes {
            approximate_receive_count: raw.attributes.approximate_receive_count.parse()?,
            sent_timestamp: timestamp_from_millis(&raw.attributes.sent_timestamp)?,
            sender_id: raw.attributes.sender_id,
            approximate_first_receive_timestamp: timestamp_from_millis(
                &raw.attributes.approximate_first_receive_timestamp,
            )?,
        },
        md5_of_body: raw.md5_of_body,
        event_source: raw.event_source,
        event_source_arn: raw.event_source_arn,
        event_source_url,
        aws_region: raw.aws_region,
    })
}

// SQS reports both timestamps as millisecond-epoch strings.
fn timestamp_from_millis(raw: &str) -> Result<DateTime<Utc>, SqsError> {
    let millis: i64 = raw.parse()?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| SqsError::FormatError(format!("timestamp {millis}ms is out of range")))
}

/// Derive the queue URL addressed by an event-source ARN.
///
/// ARNs look like `arn:aws:sqs:us-west-2:120356305272:my-queue`; region,
/// account and queue name sit at fixed positions.
///
/// # Errors
///
/// Returns `SqsError::FormatError` if the ARN has fewer than six parts.
pub fn url_from_arn(arn: &str) -> Result<String, SqsError> {
    let parts: Vec<&str> = arn.split(':').collect();
    if parts.len() < 6 {
        return Err(SqsError::FormatError(format!("malformed queue ARN: {arn}")));
    }
    Ok(format!(
        "https://sqs.{}.amazonaws.com/{}/{}",
        parts[3], parts[4], parts[5]
    ))
}
