use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::codec::Payload;

/// Delivery attributes the queue stamps onto every record.
#[derive(Debug, Clone, PartialEq)]
pub struct SqsMessageAttributes {
    /// Number of delivery attempts so far; at least 1 for any message that
    /// reaches a consumer.
    pub approximate_receive_count: u32,
    pub sent_timestamp: DateTime<Utc>,
    pub sender_id: String,
    pub approximate_first_receive_timestamp: DateTime<Utc>,
}

/// One decoded queue record.
///
/// Produced only by `sqs_parser::parse_sqs_messages`; never mutated after
/// construction. The receipt handle is the opaque token required to extend
/// this delivery's visibility window.
#[derive(Debug, Clone, PartialEq)]
pub struct SqsMessage {
    pub message_id: Uuid,
    pub receipt_handle: String,
    pub body: Payload,
    pub attributes: SqsMessageAttributes,
    pub md5_of_body: String,
    pub event_source: String,
    pub event_source_arn: String,
    /// Queue URL derived from `event_source_arn`; used to address
    /// visibility-timeout calls back at the source queue.
    pub event_source_url: String,
    pub aws_region: String,
}
