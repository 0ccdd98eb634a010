//! SQS client module
//!
//! Owns the connection to SQS and the queue-addressing rules: outgoing sends
//! to stage-namespaced queues, and visibility-timeout extensions for
//! redelivered messages. A disabled config produces an inert client whose
//! operations succeed without touching the network.

use aws_sdk_sqs::Client;
use aws_sdk_sqs::config::Region;
use tracing::{debug, info};

use crate::codec::{self, Payload};
use crate::core::config::AppConfig;
use crate::core::models::SqsMessage;
use crate::errors::SqsError;

/// Queue names are namespaced `<stage>-service-template-<name>` by the
/// provisioning stack.
pub const QUEUE_NAMESPACE: &str = "service-template";

pub struct SqsClient {
    client: Option<Client>,
    config: AppConfig,
}

impl SqsClient {
    /// Connect to SQS, or build an inert client when the config is disabled.
    pub async fn new(config: AppConfig) -> Self {
        let client = if config.disabled {
            None
        } else {
            let shared_config = aws_config::from_env()
                .region(Region::new(config.region.clone()))
                .load()
                .await;
            Some(Client::new(&shared_config))
        };
        Self { client, config }
    }

    /// Resolve the full queue URL for a logical queue name.
    #[must_use]
    pub fn url_for_queue(&self, queue_name: &str) -> String {
        format!(
            "https://{}.queue.amazonaws.com/{}/{}-{}-{}",
            self.config.region, self.config.account_id, self.config.stage, QUEUE_NAMESPACE,
            queue_name,
        )
    }

    /// Send each payload as one message to the named queue.
    ///
    /// # Errors
    ///
    /// Returns `SqsError::FormatError` if a payload fails to serialize, or
    /// `SqsError::TransportError` if SQS rejects a send. No retries.
    pub async fn send_messages(
        &self,
        queue_name: &str,
        payloads: &[Payload],
    ) -> Result<(), SqsError> {
        let Some(client) = &self.client else {
            debug!("SQS disabled; dropping {} messages for {queue_name}", payloads.len());
            return Ok(());
        };

        let queue_url = self.url_for_queue(queue_name);
        for payload in payloads {
            let message_body = codec::encode(payload)?;
            client
                .send_message()
                .queue_url(&queue_url)
                .message_body(message_body)
                .send()
                .await
                .map_err(|e| {
                    SqsError::TransportError(format!("Failed to send message to {queue_url}: {e}"))
                })?;
        }
        info!(queue = %queue_url, count = payloads.len(), "Sent messages to SQS");
        Ok(())
    }

    /// Push a redelivered message's visibility window out linearly with its
    /// receive count, so hot-looping messages back off.
    ///
    /// # Errors
    ///
    /// Returns `SqsError::TransportError` if the visibility call fails.
    pub async fn set_visibility_timeout_with_backoff(
        &self,
        message: &SqsMessage,
    ) -> Result<(), SqsError> {
        let Some(client) = &self.client else {
            debug!("SQS disabled; leaving visibility timeout unchanged");
            return Ok(());
        };

        let timeout = backoff_visibility_timeout(message.attributes.approximate_receive_count);
        client
            .change_message_visibility()
            .queue_url(&message.event_source_url)
            .receipt_handle(&message.receipt_handle)
            .visibility_timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                SqsError::TransportError(format!("Failed to change message visibility: {e}"))
            })?;
        info!(message_id = %message.message_id, timeout, "Extended visibility timeout");
        Ok(())
    }
}

/// Visibility backoff: ten seconds per delivery attempt, capped at ten
/// minutes.
#[must_use]
pub fn backoff_visibility_timeout(approximate_receive_count: u32) -> i32 {
    approximate_receive_count.saturating_mul(10).min(600) as i32
}
