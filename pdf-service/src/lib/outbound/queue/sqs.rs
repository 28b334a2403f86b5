use async_trait::async_trait;
use auth::UserClaims;
use aws_sdk_sqs::Client;

use crate::config::AwsConfig;
use crate::document::errors::QueueError;
use crate::document::ports::TaskQueue;
use crate::outbound::load_aws_config;

/// A message pulled from the queue, paired with the handle needed to
/// acknowledge it.
#[derive(Debug, Clone)]
pub struct QueuedMessage {
    pub body: String,
    pub receipt_handle: String,
}

/// SQS-backed render task queue.
///
/// Tasks are the claim payload serialized as JSON; the worker consumes
/// them with long polling and deletes each message only after the
/// rendered document is safely stored.
#[derive(Debug, Clone)]
pub struct SqsTaskQueue {
    client: Client,
    queue_url: String,
}

impl SqsTaskQueue {
    /// Connect to SQS and resolve the queue URL, creating the queue if it
    /// does not exist yet (a convenience for local development endpoints).
    ///
    /// # Errors
    /// * `ConnectionFailed` - The queue could not be created or resolved
    pub async fn connect(config: &AwsConfig) -> Result<Self, QueueError> {
        let sdk_config = load_aws_config(config).await;
        let client = Client::new(&sdk_config);

        // Idempotent with identical attributes; cheap way to guarantee the
        // queue exists before the first send
        client
            .create_queue()
            .queue_name(&config.queue_name)
            .send()
            .await
            .map_err(|e| QueueError::ConnectionFailed(e.to_string()))?;

        let queue_url = client
            .get_queue_url()
            .queue_name(&config.queue_name)
            .send()
            .await
            .map_err(|e| QueueError::ConnectionFailed(e.to_string()))?
            .queue_url
            .ok_or_else(|| {
                QueueError::ConnectionFailed("Queue URL missing from response".to_string())
            })?;

        tracing::info!(queue_url = %queue_url, "Connected to task queue");

        Ok(Self { client, queue_url })
    }

    /// Receive at most one message, long-polling for up to ten seconds.
    ///
    /// # Errors
    /// * `ReceiveFailed` - The receive call itself failed
    pub async fn poll(&self) -> Result<Vec<QueuedMessage>, QueueError> {
        let output = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(1)
            .wait_time_seconds(10)
            .send()
            .await
            .map_err(|e| QueueError::ReceiveFailed(e.to_string()))?;

        let messages = output
            .messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| match (m.body, m.receipt_handle) {
                (Some(body), Some(receipt_handle)) => Some(QueuedMessage {
                    body,
                    receipt_handle,
                }),
                _ => None,
            })
            .collect();

        Ok(messages)
    }

    /// Delete a processed message from the queue.
    ///
    /// # Errors
    /// * `ReceiveFailed` - The delete call failed; the message will be
    ///   redelivered after its visibility timeout
    pub async fn acknowledge(&self, receipt_handle: &str) -> Result<(), QueueError> {
        self.client
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|e| QueueError::ReceiveFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl TaskQueue for SqsTaskQueue {
    async fn enqueue_render(&self, claims: &UserClaims) -> Result<(), QueueError> {
        let body = serde_json::to_string(claims)
            .map_err(|e| QueueError::SerializationFailed(e.to_string()))?;

        self.client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| QueueError::SendFailed(e.to_string()))?;

        Ok(())
    }
}
