use thiserror::Error;

/// Error type for PDF rendering.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("PDF rendering failed: {0}")]
    RenderFailed(String),
}

/// Error type for the render task queue.
#[derive(Debug, Clone, Error)]
pub enum QueueError {
    #[error("Failed to serialize task: {0}")]
    SerializationFailed(String),

    #[error("Failed to send task to queue: {0}")]
    SendFailed(String),

    #[error("Failed to receive from queue: {0}")]
    ReceiveFailed(String),

    #[error("Queue connection failed: {0}")]
    ConnectionFailed(String),
}

/// Error type for document storage.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to store document: {0}")]
    PutFailed(String),

    #[error("Storage connection failed: {0}")]
    ConnectionFailed(String),
}
