use async_trait::async_trait;
use auth::UserClaims;

use crate::document::errors::QueueError;

/// Port for handing a render job to the asynchronous pipeline.
///
/// The payload is the already-validated claim set; the worker on the other
/// end re-parses it into the same shared schema.
#[async_trait]
pub trait TaskQueue: Send + Sync + 'static {
    /// Enqueue an asynchronous render-and-upload job.
    ///
    /// # Arguments
    /// * `claims` - Trusted user claims from the token guard
    ///
    /// # Errors
    /// * `SerializationFailed` - Claims did not serialize
    /// * `SendFailed` - Queue rejected the message
    async fn enqueue_render(&self, claims: &UserClaims) -> Result<(), QueueError>;
}
