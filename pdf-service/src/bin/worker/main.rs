use std::time::Duration;

use auth::UserClaims;
use pdf_service::config::Config;
use pdf_service::document::renderer::ProfileRenderer;
use pdf_service::outbound::queue::sqs::QueuedMessage;
use pdf_service::outbound::queue::SqsTaskQueue;
use pdf_service::outbound::storage::S3DocumentStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_worker=debug,pdf_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "pdf-worker",
        version = env!("CARGO_PKG_VERSION"),
        "Worker starting"
    );

    let config = Config::load()?;

    let queue = SqsTaskQueue::connect(&config.aws).await?;
    let store = S3DocumentStore::connect(&config.aws).await?;
    let renderer = ProfileRenderer::new();

    tracing::info!("Worker polling for render tasks");

    loop {
        let messages = match queue.poll().await {
            Ok(messages) => messages,
            Err(e) => {
                tracing::error!(error = %e, "Polling failed, backing off");
                tokio::time::sleep(Duration::from_secs(5)).await;
                continue;
            }
        };

        for message in messages {
            if let Err(e) = process_message(&message, &renderer, &store, &queue).await {
                // Leave the message in place: it becomes visible again after
                // its timeout and gets another attempt
                tracing::error!(error = %e, "Failed to process render task");
            }
        }
    }
}

async fn process_message(
    message: &QueuedMessage,
    renderer: &ProfileRenderer,
    store: &S3DocumentStore,
    queue: &SqsTaskQueue,
) -> Result<(), anyhow::Error> {
    let claims: UserClaims = serde_json::from_str(&message.body)?;

    tracing::info!(user_id = %claims.id, "Rendering profile document");

    let bytes = renderer.render(&claims)?;
    let key = format!("profile_{}.pdf", claims.id);
    store.put_pdf(&key, bytes).await?;

    // Acknowledge only after the document is durably stored
    queue.acknowledge(&message.receipt_handle).await?;

    tracing::info!(user_id = %claims.id, key = %key, "Render task completed");

    Ok(())
}
