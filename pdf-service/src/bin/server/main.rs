use std::sync::Arc;

use auth::JwtHandler;
use pdf_service::config::Config;
use pdf_service::document::renderer::ProfileRenderer;
use pdf_service::inbound::http::router::create_router;
use pdf_service::outbound::queue::SqsTaskQueue;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "pdf-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    let jwt_handler = Arc::new(JwtHandler::from_config(
        &config.jwt.secret,
        &config.jwt.algorithm,
        config.jwt.ttl_minutes,
    )?);
    // Fail the boot, not every request, on a broken signing config
    jwt_handler.self_check()?;
    tracing::info!(
        algorithm = ?jwt_handler.algorithm(),
        ttl_minutes = jwt_handler.ttl_minutes(),
        "Token codec ready"
    );

    let queue = Arc::new(SqsTaskQueue::connect(&config.aws).await?);
    let renderer = Arc::new(ProfileRenderer::new());

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(
        http_listener,
        create_router(renderer, queue, jwt_handler),
    )
    .await?;

    Ok(())
}
