pub mod queue;
pub mod storage;

use crate::config::AwsConfig;

/// Shared AWS SDK configuration for the SQS and S3 clients.
///
/// An explicit endpoint (Localstack-style development) overrides the
/// resolver; otherwise the default chain applies.
pub async fn load_aws_config(config: &AwsConfig) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(ref endpoint) = config.endpoint_url {
        builder = builder.endpoint_url(endpoint);
    }

    builder.load().await
}
