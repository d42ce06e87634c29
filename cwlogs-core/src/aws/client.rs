use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudwatchlogs::Client;

/// Build a CloudWatch Logs client, optionally overriding the region.
///
/// Without an override the SDK's default chain applies
/// (`AWS_REGION`, profile files, IMDS). Credentials always come from the
/// default provider chain.
pub async fn make_client(region: Option<&str>) -> Client {
    let region_provider = match region {
        Some(explicit) => {
            RegionProviderChain::first_try(Region::new(explicit.to_string())).or_default_provider()
        }
        None => RegionProviderChain::default_provider(),
    };

    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    tracing::debug!(region = ?config.region(), "cloudwatch logs client configured");

    Client::new(&config)
}
