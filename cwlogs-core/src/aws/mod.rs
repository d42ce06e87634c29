//! CloudWatch Logs backed by the AWS SDK.

mod client;
mod cloudwatch;

pub use client::make_client;
pub use cloudwatch::CloudWatchLogs;
