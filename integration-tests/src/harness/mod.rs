pub mod runbook;
pub mod tracing;

pub use runbook::{NOW, context, run_latest, run_window};
pub use tracing::{CapturedEvent, EventCapture, capture_events};
