//! Relative time windows.
//!
//! Operators pick windows like `15m`, `3h` or `2w`, the same buttons the
//! CloudWatch console offers. A window resolves to an absolute
//! `[start, end]` range in epoch milliseconds, anchored at a single sample
//! of the wall clock.

mod error;
mod range;
mod relative;
#[cfg(test)]
mod tests;

pub use error::WindowError;
pub use range::TimeRange;
pub use relative::{DEFAULT_WINDOW, PRESET_WINDOWS, RelativeWindow, WindowUnit, window_to_seconds};
