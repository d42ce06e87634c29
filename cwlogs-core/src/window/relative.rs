use crate::window::{TimeRange, WindowError};
use chrono::Utc;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_WINDOW: &str = "5m";

/// Windows offered by the runbook, shortest first.
pub const PRESET_WINDOWS: &[&str] = &[
    "5m", "10m", "15m", "30m", "45m", //
    "1h", "2h", "3h", "6h", "8h", "12h", //
    "1d", "2d", "3d", "4d", "5d", "6d", //
    "1w", "2w", "3w", "4w",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowUnit {
    Minute,
    Hour,
    Day,
    Week,
}

impl WindowUnit {
    pub fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            'm' => Some(WindowUnit::Minute),
            'h' => Some(WindowUnit::Hour),
            'd' => Some(WindowUnit::Day),
            'w' => Some(WindowUnit::Week),
            _ => None,
        }
    }

    pub fn suffix(self) -> char {
        match self {
            WindowUnit::Minute => 'm',
            WindowUnit::Hour => 'h',
            WindowUnit::Day => 'd',
            WindowUnit::Week => 'w',
        }
    }

    pub fn seconds(self) -> u64 {
        match self {
            WindowUnit::Minute => 60,
            WindowUnit::Hour => 3_600,
            WindowUnit::Day => 86_400,
            WindowUnit::Week => 604_800,
        }
    }
}

/// "The last N units", e.g. `3h`.
///
/// Construction guarantees a non-zero magnitude and that the window in
/// milliseconds fits in an `i64`, so resolving never overflows for any
/// realistic clock value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativeWindow {
    magnitude: u64,
    unit: WindowUnit,
}

impl RelativeWindow {
    pub fn new(magnitude: u64, unit: WindowUnit) -> Result<Self, WindowError> {
        let token = format!("{magnitude}{}", unit.suffix());

        if magnitude == 0 {
            return Err(WindowError::Empty { token });
        }

        let fits = magnitude
            .checked_mul(unit.seconds())
            .and_then(|secs| secs.checked_mul(1_000))
            .is_some_and(|ms| i64::try_from(ms).is_ok());

        if !fits {
            return Err(WindowError::OutOfRange { token });
        }

        Ok(Self { magnitude, unit })
    }

    pub fn as_seconds(&self) -> u64 {
        self.magnitude * self.unit.seconds()
    }

    pub fn as_millis(&self) -> i64 {
        // bounded by the check in `new`
        (self.as_seconds() * 1_000) as i64
    }

    /// Resolve against an explicit `now`, in epoch milliseconds.
    pub fn resolve_at(&self, now_ms: i64) -> TimeRange {
        TimeRange::new(now_ms.saturating_sub(self.as_millis()), now_ms)
    }

    /// Resolve against the wall clock, sampled once.
    pub fn resolve(&self) -> TimeRange {
        self.resolve_at(Utc::now().timestamp_millis())
    }
}

impl Default for RelativeWindow {
    fn default() -> Self {
        Self {
            magnitude: 5,
            unit: WindowUnit::Minute,
        }
    }
}

impl fmt::Display for RelativeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.suffix())
    }
}

impl FromStr for RelativeWindow {
    type Err = WindowError;

    /// Accepts exactly `<digits><m|h|d|w>`. No whitespace, signs or
    /// upper-case units.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unsupported = || WindowError::Unsupported {
            token: token.to_string(),
        };

        let mut chars = token.chars();
        let suffix = chars.next_back().ok_or_else(unsupported)?;
        let digits = chars.as_str();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unsupported());
        }

        let unit = WindowUnit::from_suffix(suffix).ok_or_else(unsupported)?;

        // Only overflow can fail here; every byte is an ASCII digit.
        let magnitude = digits.parse::<u64>().map_err(|_| WindowError::OutOfRange {
            token: token.to_string(),
        })?;

        Self::new(magnitude, unit).map_err(|err| match err {
            WindowError::Empty { .. } => WindowError::Empty {
                token: token.to_string(),
            },
            _ => WindowError::OutOfRange {
                token: token.to_string(),
            },
        })
    }
}

/// Convert a window token like `15m`, `3h` or `2w` into seconds.
pub fn window_to_seconds(token: &str) -> Result<u64, WindowError> {
    Ok(token.parse::<RelativeWindow>()?.as_seconds())
}
