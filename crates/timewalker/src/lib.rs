//! Calendar-aware, timezone-correct arithmetic over civil dates.
//!
//! - `calendar`: `CalendarUnit` rounding and addition, `Interval` normalization
//!   and the `Walk` sequences built on them
//! - `walker`: a zone and unit pair loaded from configuration
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use timewalker::{CalendarUnit, Interval};
//!
//! let start = Utc.with_ymd_and_hms(2004, 2, 26, 12, 45, 56).unwrap();
//! let end = Utc.with_ymd_and_hms(2004, 3, 3, 12, 45, 56).unwrap();
//!
//! let days: Vec<_> = Interval::new(start, end)
//!     .walk(CalendarUnit::Day)
//!     .unwrap()
//!     .collect();
//!
//! // 2004 is a leap year: Feb 26 through Mar 3 inclusive
//! assert_eq!(days.len(), 7);
//! ```

pub mod calendar;
pub mod error;
pub mod walker;

pub use calendar::{CalendarUnit, FixedWalk, Interval, Walk};
pub use error::{WalkError, WalkResult};
pub use walker::Walker;
