//! This crate provides [`TimeSpan`], an immutable signed time interval with
//! millisecond precision. Unlike `core::time::Duration` it may be negative,
//! and unlike a raw integer every value is range checked on construction so
//! that it can always be converted to an `f64` without loss.
//!
//! ```
//! use timespan::TimeSpan;
//!
//! let span = TimeSpan::from_components(1.0, 2.0, 3.0, 4.0, 5.0).unwrap();
//! assert_eq!(span.to_string(), "01:02:03:04.005");
//!
//! let doubled = span.checked_mul(2.0).unwrap();
//! assert_eq!(doubled.days(), 2);
//! assert_eq!(doubled.hours(), 4);
//! ```
//!
//! Every operation that can produce a value outside of
//! [`TimeSpan::MIN`]`..=`[`TimeSpan::MAX`] returns an [`Error`] instead of
//! wrapping or saturating.

mod convert;
mod error;
mod timespan;

pub use crate::timespan::TimeSpan;
pub use error::Error;

/// Number of milliseconds in one second.
pub const MILLISECONDS_PER_SECOND: i64 = 1_000;
/// Number of milliseconds in one minute.
pub const MILLISECONDS_PER_MINUTE: i64 = 60 * MILLISECONDS_PER_SECOND;
/// Number of milliseconds in one hour.
pub const MILLISECONDS_PER_HOUR: i64 = 60 * MILLISECONDS_PER_MINUTE;
/// Number of milliseconds in one day.
pub const MILLISECONDS_PER_DAY: i64 = 24 * MILLISECONDS_PER_HOUR;

/// The largest millisecond total a `TimeSpan` can hold, `2^53 - 1`. This is
/// the largest integer for which every smaller magnitude is exactly
/// representable as an `f64`.
pub const MAX_MILLISECONDS: i64 = (1 << 53) - 1;
/// The smallest millisecond total a `TimeSpan` can hold, `-(2^53 - 1)`.
pub const MIN_MILLISECONDS: i64 = -MAX_MILLISECONDS;
