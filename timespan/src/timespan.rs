use crate::{
    Error, MAX_MILLISECONDS, MILLISECONDS_PER_DAY, MILLISECONDS_PER_HOUR, MILLISECONDS_PER_MINUTE,
    MILLISECONDS_PER_SECOND, MIN_MILLISECONDS,
};
use core::cmp::Ordering;
use core::fmt::{self, Display};
use core::ops::Neg;
use log::trace;
use std::time::SystemTime;
use time::OffsetDateTime;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A signed span of time stored as a whole number of milliseconds.
///
/// The millisecond total is always within `MIN_MILLISECONDS..=MAX_MILLISECONDS`.
/// Values are immutable; every arithmetic operation returns a new `TimeSpan`.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(try_from = "i64", into = "i64"))]
pub struct TimeSpan {
    ms: i64,
}

impl TimeSpan {
    /// A zero length span.
    pub const ZERO: TimeSpan = TimeSpan { ms: 0 };

    /// The shortest (most negative) representable span.
    pub const MIN: TimeSpan = TimeSpan {
        ms: MIN_MILLISECONDS,
    };

    /// The longest representable span.
    pub const MAX: TimeSpan = TimeSpan {
        ms: MAX_MILLISECONDS,
    };

    pub const MILLISECONDS_PER_SECOND: i64 = MILLISECONDS_PER_SECOND;
    pub const MILLISECONDS_PER_MINUTE: i64 = MILLISECONDS_PER_MINUTE;
    pub const MILLISECONDS_PER_HOUR: i64 = MILLISECONDS_PER_HOUR;
    pub const MILLISECONDS_PER_DAY: i64 = MILLISECONDS_PER_DAY;

    /// Create a span from a whole number of milliseconds.
    pub fn from_millis(millis: i64) -> Result<Self, Error> {
        if !(MIN_MILLISECONDS..=MAX_MILLISECONDS).contains(&millis) {
            trace!("millisecond total out of range: {millis}");
            return Err(Error::OutOfRange);
        }

        Ok(Self { ms: millis })
    }

    /// Create a span from a possibly fractional number of milliseconds,
    /// rounded to the nearest millisecond.
    pub fn from_milliseconds(milliseconds: f64) -> Result<Self, Error> {
        Self::from_components(0.0, 0.0, 0.0, 0.0, milliseconds)
    }

    /// Create a span from a number of seconds, accurate to the nearest
    /// millisecond.
    pub fn from_seconds(seconds: f64) -> Result<Self, Error> {
        Self::from_components(0.0, 0.0, 0.0, seconds, 0.0)
    }

    /// Create a span from a number of minutes, accurate to the nearest
    /// millisecond.
    pub fn from_minutes(minutes: f64) -> Result<Self, Error> {
        Self::from_components(0.0, 0.0, minutes, 0.0, 0.0)
    }

    /// Create a span from a number of hours, accurate to the nearest
    /// millisecond.
    pub fn from_hours(hours: f64) -> Result<Self, Error> {
        Self::from_components(0.0, hours, 0.0, 0.0, 0.0)
    }

    /// Create a span from a number of days, accurate to the nearest
    /// millisecond.
    pub fn from_days(days: f64) -> Result<Self, Error> {
        Self::from_components(days, 0.0, 0.0, 0.0, 0.0)
    }

    /// Create a span from a number of days, hours, minutes, seconds, and
    /// milliseconds. Each unit is converted to milliseconds independently and
    /// the sum is rounded to the nearest millisecond.
    ///
    /// None of the units need to be within their natural range, for example
    /// `from_components(0.0, 25.0, 0.0, 0.0, 0.0)` is one day and one hour.
    /// Units may also be negative or fractional.
    pub fn from_components(
        days: f64,
        hours: f64,
        minutes: f64,
        seconds: f64,
        milliseconds: f64,
    ) -> Result<Self, Error> {
        let total = days * MILLISECONDS_PER_DAY as f64
            + hours * MILLISECONDS_PER_HOUR as f64
            + minutes * MILLISECONDS_PER_MINUTE as f64
            + seconds * MILLISECONDS_PER_SECOND as f64
            + milliseconds;

        Self::from_f64(total)
    }

    /// Create a span from the time elapsed between `start` and `end`. The
    /// result is negative if `start` occurs after `end`. Any sub-millisecond
    /// remainder is truncated.
    pub fn from_instant_difference(
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Self, Error> {
        Self::try_from(end - start)
    }

    /// Like [`TimeSpan::from_instant_difference`] but for `SystemTime`s.
    pub fn from_system_time_difference(start: SystemTime, end: SystemTime) -> Result<Self, Error> {
        match end.duration_since(start) {
            Ok(elapsed) => Self::try_from(elapsed),
            Err(e) => Self::try_from(e.duration()).map(|span| span.negate()),
        }
    }

    // Funnel for every floating point construction path.
    fn from_f64(total: f64) -> Result<Self, Error> {
        if total.is_nan() {
            trace!("millisecond total is not a number");
            return Err(Error::InvalidValue);
        }

        let total = total.round();

        if total < MIN_MILLISECONDS as f64 || total > MAX_MILLISECONDS as f64 {
            trace!("millisecond total out of range: {total}");
            return Err(Error::OutOfRange);
        }

        // `-0.0 as i64` is `0`, so negative zero never reaches the field
        Ok(Self { ms: total as i64 })
    }

    /// The whole number of milliseconds in this span.
    pub fn total_milliseconds(&self) -> i64 {
        self.ms
    }

    /// The span expressed in whole and fractional seconds.
    pub fn total_seconds(&self) -> f64 {
        self.ms as f64 / MILLISECONDS_PER_SECOND as f64
    }

    /// The span expressed in whole and fractional minutes.
    pub fn total_minutes(&self) -> f64 {
        self.ms as f64 / MILLISECONDS_PER_MINUTE as f64
    }

    /// The span expressed in whole and fractional hours.
    pub fn total_hours(&self) -> f64 {
        self.ms as f64 / MILLISECONDS_PER_HOUR as f64
    }

    /// The span expressed in whole and fractional days.
    pub fn total_days(&self) -> f64 {
        self.ms as f64 / MILLISECONDS_PER_DAY as f64
    }

    // The component accessors truncate toward zero, so each component carries
    // the same sign as the whole span (or is zero).

    /// The milliseconds component, in `-999..=999`.
    pub fn milliseconds(&self) -> i64 {
        self.ms % MILLISECONDS_PER_SECOND
    }

    /// The seconds component, in `-59..=59`.
    pub fn seconds(&self) -> i64 {
        (self.ms / MILLISECONDS_PER_SECOND) % 60
    }

    /// The minutes component, in `-59..=59`.
    pub fn minutes(&self) -> i64 {
        (self.ms / MILLISECONDS_PER_MINUTE) % 60
    }

    /// The hours component, in `-23..=23`.
    pub fn hours(&self) -> i64 {
        (self.ms / MILLISECONDS_PER_HOUR) % 24
    }

    /// The number of whole days.
    pub fn days(&self) -> i64 {
        self.ms / MILLISECONDS_PER_DAY
    }

    /// Compares two spans, returning `-1` if `t1` is shorter than `t2`, `0` if
    /// they are equal, and `1` if `t1` is longer than `t2`.
    pub fn compare(t1: &TimeSpan, t2: &TimeSpan) -> i32 {
        match t1.cmp(t2) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Compares this span to `other`. See [`TimeSpan::compare`].
    pub fn compare_to(&self, other: &TimeSpan) -> i32 {
        Self::compare(self, other)
    }

    pub fn is_zero(&self) -> bool {
        self.ms == 0
    }

    pub fn is_negative(&self) -> bool {
        self.ms < 0
    }

    pub fn is_positive(&self) -> bool {
        self.ms > 0
    }

    /// Returns `-1`, `0`, or `1` matching the sign of this span.
    pub fn signum(&self) -> i64 {
        self.ms.signum()
    }

    /// Returns the sum of this span and `rhs`.
    pub fn checked_add(&self, rhs: TimeSpan) -> Result<Self, Error> {
        // both operands are within 2^53, so this cannot overflow an i64
        Self::from_millis(self.ms + rhs.ms)
    }

    /// Returns this span minus `rhs`.
    pub fn checked_sub(&self, rhs: TimeSpan) -> Result<Self, Error> {
        Self::from_millis(self.ms - rhs.ms)
    }

    /// Returns this span scaled by `factor`, rounded to the nearest
    /// millisecond.
    pub fn checked_mul(&self, factor: f64) -> Result<Self, Error> {
        Self::from_f64(self.ms as f64 * factor)
    }

    /// Returns this span divided by `divisor`, rounded to the nearest
    /// millisecond.
    ///
    /// Division by zero follows `f64` semantics before the range check: a
    /// non-zero span divided by zero is infinite and fails with
    /// [`Error::OutOfRange`], while zero divided by zero is NaN and fails with
    /// [`Error::InvalidValue`].
    pub fn checked_div(&self, divisor: f64) -> Result<Self, Error> {
        Self::from_f64(self.ms as f64 / divisor)
    }

    /// Returns the absolute value of this span. The representable range is
    /// symmetric so this cannot fail.
    pub fn abs(&self) -> Self {
        Self { ms: self.ms.abs() }
    }

    /// Returns a span of the same length with the opposite sign. The
    /// representable range is symmetric so this cannot fail.
    pub fn negate(&self) -> Self {
        Self { ms: -self.ms }
    }
}

impl Neg for TimeSpan {
    type Output = TimeSpan;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Formats the span as `[-][DD:][HH:][MM:][SS.]mmm`. Leading units are omitted
/// while they are zero, but once a unit is shown every smaller unit is shown.
/// A zero span formats as `000`.
impl Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }

        let days = self.days().unsigned_abs();
        let hours = self.hours().unsigned_abs();
        let minutes = self.minutes().unsigned_abs();
        let seconds = self.seconds().unsigned_abs();
        let milliseconds = self.milliseconds().unsigned_abs();

        let show_days = days != 0;
        let show_hours = show_days || hours != 0;
        let show_minutes = show_hours || minutes != 0;
        let show_seconds = show_minutes || seconds != 0;

        if show_days {
            write!(f, "{days:02}:")?;
        }
        if show_hours {
            write!(f, "{hours:02}:")?;
        }
        if show_minutes {
            write!(f, "{minutes:02}:")?;
        }
        if show_seconds {
            write!(f, "{seconds:02}.")?;
        }

        write!(f, "{milliseconds:03}")
    }
}
