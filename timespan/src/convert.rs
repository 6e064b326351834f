//! Conversions between `TimeSpan` and the integer, `core::time` and `time`
//! representations of a duration.

use crate::{Error, TimeSpan, MAX_MILLISECONDS};

impl TryFrom<i64> for TimeSpan {
    type Error = Error;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        TimeSpan::from_millis(millis)
    }
}

impl From<TimeSpan> for i64 {
    fn from(span: TimeSpan) -> Self {
        span.total_milliseconds()
    }
}

/// Truncates to whole milliseconds.
impl TryFrom<core::time::Duration> for TimeSpan {
    type Error = Error;

    fn try_from(duration: core::time::Duration) -> Result<Self, Self::Error> {
        let millis = duration.as_millis();
        if millis > MAX_MILLISECONDS as u128 {
            return Err(Error::OutOfRange);
        }

        TimeSpan::from_millis(millis as i64)
    }
}

/// Fails with [`Error::OutOfRange`] for negative spans.
impl TryFrom<TimeSpan> for core::time::Duration {
    type Error = Error;

    fn try_from(span: TimeSpan) -> Result<Self, Self::Error> {
        let millis = span.total_milliseconds();
        if millis < 0 {
            return Err(Error::OutOfRange);
        }

        Ok(core::time::Duration::from_millis(millis as u64))
    }
}

/// Truncates toward zero to whole milliseconds.
impl TryFrom<time::Duration> for TimeSpan {
    type Error = Error;

    fn try_from(duration: time::Duration) -> Result<Self, Self::Error> {
        let millis = i64::try_from(duration.whole_milliseconds()).map_err(|_| Error::OutOfRange)?;

        TimeSpan::from_millis(millis)
    }
}

impl From<TimeSpan> for time::Duration {
    fn from(span: TimeSpan) -> Self {
        time::Duration::milliseconds(span.total_milliseconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MIN_MILLISECONDS;

    #[test]
    fn integer() {
        assert_eq!(TimeSpan::try_from(5_i64).map(i64::from), Ok(5));
        assert_eq!(
            TimeSpan::try_from(MAX_MILLISECONDS + 1),
            Err(Error::OutOfRange)
        );
        assert_eq!(i64::from(TimeSpan::MIN), MIN_MILLISECONDS);
    }

    #[test]
    fn core_duration() {
        let span = TimeSpan::try_from(core::time::Duration::from_micros(1_500_999)).unwrap();
        assert_eq!(span.total_milliseconds(), 1_500);

        assert_eq!(
            core::time::Duration::try_from(span),
            Ok(core::time::Duration::from_millis(1_500))
        );
        assert_eq!(
            core::time::Duration::try_from(span.negate()),
            Err(Error::OutOfRange)
        );
        assert_eq!(
            TimeSpan::try_from(core::time::Duration::from_secs(u64::MAX)),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn time_duration() {
        let span = TimeSpan::try_from(time::Duration::microseconds(-2_999)).unwrap();
        assert_eq!(span.total_milliseconds(), -2);

        assert_eq!(
            time::Duration::from(TimeSpan::from_seconds(90.0).unwrap()),
            time::Duration::seconds(90)
        );
        assert_eq!(
            TimeSpan::try_from(time::Duration::MAX),
            Err(Error::OutOfRange)
        );
        assert_eq!(
            TimeSpan::try_from(time::Duration::milliseconds(MIN_MILLISECONDS)),
            Ok(TimeSpan::MIN)
        );
    }
}
