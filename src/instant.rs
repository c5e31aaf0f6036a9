use std::ops::Sub;
use std::time::SystemTime;

use log::debug;
use thiserror::Error;

use crate::gregorian::{days_in_month, days_since_epoch};
use crate::unit::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};

/// A point in time, counted in milliseconds since the Unix epoch.
///
/// Like Unix time, every day is exactly 86,400 seconds long; leap seconds and
/// time zones are not modelled.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Instant {
    millis: i64,
}

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
#[error("instant is out of range")]
pub struct InstantOutOfRange;

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum InvalidDateTime {
    #[error("month {0} is not in range 1-12")]
    Month(u8),
    #[error("day {day} does not exist in month {month} of year {year}")]
    Day { year: i32, month: u8, day: u8 },
    #[error("time of day {hour:02}:{minute:02}:{second:02}.{millisecond:03} is invalid")]
    TimeOfDay {
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    },
    #[error("year {0} is outside the range of representable instants")]
    YearOutOfRange(i32),
}

impl Instant {
    pub const fn from_millis_since_epoch(millis: i64) -> Self {
        Instant { millis }
    }

    pub const fn epoch() -> Self {
        Instant::from_millis_since_epoch(0)
    }

    pub fn now() -> Result<Self, InstantOutOfRange> {
        SystemTime::now().try_into()
    }

    /// Midnight UTC at the start of the given proleptic Gregorian date.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, InvalidDateTime> {
        Instant::from_utc(year, month, day, 0, 0, 0, 0)
    }

    pub fn from_utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self, InvalidDateTime> {
        if !(1..=12).contains(&month) {
            return Err(InvalidDateTime::Month(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(InvalidDateTime::Day { year, month, day });
        }
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return Err(InvalidDateTime::TimeOfDay {
                hour,
                minute,
                second,
                millisecond,
            });
        }

        // Every day is exactly 86,400 seconds, as in Unix time.
        let time_of_day = hour as i64 * MILLIS_PER_HOUR as i64
            + minute as i64 * MILLIS_PER_MINUTE as i64
            + second as i64 * MILLIS_PER_SECOND as i64
            + millisecond as i64;
        let millis = days_since_epoch(year, month, day)
            .checked_mul(MILLIS_PER_DAY as i64)
            .and_then(|millis| millis.checked_add(time_of_day))
            .ok_or(InvalidDateTime::YearOutOfRange(year))?;
        Ok(Instant::from_millis_since_epoch(millis))
    }

    pub fn millis_since_epoch(&self) -> i64 {
        self.millis
    }
}

impl Sub for Instant {
    /// Unsigned distance between the two instants in milliseconds.
    type Output = u64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.millis.abs_diff(rhs.millis)
    }
}

impl TryFrom<SystemTime> for Instant {
    type Error = InstantOutOfRange;

    fn try_from(value: SystemTime) -> Result<Self, Self::Error> {
        let before_epoch = value < SystemTime::UNIX_EPOCH;
        let elapsed = if before_epoch {
            SystemTime::UNIX_EPOCH.duration_since(value)
        } else {
            value.duration_since(SystemTime::UNIX_EPOCH)
        }
        .map_err(|_| InstantOutOfRange)?;

        let millis = i64::try_from(elapsed.as_millis()).map_err(|_| {
            debug!("system time {:?} does not fit in i64 milliseconds", value);
            InstantOutOfRange
        })?;
        Ok(Instant::from_millis_since_epoch(if before_epoch {
            -millis
        } else {
            millis
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_dates() {
        assert_eq!(Instant::from_ymd(1970, 1, 1), Ok(Instant::epoch()));
        assert_eq!(
            Instant::from_ymd(2020, 1, 1).unwrap().millis_since_epoch(),
            1_577_836_800_000
        );
        assert_eq!(
            Instant::from_utc(2022, 5, 20, 21, 5, 46, 183)
                .unwrap()
                .millis_since_epoch(),
            1_653_080_746_183
        );
        assert_eq!(
            Instant::from_utc(1969, 12, 31, 23, 59, 59, 999)
                .unwrap()
                .millis_since_epoch(),
            -1
        );
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert_eq!(Instant::from_ymd(2021, 13, 1), Err(InvalidDateTime::Month(13)));
        assert_eq!(Instant::from_ymd(2021, 0, 1), Err(InvalidDateTime::Month(0)));
        assert_eq!(
            Instant::from_ymd(2021, 2, 29),
            Err(InvalidDateTime::Day {
                year: 2021,
                month: 2,
                day: 29
            })
        );
        assert!(Instant::from_ymd(2024, 2, 29).is_ok());
        assert!(Instant::from_ymd(2021, 4, 0).is_err());
        assert!(Instant::from_utc(2021, 4, 1, 24, 0, 0, 0).is_err());
        assert!(Instant::from_utc(2021, 4, 1, 0, 0, 0, 1000).is_err());
    }

    #[test]
    fn years_beyond_millisecond_range_are_rejected() {
        assert_eq!(
            Instant::from_ymd(i32::MAX, 1, 1),
            Err(InvalidDateTime::YearOutOfRange(i32::MAX))
        );
        assert_eq!(
            Instant::from_ymd(i32::MIN, 1, 1),
            Err(InvalidDateTime::YearOutOfRange(i32::MIN))
        );
        assert_eq!(
            Instant::from_utc(300_000_000, 12, 31, 23, 59, 59, 999),
            Err(InvalidDateTime::YearOutOfRange(300_000_000))
        );

        // The last representable years still work.
        let far = Instant::from_ymd(292_000_000, 1, 1).unwrap();
        assert!(far.millis_since_epoch() > 0);
        let early = Instant::from_ymd(-292_000_000, 1, 1).unwrap();
        assert!(early.millis_since_epoch() < 0);
    }

    #[test]
    fn subtraction_is_unsigned_distance() {
        let a = Instant::from_millis_since_epoch(-500);
        let b = Instant::from_millis_since_epoch(1500);
        assert_eq!(b - a, 2000);
        assert_eq!(a - b, 2000);
    }

    #[test]
    fn system_time_conversion() {
        let t1 = Instant::now().unwrap();
        let t2 = Instant::now().unwrap();
        assert!(t1 <= t2);

        let before = SystemTime::UNIX_EPOCH - std::time::Duration::from_millis(1500);
        assert_eq!(
            Instant::try_from(before),
            Ok(Instant::from_millis_since_epoch(-1500))
        );
    }
}
