use std::cmp::Ordering;

use crate::div_rem::SuccessiveDivRem;
use crate::instant::{Instant, InstantOutOfRange};
use crate::unit::Unit;

/// The span between two instants, broken down into fixed-length units.
///
/// All derived values are computed once at construction. Two kinds of values
/// are exposed:
///
/// * totals (`seconds()`, `hours()`, ...) express the whole span in a single
///   unit, as a fraction;
/// * trailing values (`trailing_seconds()`, ...) are what remains for a unit
///   after every larger unit has been taken out, largest first: years, months,
///   days, hours, minutes, seconds and finally milliseconds.
///
/// Weeks only exist as a total. They are not a decomposition bucket, so
/// `trailing_weeks()` is always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Duration {
    date_lower: Instant,
    date_higher: Instant,

    milliseconds: u64,
    seconds: f64,
    minutes: f64,
    hours: f64,
    days: f64,
    weeks: f64,
    months: f64,
    years: f64,

    trailing_years: u64,
    trailing_months: u64,
    trailing_days: u64,
    trailing_hours: u64,
    trailing_minutes: u64,
    trailing_seconds: u64,
    trailing_milliseconds: u64,
}

impl Duration {
    /// Span between `a` and `b`, in either order.
    pub fn new(a: Instant, b: Instant) -> Self {
        let (date_lower, date_higher) = if a > b { (b, a) } else { (a, b) };
        let milliseconds = date_higher - date_lower;
        let total = |unit: Unit| milliseconds as f64 / unit.millis() as f64;

        let (
            [trailing_years, trailing_months, trailing_days, trailing_hours, trailing_minutes, trailing_seconds],
            trailing_milliseconds,
        ) = milliseconds.successive_div_rem([
            Unit::Year.millis(),
            Unit::Month.millis(),
            Unit::Day.millis(),
            Unit::Hour.millis(),
            Unit::Minute.millis(),
            Unit::Second.millis(),
        ]);

        Duration {
            date_lower,
            date_higher,
            milliseconds,
            seconds: total(Unit::Second),
            minutes: total(Unit::Minute),
            hours: total(Unit::Hour),
            days: total(Unit::Day),
            weeks: total(Unit::Week),
            months: total(Unit::Month),
            years: total(Unit::Year),
            trailing_years,
            trailing_months,
            trailing_days,
            trailing_hours,
            trailing_minutes,
            trailing_seconds,
            trailing_milliseconds,
        }
    }

    /// Span from `since` until the current system time.
    pub fn since(since: Instant) -> Result<Self, InstantOutOfRange> {
        Ok(Duration::new(since, Instant::now()?))
    }

    /// Span from the epoch to `milliseconds` after it. A negative count gives
    /// the same span as its absolute value, only anchored before the epoch.
    pub fn from_millis(milliseconds: i64) -> Self {
        Duration::new(
            Instant::epoch(),
            Instant::from_millis_since_epoch(milliseconds),
        )
    }

    pub fn date_lower(&self) -> Instant {
        self.date_lower
    }

    pub fn date_higher(&self) -> Instant {
        self.date_higher
    }

    /// Length of the span in milliseconds. This is the numeric value of a
    /// duration, used for comparisons between spans.
    pub fn value_of(&self) -> u64 {
        self.milliseconds
    }

    /// Compares the lengths of two spans, regardless of where they lie in time.
    pub fn cmp_length(&self, other: &Duration) -> Ordering {
        self.milliseconds.cmp(&other.milliseconds)
    }

    pub fn milliseconds(&self) -> u64 {
        self.milliseconds
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn days(&self) -> f64 {
        self.days
    }

    pub fn weeks(&self) -> f64 {
        self.weeks
    }

    pub fn months(&self) -> f64 {
        self.months
    }

    pub fn years(&self) -> f64 {
        self.years
    }

    pub fn trailing_years(&self) -> u64 {
        self.trailing_years
    }

    pub fn trailing_months(&self) -> u64 {
        self.trailing_months
    }

    pub fn trailing_weeks(&self) -> u64 {
        0
    }

    pub fn trailing_days(&self) -> u64 {
        self.trailing_days
    }

    pub fn trailing_hours(&self) -> u64 {
        self.trailing_hours
    }

    pub fn trailing_minutes(&self) -> u64 {
        self.trailing_minutes
    }

    pub fn trailing_seconds(&self) -> u64 {
        self.trailing_seconds
    }

    pub fn trailing_milliseconds(&self) -> u64 {
        self.trailing_milliseconds
    }

    /// The whole span expressed in `unit`.
    pub fn total(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Millisecond => self.milliseconds as f64,
            Unit::Second => self.seconds,
            Unit::Minute => self.minutes,
            Unit::Hour => self.hours,
            Unit::Day => self.days,
            Unit::Week => self.weeks,
            Unit::Month => self.months,
            Unit::Year => self.years,
        }
    }

    /// The decomposed value for `unit`.
    pub fn trailing(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Millisecond => self.trailing_milliseconds,
            Unit::Second => self.trailing_seconds,
            Unit::Minute => self.trailing_minutes,
            Unit::Hour => self.trailing_hours,
            Unit::Day => self.trailing_days,
            Unit::Week => self.trailing_weeks(),
            Unit::Month => self.trailing_months,
            Unit::Year => self.trailing_years,
        }
    }
}

impl From<&Duration> for u64 {
    fn from(value: &Duration) -> Self {
        value.value_of()
    }
}

impl From<&Duration> for std::time::Duration {
    fn from(value: &Duration) -> Self {
        std::time::Duration::from_millis(value.milliseconds)
    }
}
