use std::fmt;

/// Units a span can be expressed in. Months and years are fixed-length
/// approximations (30 and 365 days), not calendar-aware.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

pub(crate) const MILLIS_PER_SECOND: u64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub(crate) const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;
pub(crate) const MILLIS_PER_WEEK: u64 = 7 * MILLIS_PER_DAY;
pub(crate) const MILLIS_PER_MONTH: u64 = 30 * MILLIS_PER_DAY;
pub(crate) const MILLIS_PER_YEAR: u64 = 365 * MILLIS_PER_DAY;

impl Unit {
    /// Units a span is broken down into, largest first. The order matters: every
    /// trailing value is what is left after all units before it were taken out.
    pub const DECOMPOSITION: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];

    pub const fn millis(self) -> u64 {
        match self {
            Unit::Millisecond => 1,
            Unit::Second => MILLIS_PER_SECOND,
            Unit::Minute => MILLIS_PER_MINUTE,
            Unit::Hour => MILLIS_PER_HOUR,
            Unit::Day => MILLIS_PER_DAY,
            Unit::Week => MILLIS_PER_WEEK,
            Unit::Month => MILLIS_PER_MONTH,
            Unit::Year => MILLIS_PER_YEAR,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "min",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Month => "m",
            Unit::Year => "y",
        }
    }

    /// Position used by the string threshold, counting from milliseconds (1) up to
    /// years (7). Weeks are not part of the decomposition and have no rank.
    pub const fn rank(self) -> Option<u8> {
        match self {
            Unit::Millisecond => Some(1),
            Unit::Second => Some(2),
            Unit::Minute => Some(3),
            Unit::Hour => Some(4),
            Unit::Day => Some(5),
            Unit::Week => None,
            Unit::Month => Some(6),
            Unit::Year => Some(7),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
