use std::fmt;

use crate::duration::Duration;
use crate::unit::Unit;

/// Controls how [`Duration::to_string_with`] renders a span.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct StringOptions {
    /// Leave out units whose trailing value is zero.
    pub omit_empty: bool,
    /// Leave out the lowest units: only units ranked above the threshold are
    /// rendered, counting milliseconds as 1 up to years as 7. Zero keeps all
    /// units, 7 or more keeps none.
    pub threshold: u8,
}

impl StringOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn omit_empty(mut self, omit_empty: bool) -> Self {
        self.omit_empty = omit_empty;
        self
    }

    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    fn includes(&self, unit: Unit, value: u64) -> bool {
        let above_threshold = unit.rank().is_some_and(|rank| rank > self.threshold);
        above_threshold && !(self.omit_empty && value == 0)
    }
}

impl Duration {
    /// Renders the trailing values from years down to milliseconds, e.g.
    /// `"1y 1m 1d 1h 1min 1s 200ms"`, subject to `options`.
    pub fn to_string_with(&self, options: StringOptions) -> String {
        Unit::DECOMPOSITION
            .iter()
            .map(|unit| (*unit, self.trailing(*unit)))
            .filter(|(unit, value)| options.includes(*unit, *value))
            .map(|(unit, value)| format!("{}{}", value, unit))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The largest unit with a non-zero trailing value, together with that
    /// value. A zero-length span gives `(0, Unit::Millisecond)`.
    pub fn to_simple(&self) -> (u64, Unit) {
        const SCAN_ORDER: [Unit; 7] = [
            Unit::Year,
            Unit::Month,
            Unit::Week,
            Unit::Day,
            Unit::Hour,
            Unit::Minute,
            Unit::Second,
        ];
        SCAN_ORDER
            .iter()
            .map(|unit| (self.trailing(*unit), *unit))
            .find(|(value, _)| *value != 0)
            .unwrap_or((self.trailing_milliseconds(), Unit::Millisecond))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(StringOptions::default()))
    }
}
