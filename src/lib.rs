//! Elapsed spans between two instants, broken down into fixed-length units and
//! rendered as text.
//!
//! ```
//! use lapse::{Duration, Instant, StringOptions, Unit};
//!
//! let d = Duration::from_millis(34_218_061_200);
//! assert_eq!(d.to_string(), "1y 1m 1d 1h 1min 1s 200ms");
//! assert_eq!(d.to_simple(), (1, Unit::Year));
//! assert_eq!(
//!     d.to_string_with(StringOptions::new().threshold(3)),
//!     "1y 1m 1d 1h"
//! );
//! assert_eq!(d.formatted_string("{{D:2}} days"), "396.04 days");
//!
//! let year = Duration::new(
//!     Instant::from_ymd(2021, 1, 1).unwrap(),
//!     Instant::from_ymd(2022, 1, 1).unwrap(),
//! );
//! assert_eq!(year.days(), 365.0);
//! ```

pub use duration::Duration;
pub use format::StringOptions;
pub use instant::{Instant, InstantOutOfRange, InvalidDateTime};
pub use unit::Unit;

mod cursor;
mod div_rem;
mod duration;
mod format;
mod gregorian;
mod instant;
mod overlap;
mod slice_cursor;
pub mod template;
mod unit;
