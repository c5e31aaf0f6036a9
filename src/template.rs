//! Template rendering for [`Duration::formatted_string`].
//!
//! A template is free text with placeholders in double braces:
//!
//! * `{{ms}}`, `{{s}}`, `{{min}}`, `{{h}}`, `{{d}}`, `{{m}}`, `{{y}}` are replaced by
//!   the trailing value of that unit;
//! * `{{MS}}`, `{{S}}`, `{{MIN}}`, `{{H}}`, `{{D}}`, `{{W}}`, `{{M}}`, `{{Y}}` are
//!   replaced by the total span in that unit, rounded to whole units. A precision
//!   suffix such as `{{H:4}}` rounds to that many decimal places instead.
//!   `{{MS}}` is always the exact integer count.
//!
//! Anything that is not a placeholder, including unknown names and malformed
//! braces, is copied to the output unchanged.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::trace;
use num_traits::Float;

use crate::cursor::Cursor;
use crate::duration::Duration;
use crate::slice_cursor::SliceCursor;
use crate::unit::Unit;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Field {
    Trailing(Unit),
    Total(Unit),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Placeholder {
    Trailing(Unit),
    /// `precision` is `None` when the requested number of decimals could not be
    /// represented; the total is then printed unrounded.
    Total { unit: Unit, precision: Option<u32> },
}

lazy_static! {
    static ref FIELDS: HashMap<&'static str, Field> = {
        let mut fields = HashMap::new();
        for unit in Unit::DECOMPOSITION {
            fields.insert(unit.label(), Field::Trailing(unit));
        }
        for (name, unit) in [
            ("MS", Unit::Millisecond),
            ("S", Unit::Second),
            ("MIN", Unit::Minute),
            ("H", Unit::Hour),
            ("D", Unit::Day),
            ("W", Unit::Week),
            ("M", Unit::Month),
            ("Y", Unit::Year),
        ] {
            fields.insert(name, Field::Total(unit));
        }
        fields
    };
}

impl Duration {
    /// Substitutes every placeholder in `template` with a value of this span.
    /// See the [module documentation](crate::template) for the placeholder syntax.
    pub fn formatted_string(&self, template: &str) -> String {
        let bytes = template.as_bytes();
        let mut cursor = SliceCursor::at_start(bytes);
        let mut output = String::with_capacity(template.len());
        let mut literal_start = 0;

        while !cursor.at_end() {
            let start = cursor.pos();
            if !bytes[start..].starts_with(b"{{") {
                cursor.next();
                continue;
            }
            match parse_placeholder(&mut cursor) {
                Some(placeholder) => {
                    // Placeholders are pure ASCII, so both ends are char boundaries.
                    output.push_str(&template[literal_start..start]);
                    output.push_str(&self.render(placeholder));
                    literal_start = cursor.pos();
                }
                None => {
                    trace!("leaving unrecognized placeholder at byte {} as is", start);
                    // Only step over one brace; a placeholder may start at the next.
                    cursor.set_pos(start + 1);
                }
            }
        }
        output.push_str(&template[literal_start..]);
        output
    }

    fn render(&self, placeholder: Placeholder) -> String {
        match placeholder {
            Placeholder::Trailing(unit) => self.trailing(unit).to_string(),
            Placeholder::Total {
                unit: Unit::Millisecond,
                ..
            } => self.milliseconds().to_string(),
            Placeholder::Total { unit, precision } => {
                round_to(self.total(unit), precision).to_string()
            }
        }
    }
}

/// Parses `{{name}}` or `{{NAME:digits}}` at the cursor, leaving the cursor just
/// past the closing braces. Returns `None` if the text there is not a
/// placeholder; the cursor position is then unspecified.
fn parse_placeholder(cursor: &mut SliceCursor<u8>) -> Option<Placeholder> {
    expect(cursor, b'{')?;
    expect(cursor, b'{')?;

    let name_start = cursor.pos();
    while cursor.next_if(|b| b.is_ascii_alphabetic()).is_some() {}
    let name = std::str::from_utf8(cursor.since(name_start)).ok()?;

    let placeholder = match *FIELDS.get(name)? {
        Field::Trailing(unit) => Placeholder::Trailing(unit),
        Field::Total(unit) => {
            let precision = if cursor.next_if(|b| **b == b':').is_some() {
                let digits_start = cursor.pos();
                while cursor.next_if(|b| b.is_ascii_digit()).is_some() {}
                let digits = cursor.since(digits_start);
                if digits.is_empty() {
                    return None;
                }
                std::str::from_utf8(digits).ok()?.parse::<u32>().ok()
            } else {
                Some(0)
            };
            Placeholder::Total { unit, precision }
        }
    };

    expect(cursor, b'}')?;
    expect(cursor, b'}')?;
    Some(placeholder)
}

fn expect(cursor: &mut SliceCursor<u8>, expected: u8) -> Option<()> {
    cursor.next_if(|b| **b == expected).map(|_| ())
}

/// Rounds half away from zero at the given number of decimal places. Values
/// whose scaled form would not be finite are returned as they are.
fn round_to<F: Float>(value: F, places: Option<u32>) -> F {
    let (Some(places), Some(ten)) = (places, F::from(10)) else {
        return value;
    };
    let Ok(exponent) = i32::try_from(places) else {
        return value;
    };
    let factor = ten.powi(exponent);
    let scaled = value * factor;
    if factor.is_finite() && scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}
