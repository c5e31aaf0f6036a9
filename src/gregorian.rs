use num_integer::Integer;

const DAYS_PER_400_YEARS: i64 = 146_097;
// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar.
const EPOCH_OFFSET_DAYS: i64 = 719_468;

pub(crate) fn is_leap_year(year: i32) -> bool {
    // `%` keeps the sign of a negative year, so reduce into 0..400 first;
    // the calendar repeats every 400 years.
    let year = year.mod_floor(&400);
    year % 4 == 0 && (year % 100 != 0 || year == 0)
}

pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        1..=12 => 31,
        _ => panic!("Month must be in range 1-12"),
    }
}

/// Days from 1970-01-01 to the given date, negative before it.
///
/// Counts from March so that the leap day falls at the end of the counting
/// year; the month lengths March through February then follow a fixed
/// 153-days-per-5-months pattern.
pub(crate) fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let year = year as i64 - i64::from(month <= 2);
    let era = Integer::div_floor(&year, &400);
    let year_of_era = year - era * 400;
    let month_from_march = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * month_from_march + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_400_YEARS + day_of_era - EPOCH_OFFSET_DAYS
}
