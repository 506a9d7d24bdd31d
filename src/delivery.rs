//! Delivery date of a placed order.
//!
//! Same-day delivery needs every item to be same-day and the order to come in
//! no later than the cutoff minute. Anything else ships on the next working
//! day: not a weekend and not a Polish public holiday.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Fixed-date public holidays as `(day, month)`.
const FIXED_HOLIDAYS: [(u32, u32); 9] = [
    (1, 1),
    (6, 1),
    (1, 5),
    (3, 5),
    (15, 8),
    (1, 11),
    (11, 11),
    (25, 12),
    (26, 12),
];

pub fn delivery_date(placed_at: NaiveDateTime, all_same_day: bool, cutoff: NaiveTime) -> NaiveDate {
    let placed = (placed_at.hour(), placed_at.minute());
    if all_same_day && placed <= (cutoff.hour(), cutoff.minute()) {
        placed_at.date()
    } else {
        next_working_day(placed_at.date())
    }
}

/// First working day strictly after `date`.
pub fn next_working_day(date: NaiveDate) -> NaiveDate {
    let mut day = date + Days::new(1);
    while !is_working_day(day) {
        day = day + Days::new(1);
    }
    day
}

pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !is_holiday(date)
}

fn is_holiday(date: NaiveDate) -> bool {
    if FIXED_HOLIDAYS.contains(&(date.day(), date.month())) {
        return true;
    }
    let Some(easter) = easter_sunday(date.year()) else {
        return false;
    };
    // Easter Sunday, Easter Monday, Corpus Christi
    [0, 1, 60]
        .iter()
        .any(|offset| easter.checked_add_days(Days::new(*offset)) == Some(date))
}

/// Easter Sunday by Gauss's method, valid for 1900–2099 except 2049 and 2076.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = ((year % 19) * 19 + 24) % 30;
    let b = (2 * (year % 4) + 4 * (year % 7) + 6 * a + 5) % 7;
    NaiveDate::from_ymd_opt(year, 3, 22)?.checked_add_days(Days::new((a + b) as u64))
}
