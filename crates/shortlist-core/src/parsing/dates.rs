use chrono::{Datelike, NaiveDate};

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Returns `None` for anything that is not a real date, e.g. "1995-02-30".
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Whole years elapsed between `birth` and `today`.
///
/// The birthday counts as reached on the day itself. A birth date after
/// `today` has no age.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth > today {
        return None;
    }
    let birthday_pending = (today.month(), today.day()) < (birth.month(), birth.day());
    let years = today.year() - birth.year() - i32::from(birthday_pending);
    u32::try_from(years).ok()
}
