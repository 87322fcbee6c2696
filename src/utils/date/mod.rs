// Date utility functions
// Calendar arithmetic shared by navigation and header labels

use chrono::{Datelike, Days, Months, NaiveDate};

/// Week of the month counted in blocks of seven days from the 1st.
///
/// Days 1-7 are week 1, 8-14 week 2, and so on; the 29th-31st fall in week 5.
/// This is deliberately not an ISO week number.
pub fn week_of_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

/// Number of days in the given month, or `None` if the month is out of range.
pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
}

/// Shift `date` by a signed number of days.
pub fn shift_days(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

/// Shift `date` by a signed number of calendar months, landing on
/// `anchor_day` clamped to the length of the target month.
pub fn shift_months_to_anchor(date: NaiveDate, delta: i32, anchor_day: u32) -> Option<NaiveDate> {
    let first = date.with_day(1)?;
    let magnitude = Months::new(delta.unsigned_abs());
    let target_first = if delta >= 0 {
        first.checked_add_months(magnitude)?
    } else {
        first.checked_sub_months(magnitude)?
    };

    let max_day = last_day_of_month(target_first.year(), target_first.month())?;
    target_first.with_day(anchor_day.clamp(1, max_day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test_case(1, 1; "first day")]
    #[test_case(7, 1; "seventh day")]
    #[test_case(8, 2; "eighth day")]
    #[test_case(10, 2; "tenth day")]
    #[test_case(21, 3; "twenty first")]
    #[test_case(28, 4; "twenty eighth")]
    #[test_case(29, 5; "twenty ninth")]
    #[test_case(31, 5; "thirty first")]
    fn test_week_of_month(day: u32, expected: u32) {
        assert_eq!(week_of_month(ymd(2024, 3, day)), expected);
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2024, 2), Some(29));
        assert_eq!(last_day_of_month(2023, 2), Some(28));
        assert_eq!(last_day_of_month(2024, 4), Some(30));
        assert_eq!(last_day_of_month(2024, 12), Some(31));
        assert_eq!(last_day_of_month(2024, 13), None);
    }

    #[test]
    fn test_last_day_of_final_representable_month() {
        let last_year = NaiveDate::MAX.year();
        assert_eq!(last_day_of_month(last_year, 12), Some(31));
        assert_eq!(last_day_of_month(NaiveDate::MIN.year(), 1), Some(31));
    }

    #[test]
    fn test_shift_months_into_final_month() {
        let last_year = NaiveDate::MAX.year();
        assert_eq!(
            shift_months_to_anchor(ymd(last_year, 11, 15), 1, 15),
            Some(ymd(last_year, 12, 15))
        );
        assert_eq!(shift_months_to_anchor(ymd(last_year, 12, 15), 1, 15), None);
    }

    #[test]
    fn test_shift_days_crosses_year() {
        assert_eq!(shift_days(ymd(2024, 12, 31), 1), Some(ymd(2025, 1, 1)));
        assert_eq!(shift_days(ymd(2025, 1, 1), -1), Some(ymd(2024, 12, 31)));
        assert_eq!(shift_days(ymd(2024, 2, 25), 7), Some(ymd(2024, 3, 3)));
    }

    #[test]
    fn test_shift_days_out_of_range() {
        assert_eq!(shift_days(NaiveDate::MAX, 1), None);
        assert_eq!(shift_days(NaiveDate::MIN, -1), None);
    }

    #[test]
    fn test_shift_months_clamps_to_month_end() {
        assert_eq!(shift_months_to_anchor(ymd(2024, 1, 31), 1, 31), Some(ymd(2024, 2, 29)));
        assert_eq!(shift_months_to_anchor(ymd(2023, 1, 31), 1, 31), Some(ymd(2023, 2, 28)));
        assert_eq!(shift_months_to_anchor(ymd(2024, 2, 29), 1, 31), Some(ymd(2024, 3, 31)));
        assert_eq!(shift_months_to_anchor(ymd(2024, 3, 31), -1, 31), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_shift_months_crosses_year() {
        assert_eq!(shift_months_to_anchor(ymd(2024, 12, 15), 1, 15), Some(ymd(2025, 1, 15)));
        assert_eq!(shift_months_to_anchor(ymd(2025, 1, 15), -1, 15), Some(ymd(2024, 12, 15)));
    }
}
