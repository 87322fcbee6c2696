// Test fixtures - reusable test data
// Provides consistent dates across all test files

#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Mar 15, 2024 (mid-month, leap year)
    pub fn mid_march_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Returns Jan 31, 2024 (month end before a leap February)
    pub fn jan_31_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    /// Returns Jan 31, 2023 (month end before a 28-day February)
    pub fn jan_31_2023() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 31).unwrap()
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}
