// Property-based tests for date navigation and header labels
// Random dates across several years, including month ends and leap days

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use step_tracker::models::view_mode::ViewMode;
use step_tracker::services::navigation::TrackerState;
use step_tracker::services::presentation::render_header;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=12, 1u32..=31).prop_map(|(year, month, day)| {
        // Clamp to the month length so every generated triple is a real date
        (0..4)
            .find_map(|back| NaiveDate::from_ymd_opt(year, month, day - back))
            .unwrap()
    })
}

fn any_mode() -> impl Strategy<Value = ViewMode> {
    prop_oneof![
        Just(ViewMode::Day),
        Just(ViewMode::Week),
        Just(ViewMode::Month),
    ]
}

/// State reached from `date` by `steps` month moves (negative moves back).
fn after_month_steps(date: NaiveDate, steps: i32) -> TrackerState {
    let mut state = TrackerState::new(ViewMode::Month, date);
    for _ in 0..steps.unsigned_abs() {
        if steps > 0 {
            state.advance();
        } else {
            state.retreat();
        }
    }
    state
}

proptest! {
    /// Property: after month moves, advance then retreat in any mode restores the date
    #[test]
    fn prop_round_trip_from_month_reached_cursor(
        date in any_date(),
        steps in -24i32..=24,
        mode in any_mode(),
    ) {
        let mut state = after_month_steps(date, steps);
        let reached = state.current_date();

        state.set_mode(mode);
        state.advance();
        state.retreat();
        prop_assert_eq!(state.current_date(), reached);
    }

    /// Property: month moves keep the starting anchor; a day or week round trip
    /// re-anchors on the date it returns to
    #[test]
    fn prop_day_round_trip_reanchors(
        date in any_date(),
        steps in -24i32..=24,
        mode in prop_oneof![Just(ViewMode::Day), Just(ViewMode::Week)],
    ) {
        let mut state = after_month_steps(date, steps);
        prop_assert_eq!(state.cursor().anchor_day(), date.day());

        let reached = state.current_date();
        state.set_mode(mode);
        state.advance();
        state.retreat();
        prop_assert_eq!(state.current_date(), reached);
        prop_assert_eq!(state.cursor().anchor_day(), reached.day());
    }

    /// Property: advance followed by retreat restores the cursor in every mode
    #[test]
    fn prop_advance_then_retreat_round_trips(date in any_date(), mode in any_mode()) {
        let mut state = TrackerState::new(mode, date);
        state.advance();
        state.retreat();
        prop_assert_eq!(state.current_date(), date);
    }

    /// Property: retreat followed by advance restores the cursor in every mode
    #[test]
    fn prop_retreat_then_advance_round_trips(date in any_date(), mode in any_mode()) {
        let mut state = TrackerState::new(mode, date);
        state.retreat();
        state.advance();
        prop_assert_eq!(state.current_date(), date);
    }

    /// Property: a week step is always exactly seven days
    #[test]
    fn prop_week_step_is_seven_days(date in any_date()) {
        let mut state = TrackerState::new(ViewMode::Week, date);
        state.advance();
        prop_assert_eq!((state.current_date() - date).num_days(), 7);
    }

    /// Property: a month step lands in the adjacent month on the same day or the month end
    #[test]
    fn prop_month_step_lands_in_next_month(date in any_date()) {
        let mut state = TrackerState::new(ViewMode::Month, date);
        state.advance();
        let next = state.current_date();

        let expected_month = date.month() % 12 + 1;
        prop_assert_eq!(next.month(), expected_month);
        prop_assert!(next.day() <= date.day());
        if next.day() < date.day() {
            // Clamped, so it must be the last day of the month
            prop_assert_eq!(next.succ_opt().unwrap().day(), 1);
        }
    }

    /// Property: switching mode never moves the cursor
    #[test]
    fn prop_mode_switch_keeps_cursor(date in any_date(), from in any_mode(), to in any_mode()) {
        let mut state = TrackerState::new(from, date);
        state.set_mode(to);
        prop_assert_eq!(state.current_date(), date);
    }

    /// Property: week labels always fall between week 1 and week 5
    #[test]
    fn prop_week_label_in_range(date in any_date()) {
        let header = render_header(ViewMode::Week, date);
        let week: u32 = header
            .trim_start_matches("Week ")
            .split(' ')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        prop_assert!((1..=5).contains(&week));
        prop_assert_eq!(week, (date.day() + 6) / 7);
    }
}
