//! Deterministic derivation of the synthetic commit dates.
//!
//! The generated history is fixed: two utility commits in early January,
//! one commit per module every five days starting 2025-01-03, and two
//! maintenance commits in June. Module commits land at 18:00 so that the
//! 09:00 utility commits sort first even on a shared nominal day.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Days between consecutive module commits.
const MODULE_STEP_DAYS: i64 = 5;

fn literal(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid literal date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid literal time")
}

/// Date of the shared-helpers commit.
pub fn helpers_date() -> NaiveDateTime {
    literal(2025, 1, 1, 9)
}

/// Date of the fixture-data commit.
pub fn fixtures_date() -> NaiveDateTime {
    literal(2025, 1, 2, 9)
}

/// Date of the commit for the module at catalog position `index`.
pub fn module_date(index: usize) -> NaiveDateTime {
    literal(2025, 1, 3, 18) + Duration::days(MODULE_STEP_DAYS * index as i64)
}

/// Dates of the two trailing maintenance commits, in issue order.
pub fn maintenance_dates() -> [NaiveDateTime; 2] {
    [literal(2025, 6, 5, 18), literal(2025, 6, 10, 18)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str) -> NaiveDateTime {
        date.parse().unwrap()
    }

    #[test]
    fn test_module_dates_step_five_days() {
        assert_eq!(module_date(0), at("2025-01-03T18:00:00"));
        assert_eq!(module_date(1), at("2025-01-08T18:00:00"));
        assert_eq!(module_date(2), at("2025-01-13T18:00:00"));
        assert_eq!(module_date(19), at("2025-04-08T18:00:00"));
    }

    #[test]
    fn test_utility_dates_precede_first_module() {
        assert!(helpers_date() < fixtures_date());
        assert!(fixtures_date() < module_date(0));
    }

    #[test]
    fn test_maintenance_dates_follow_last_module() {
        let [first, second] = maintenance_dates();
        assert!(module_date(19) < first);
        assert!(first < second);
        assert_eq!(first, at("2025-06-05T18:00:00"));
        assert_eq!(second, at("2025-06-10T18:00:00"));
    }
}
