// Month Period (statistics window)

use super::error::{DomainError, Result};
use super::Millis;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar month. Bounds are half-open and in UTC:
/// `[first day 00:00, first day of next month 00:00)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || !(1970..=9999).contains(&year) {
            return Err(DomainError::InvalidPeriod { month, year });
        }
        Ok(Self { year, month })
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// `(start, end)` in epoch millis, end exclusive
    pub fn bounds_millis(&self) -> (Millis, Millis) {
        (midnight_millis(self.first_day()), midnight_millis(self.next().first_day()))
    }
}

fn midnight_millis(date: NaiveDate) -> Millis {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

impl std::fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_month() {
        assert!(MonthPeriod::new(2025, 0).is_err());
        assert!(MonthPeriod::new(2025, 13).is_err());
        assert!(MonthPeriod::new(1800, 5).is_err());
    }

    #[test]
    fn test_bounds_cover_whole_last_day() {
        let jan = MonthPeriod::new(2025, 1).unwrap();
        let (start, end) = jan.bounds_millis();
        assert_eq!(start, 1_735_689_600_000); // 2025-01-01T00:00:00Z
        assert_eq!(end, 1_738_368_000_000); // 2025-02-01T00:00:00Z

        let jan_31_evening = 1_738_353_600_000; // 2025-01-31T20:00:00Z
        assert!((start..end).contains(&jan_31_evening));
        assert!(!(start..end).contains(&end));
    }

    #[test]
    fn test_december_rolls_over() {
        let dec = MonthPeriod::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthPeriod::new(2025, 1).unwrap());
        assert_eq!(dec.bounds_millis().1, 1_735_689_600_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthPeriod::new(2025, 1).unwrap().to_string(), "2025-01");
    }
}
