use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{BudgetError, Result};

/// Inclusive `[start, end]` query window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(BudgetError::InvalidInput(format!(
                "window end {end} is before start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The full calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Result<Self> {
        let start = first_of_month(date);
        let end = shift_month(start, 1)
            .map(|next| next - Duration::days(1))
            .ok_or_else(|| out_of_range(date, 1))?;
        Ok(Self { start, end })
    }

    /// Window ending at `end` and starting on the first day of the month
    /// `months - 1` months earlier. `months` below one is treated as one.
    pub fn trailing_months(end: NaiveDate, months: u32) -> Result<Self> {
        let back = i32::try_from(months.max(1))
            .ok()
            .and_then(|months| months.checked_sub(1))
            .ok_or_else(|| out_of_range(end, months))?;
        let start = shift_month(first_of_month(end), -back)
            .ok_or_else(|| out_of_range(end, months))?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn months_in_range(&self) -> u32 {
        months_between(self.start, self.end).unwrap_or(0)
    }

    /// First day of the window that falls in the window's last calendar month.
    pub fn latest_month_start(&self) -> NaiveDate {
        first_of_month(self.end).max(self.start)
    }
}

/// Count of distinct calendar months touched by `[start, end]`, or `None`
/// when the range is inverted.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> Option<u32> {
    if end < start {
        return None;
    }
    let start_idx = start.year() * 12 + start.month0() as i32;
    let end_idx = end.year() * 12 + end.month0() as i32;
    Some((end_idx - start_idx + 1) as u32)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn out_of_range(date: NaiveDate, months: u32) -> BudgetError {
    BudgetError::InvalidInput(format!(
        "a {months}-month window around {date} is outside the supported calendar"
    ))
}

/// First day of the month `months` away from `date`, or `None` when that
/// falls outside the representable calendar.
fn shift_month(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let idx = (date.year() * 12 + date.month0() as i32).checked_add(months)?;
    let year = idx.div_euclid(12);
    let month = idx.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}
