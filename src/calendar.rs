//! Due-date and month-name utilities for the Chilean VAT calendar

use chrono::NaiveDate;

use crate::types::{TaxError, TaxResult};

/// Spanish month names, indexed by month - 1
const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// VAT payment deadline for a period: the 12th of the following month
///
/// December rolls into January of the next year.
pub fn due_date_for(year: i32, month: u32) -> TaxResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(TaxError::InvalidPeriod(format!(
            "month must be between 1 and 12, got {}",
            month
        )));
    }

    let (due_year, due_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(due_year, due_month, 12).ok_or_else(|| {
        TaxError::InvalidPeriod(format!("year {} is out of range", due_year))
    })
}

/// Whole days from `today` until `target`
///
/// Both dates are already midnight-truncated, so the result does not depend
/// on the time of day the call is made. Negative means overdue, zero means
/// due today.
pub fn days_remaining(target: NaiveDate, today: NaiveDate) -> i64 {
    target.signed_duration_since(today).num_days()
}

/// Spanish name of a month (1-12)
pub fn month_name(month: u32) -> TaxResult<&'static str> {
    if !(1..=12).contains(&month) {
        return Err(TaxError::InvalidPeriod(format!(
            "month must be between 1 and 12, got {}",
            month
        )));
    }
    Ok(MONTH_NAMES[(month - 1) as usize])
}
