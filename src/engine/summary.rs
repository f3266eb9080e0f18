//! Aggregation of breakdowns and the monthly VAT-due summary

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::engine::breakdown::{ExpenseBreakdown, RevenueBreakdown};
use crate::rates::TaxRates;
use crate::types::{ExpenseItem, RevenueItem, TaxResult};

/// Summed revenue breakdowns plus per-document-type counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateTotals {
    /// Sum of gross amounts
    pub gross: i64,
    /// Sum of net amounts
    pub net: i64,
    /// Sum of VAT debits
    pub vat: i64,
    /// Sum of provisional tax amounts
    pub provisional: i64,
    /// Sum of income tax amounts
    pub income_tax: i64,
    /// Sum of net profits
    pub net_profit: i64,
    /// Number of invoiced items
    pub invoice_count: usize,
    /// Number of receipt-backed items
    pub receipt_count: usize,
    /// Number of undocumented items
    pub undocumented_count: usize,
}

impl AggregateTotals {
    fn fold(&mut self, breakdown: &RevenueBreakdown) {
        self.gross += breakdown.gross;
        self.net += breakdown.net;
        self.vat += breakdown.vat;
        self.provisional += breakdown.provisional;
        self.income_tax += breakdown.income_tax;
        self.net_profit += breakdown.net_profit;

        match breakdown.document_type {
            crate::types::DocumentType::Invoice => self.invoice_count += 1,
            crate::types::DocumentType::Receipt => self.receipt_count += 1,
            crate::types::DocumentType::None => self.undocumented_count += 1,
        }
    }
}

/// VAT credit totals over a set of settled expenses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VatCreditTotals {
    /// Sum of reclaimable VAT credits
    pub total_vat_credit: i64,
    /// Sum of net purchase amounts behind those credits
    pub total_net_purchases: i64,
    /// Number of invoiced expenses contributing credit
    pub count_with_invoice: usize,
}

/// Monthly VAT position: debit against credit, with the statutory due date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVatSummary {
    /// Calendar year of the period
    pub year: i32,
    /// Calendar month of the period (1-12)
    pub month: u32,
    /// VAT collected on the month's sales
    pub vat_debit: i64,
    /// VAT credit from the month's settled, invoiced purchases
    pub vat_credit: i64,
    /// VAT payable: `max(0, vat_debit - vat_credit)`
    pub vat_due: i64,
    /// Statutory payment deadline, the 12th of the following month
    pub due_date: NaiveDate,
    /// Days until the deadline; negative means overdue, zero means due today
    pub days_remaining: i64,
}

/// Decompose and sum a collection of revenue items
///
/// Order-independent; an empty collection yields all-zero totals.
pub fn aggregate_revenue(items: &[RevenueItem], rates: &TaxRates) -> TaxResult<AggregateTotals> {
    let mut totals = AggregateTotals::default();
    for item in items {
        let breakdown = RevenueBreakdown::decompose(item.amount, item.document_type, rates)?;
        totals.fold(&breakdown);
    }
    Ok(totals)
}

/// Sum the VAT credit over a set of expenses
///
/// Only invoiced items contribute; the caller pre-filters to settled
/// expenses, since pending purchases carry no credit yet.
pub fn aggregate_expense_vat_credit(
    items: &[ExpenseItem],
    rates: &TaxRates,
) -> TaxResult<VatCreditTotals> {
    let mut totals = VatCreditTotals::default();
    for item in items {
        if !item.document_type.grants_vat_credit() {
            continue;
        }
        let breakdown = ExpenseBreakdown::decompose(item.amount, item.document_type, rates)?;
        totals.total_vat_credit += breakdown.vat_credit;
        totals.total_net_purchases += breakdown.net;
        totals.count_with_invoice += 1;
    }
    Ok(totals)
}

/// Compute the VAT position for one month
///
/// A credit surplus is reported as zero due; the surplus itself is carried
/// forward by the host's bookkeeping, not tracked here. `today` is the
/// current date already truncated to midnight in the host's reference
/// timezone, so the result is stable regardless of time of day.
pub fn compute_monthly_vat(
    year: i32,
    month: u32,
    revenue_items: &[RevenueItem],
    expense_items: &[ExpenseItem],
    rates: &TaxRates,
    today: NaiveDate,
) -> TaxResult<MonthlyVatSummary> {
    let due_date = calendar::due_date_for(year, month)?;

    let vat_debit = aggregate_revenue(revenue_items, rates)?.vat;
    let vat_credit = aggregate_expense_vat_credit(expense_items, rates)?.total_vat_credit;
    let vat_due = (vat_debit - vat_credit).max(0);

    tracing::debug!(year, month, vat_debit, vat_credit, vat_due, "monthly VAT computed");

    Ok(MonthlyVatSummary {
        year,
        month,
        vat_debit,
        vat_credit,
        vat_due,
        due_date,
        days_remaining: calendar::days_remaining(due_date, today),
    })
}
