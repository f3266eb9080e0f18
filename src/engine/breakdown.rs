//! Gross-to-net decomposition of single revenue and expense amounts
//!
//! Amounts are whole pesos and, whenever a tax document backs them, include
//! VAT. The net is recovered by dividing out the VAT rate and rounding
//! half-away-from-zero; the VAT component is then derived by subtraction so
//! that net plus VAT always reproduces the original amount exactly.

use bigdecimal::rounding::RoundingMode;
use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::rates::TaxRates;
use crate::types::{DocumentType, TaxError, TaxResult};

/// Full tax breakdown of one gross revenue amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    /// Gross amount as supplied (VAT-inclusive when a document applies)
    pub gross: i64,
    /// Net amount after VAT is divided out
    pub net: i64,
    /// VAT debit, derived as `gross - net`
    pub vat: i64,
    /// Provisional tax (PPM) on the net amount
    pub provisional: i64,
    /// Income tax (Renta) estimate on the net amount
    pub income_tax: i64,
    /// Net profit: `net - provisional - income_tax`
    pub net_profit: i64,
    /// Document type the amount was computed under
    pub document_type: DocumentType,
    /// Rates in force at computation time
    pub rates_used: TaxRates,
}

impl RevenueBreakdown {
    /// Decompose a gross revenue amount under the given rates
    ///
    /// Undocumented revenue bears no computed tax: the whole amount passes
    /// through as net profit. This mirrors how informal transactions are
    /// recorded, it is deliberate policy rather than an omission.
    pub fn decompose(
        gross: i64,
        document_type: DocumentType,
        rates: &TaxRates,
    ) -> TaxResult<Self> {
        validate_amount(gross)?;

        if !document_type.vat_applies() {
            return Ok(Self {
                gross,
                net: gross,
                vat: 0,
                provisional: 0,
                income_tax: 0,
                net_profit: gross,
                document_type,
                rates_used: rates.clone(),
            });
        }

        let net = net_of(gross, &rates.vat)?;
        let vat = gross - net;
        let provisional = percent_of(net, &rates.provisional)?;
        let income_tax = percent_of(net, &rates.income_tax)?;
        let net_profit = net - provisional - income_tax;

        Ok(Self {
            gross,
            net,
            vat,
            provisional,
            income_tax,
            net_profit,
            document_type,
            rates_used: rates.clone(),
        })
    }
}

/// VAT credit breakdown of one expense amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    /// Total amount paid as supplied
    pub total: i64,
    /// Net amount after VAT is divided out (equals `total` without credit)
    pub net: i64,
    /// Reclaimable VAT credit, derived as `total - net`
    pub vat_credit: i64,
    /// Document type the amount was computed under
    pub document_type: DocumentType,
}

impl ExpenseBreakdown {
    /// Decompose a total expense amount under the given rates
    ///
    /// Only invoices carry a VAT credit right; receipts and undocumented
    /// purchases pass through with the full amount as net.
    pub fn decompose(
        total: i64,
        document_type: DocumentType,
        rates: &TaxRates,
    ) -> TaxResult<Self> {
        validate_amount(total)?;

        if !document_type.grants_vat_credit() {
            return Ok(Self {
                total,
                net: total,
                vat_credit: 0,
                document_type,
            });
        }

        let net = net_of(total, &rates.vat)?;
        let vat_credit = total - net;

        Ok(Self {
            total,
            net,
            vat_credit,
            document_type,
        })
    }
}

fn validate_amount(amount: i64) -> TaxResult<()> {
    if amount < 0 {
        return Err(TaxError::InvalidAmount(format!(
            "amount must be non-negative, got {}",
            amount
        )));
    }
    Ok(())
}

/// Net component of a VAT-inclusive amount: `round(amount * 100 / (100 + rate))`
fn net_of(amount: i64, vat_rate: &BigDecimal) -> TaxResult<i64> {
    let divisor = BigDecimal::from(100) + vat_rate;
    let net_exact = (BigDecimal::from(amount) * BigDecimal::from(100)) / divisor;
    round_to_peso(&net_exact)
}

/// Percentage of an amount, rounded to whole pesos
fn percent_of(amount: i64, rate: &BigDecimal) -> TaxResult<i64> {
    let exact = (BigDecimal::from(amount) * rate) / BigDecimal::from(100);
    round_to_peso(&exact)
}

/// Round to whole pesos, half away from zero
///
/// Each component is rounded independently; fractional remainders are never
/// accumulated across components.
fn round_to_peso(value: &BigDecimal) -> TaxResult<i64> {
    value
        .with_scale_round(0, RoundingMode::HalfUp)
        .to_i64()
        .ok_or_else(|| TaxError::InvalidAmount(format!("amount out of range: {}", value)))
}
