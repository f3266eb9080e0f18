//! Tax rate configuration
//!
//! Rates arrive from the host's configuration store as decimal percentages.
//! Calculations take an immutable [`TaxRates`] snapshot, so a breakdown
//! computed and stored by a caller can never be altered retroactively by a
//! later rate change. [`RateConfig`] provides the shared-state model for
//! hosts that keep one process-wide configuration.

use std::str::FromStr;
use std::sync::{Arc, RwLock};

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::types::{TaxError, TaxResult};

/// Immutable snapshot of the three tax rates, as decimal percentages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRates {
    /// VAT (IVA) rate percentage (e.g., 19.0 for 19%)
    pub vat: BigDecimal,
    /// Provisional tax (PPM) rate percentage, applied to net revenue
    pub provisional: BigDecimal,
    /// Income tax (Renta) rate percentage, applied to net revenue
    pub income_tax: BigDecimal,
}

impl TaxRates {
    /// Create a rate snapshot, rejecting negative rates
    pub fn new(
        vat: BigDecimal,
        provisional: BigDecimal,
        income_tax: BigDecimal,
    ) -> TaxResult<Self> {
        let rates = Self {
            vat,
            provisional,
            income_tax,
        };
        rates.validate()?;
        Ok(rates)
    }

    /// Validate that every rate is non-negative
    ///
    /// No upper bound is enforced; the host may configure any value.
    pub fn validate(&self) -> TaxResult<()> {
        for (name, rate) in [
            ("vat", &self.vat),
            ("provisional", &self.provisional),
            ("income_tax", &self.income_tax),
        ] {
            if rate < &BigDecimal::zero() {
                return Err(TaxError::InvalidRate(format!(
                    "{} rate must be non-negative, got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }
}

impl Default for TaxRates {
    /// Chilean statutory defaults: IVA 19%, PPM 0.125%, Renta 25%
    fn default() -> Self {
        Self {
            vat: BigDecimal::from(19),
            provisional: BigDecimal::new(125.into(), 3),
            income_tax: BigDecimal::from(25),
        }
    }
}

/// Partial rate update: only supplied fields overwrite the current snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateUpdate {
    /// New VAT rate percentage, if changing
    pub vat: Option<BigDecimal>,
    /// New provisional tax rate percentage, if changing
    pub provisional: Option<BigDecimal>,
    /// New income tax rate percentage, if changing
    pub income_tax: Option<BigDecimal>,
}

impl RateUpdate {
    /// Parse an update from the raw string values a configuration loader
    /// supplies
    ///
    /// Any field that fails numeric parsing rejects the whole update with
    /// [`TaxError::InvalidRate`].
    pub fn parse(
        vat: Option<&str>,
        provisional: Option<&str>,
        income_tax: Option<&str>,
    ) -> TaxResult<Self> {
        fn parse_field(name: &str, raw: Option<&str>) -> TaxResult<Option<BigDecimal>> {
            raw.map(|value| {
                BigDecimal::from_str(value.trim()).map_err(|_| {
                    TaxError::InvalidRate(format!("{} rate is not numeric: {:?}", name, value))
                })
            })
            .transpose()
        }

        Ok(Self {
            vat: parse_field("vat", vat)?,
            provisional: parse_field("provisional", provisional)?,
            income_tax: parse_field("income_tax", income_tax)?,
        })
    }

    /// Apply this update on top of an existing snapshot, producing a new
    /// validated snapshot
    pub fn apply_to(&self, current: &TaxRates) -> TaxResult<TaxRates> {
        TaxRates::new(
            self.vat.clone().unwrap_or_else(|| current.vat.clone()),
            self.provisional
                .clone()
                .unwrap_or_else(|| current.provisional.clone()),
            self.income_tax
                .clone()
                .unwrap_or_else(|| current.income_tax.clone()),
        )
    }
}

/// Process-wide rate configuration holder
///
/// The current rates live behind an atomically swapped `Arc` snapshot: a
/// reader during a concurrent update sees either the full old set or the full
/// new set, never a partially written one. A failed update leaves the prior
/// configuration untouched.
#[derive(Debug)]
pub struct RateConfig {
    current: RwLock<Arc<TaxRates>>,
}

impl RateConfig {
    /// Create a configuration holder with the given initial rates
    pub fn new(rates: TaxRates) -> TaxResult<Self> {
        rates.validate()?;
        Ok(Self {
            current: RwLock::new(Arc::new(rates)),
        })
    }

    /// Overwrite the supplied fields, keeping prior values for the rest
    ///
    /// The merged snapshot is validated before it is swapped in; on error no
    /// field changes. The new rates are visible to every subsequent
    /// [`snapshot`](Self::snapshot) call as soon as this returns.
    pub fn set_rates(&self, update: RateUpdate) -> TaxResult<()> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let merged = update.apply_to(&guard)?;
        tracing::debug!(
            vat = %merged.vat,
            provisional = %merged.provisional,
            income_tax = %merged.income_tax,
            "tax rates updated"
        );
        *guard = Arc::new(merged);
        Ok(())
    }

    /// Current rates as an immutable snapshot
    ///
    /// Later `set_rates` calls swap the shared reference but never mutate the
    /// snapshot a caller already holds.
    pub fn snapshot(&self) -> Arc<TaxRates> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            current: RwLock::new(Arc::new(TaxRates::default())),
        }
    }
}
