//! Core types and data structures for the tax engine

use serde::{Deserialize, Serialize};

/// Tax-relevant classification of a transaction record
///
/// The document type decides the tax effect of an amount: invoices carry the
/// full effect (VAT debit on sales, VAT credit on purchases), receipts carry
/// VAT debit but grant no credit right, and undocumented transactions have no
/// tax effect at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Factura - full tax effect, grants VAT credit on purchases
    #[serde(rename = "factura")]
    Invoice,
    /// Boleta - VAT debit applies, but no credit right
    #[serde(rename = "boleta")]
    Receipt,
    /// Sin documento - informal transaction, no tax effect
    #[serde(rename = "sin_documento")]
    None,
}

impl DocumentType {
    /// Whether VAT applies to amounts carrying this document type
    pub fn vat_applies(&self) -> bool {
        !matches!(self, DocumentType::None)
    }

    /// Whether this document type grants a VAT credit right on purchases
    pub fn grants_vat_credit(&self) -> bool {
        matches!(self, DocumentType::Invoice)
    }
}

/// Settlement status of an expense record
///
/// Only settled expenses count toward the monthly VAT credit; the host's data
/// layer filters on this before handing records to the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettlementStatus {
    /// Pagado - the expense has been paid
    #[serde(rename = "pagado")]
    Paid,
    /// Pendiente - the expense is still outstanding
    #[serde(rename = "pendiente")]
    Pending,
}

/// Revenue record as supplied by the host's data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueItem {
    /// Gross amount in whole pesos (VAT-inclusive when a document applies)
    pub amount: i64,
    /// Document type backing the sale
    pub document_type: DocumentType,
}

impl RevenueItem {
    /// Create a new revenue item
    pub fn new(amount: i64, document_type: DocumentType) -> Self {
        Self {
            amount,
            document_type,
        }
    }
}

/// Expense record as supplied by the host's data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    /// Total amount paid in whole pesos (VAT-inclusive when invoiced)
    pub amount: i64,
    /// Document type backing the purchase
    pub document_type: DocumentType,
    /// Settlement status of the expense
    pub status: SettlementStatus,
}

impl ExpenseItem {
    /// Create a new expense item
    pub fn new(amount: i64, document_type: DocumentType, status: SettlementStatus) -> Self {
        Self {
            amount,
            document_type,
            status,
        }
    }

    /// Whether the expense has been settled and may count toward VAT credit
    pub fn is_settled(&self) -> bool {
        self.status == SettlementStatus::Paid
    }
}

/// Errors that can occur in the tax engine
#[derive(Debug, thiserror::Error)]
pub enum TaxError {
    #[error("Invalid rate: {0}")]
    InvalidRate(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}

/// Result type for tax engine operations
pub type TaxResult<T> = Result<T, TaxError>;
