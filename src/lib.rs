//! # Impuestos Core
//!
//! A tax computation library for Chilean small-business accounting:
//! gross-to-net decomposition of VAT-inclusive amounts, VAT debit/credit
//! reconciliation, and monthly VAT-due summaries.
//!
//! ## Features
//!
//! - **Revenue decomposition**: net, VAT (IVA), provisional tax (PPM),
//!   income tax (Renta), and net profit from one gross amount
//! - **Expense decomposition**: reclaimable VAT credit for invoiced purchases
//! - **Aggregation**: period totals with per-document-type counts
//! - **Monthly VAT position**: debit minus credit, floored at zero, with the
//!   statutory due date (12th of the following month)
//! - **Rate configuration**: atomically swapped immutable snapshots, safe to
//!   share across concurrent requests
//!
//! The library performs no I/O: the host fetches records and persists
//! results; this crate only computes.
//!
//! ## Quick Start
//!
//! ```rust
//! use impuestos_core::{DocumentType, RevenueBreakdown, TaxRates};
//!
//! let rates = TaxRates::default(); // IVA 19%, PPM 0.125%, Renta 25%
//! let breakdown = RevenueBreakdown::decompose(119_000, DocumentType::Invoice, &rates)?;
//!
//! assert_eq!(breakdown.net, 100_000);
//! assert_eq!(breakdown.vat, 19_000);
//! # Ok::<(), impuestos_core::TaxError>(())
//! ```

pub mod calendar;
pub mod engine;
pub mod rates;
pub mod types;

// Re-export commonly used types
pub use engine::*;
pub use rates::*;
pub use types::*;
