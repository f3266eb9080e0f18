//! Tax engine: per-amount decomposition and period-level aggregation

pub mod breakdown;
pub mod summary;

pub use breakdown::*;
pub use summary::*;
