//! Voucher numbering and approval lifecycle for a cooperative back office.
//!
//! The crate covers the official-receipt (OR) numbering policy (a general
//! and a loan-specific numbering group, exactly one active per settings
//! record), the printed/approved/released lifecycle derived from milestone
//! timestamps, and a sled-backed service that issues and advances vouchers.

pub mod context;
pub mod error;
pub mod lifecycle;
pub mod numbering;
pub mod service;
pub mod settings;
pub mod utils;
pub mod voucher;
