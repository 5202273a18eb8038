//! Income and expense ledger with derived totals and chart distributions.
//!
//! [`core::Ledger`] holds validated entries; the functions in
//! [`core::aggregate`] derive totals and distributions from a
//! [`core::Snapshot`] without touching the store.

pub mod core;
