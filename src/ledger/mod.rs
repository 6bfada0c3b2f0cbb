//! Assignment ledger: live equipment state, append-only assignment history,
//! employee roster and equipment type catalog.
//!
//! Everything here is synchronous and free of I/O; persistence lives in
//! [`crate::repository`].

pub mod date;
pub mod queries;
pub mod store;
pub mod transfers;

pub use store::LedgerStore;
