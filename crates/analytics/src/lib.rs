//! `stockroom-analytics` — derived summaries over inventory and history.
//!
//! Aggregation is a pure function of the two collections and a time
//! window; the [`Analytics`] front end merely reads point-in-time
//! snapshots through the store adapter. Read-only: it takes no locks and
//! never blocks ledger writers (stale reads are acceptable).

pub mod aggregator;
pub mod summary;
pub mod window;

pub use aggregator::Analytics;
pub use summary::{LOW_STOCK_THRESHOLD, Summary, build_summary};
pub use window::Window;
