//! Availability index: which dates are already committed for a cake.
//!
//! Pure functions of a snapshot. When the answer feeds a write decision,
//! the caller must hold the same transaction that will perform the write —
//! an availability check against a stale snapshot is exactly the race this
//! engine exists to prevent.

use crate::snapshot::Snapshot;
use crate::types::Date;

/// Whether `(cake_id, date)` is free of any committed block.
///
/// Exact equality on both fields; no ranges. Linear scan is fine at this
/// scale — index by `(cake_id, date)` if the blocked-date count ever grows
/// past a few thousand.
pub fn is_available(snapshot: &Snapshot, cake_id: &str, date: Date) -> bool {
    !snapshot
        .blocked_dates
        .iter()
        .any(|bd| bd.cake_id == cake_id && bd.date == date)
}

/// All dates currently blocked for a cake, in insertion order.
pub fn blocked_dates_for(snapshot: &Snapshot, cake_id: &str) -> Vec<Date> {
    snapshot
        .blocked_dates
        .iter()
        .filter(|bd| bd.cake_id == cake_id)
        .map(|bd| bd.date)
        .collect()
}
