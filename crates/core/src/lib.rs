//! Domain layer for the pâtisserie storefront.
//!
//! Everything here is pure: functions either inspect a [`Snapshot`] or
//! mutate a `&mut Snapshot` handed to them by an active store transaction.
//! No I/O happens in this crate. The booking engine ([`booking`]) is the
//! sole writer of reservation status and blocked-date entries; the
//! availability index ([`availability`]) is a read-only projection of the
//! same snapshot; the notification emitter ([`notification`]) produces one
//! record per state transition.

pub mod availability;
pub mod booking;
pub mod error;
pub mod identity;
pub mod model;
pub mod snapshot;
pub mod types;

pub use error::CoreError;
pub use snapshot::Snapshot;
