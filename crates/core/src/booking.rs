//! Reservation state machine.
//!
//! The only two transitions are `pending -> accepted` and
//! `pending -> refused`; both are terminal. This module is the sole writer
//! of reservation status and of blocked-date entries, and it emits the
//! paired notification as part of the same mutation, so the three can never
//! drift apart. Callers must invoke these functions on the snapshot of an
//! active store transaction — never on a read-only copy.

use crate::availability::is_available;
use crate::error::CoreError;
use crate::identity::Identity;
use crate::model::{BlockedDate, Decision, Notification, Reservation, ReservationStatus};
use crate::snapshot::Snapshot;
use crate::types::{new_id, now, Date};

/// Create a new `pending` reservation for `(cake_id, date)`.
///
/// Fails with [`CoreError::NotFound`] if the cake does not exist and with
/// [`CoreError::DateUnavailable`] if the date is already blocked. Does not
/// create a blocked date; only acceptance commits the date. Appends one
/// `new_reservation` notification to the chef channel.
pub fn create_reservation(
    snapshot: &mut Snapshot,
    identity: &Identity,
    cake_id: &str,
    date: Date,
) -> Result<Reservation, CoreError> {
    let cake = snapshot.cake(cake_id).ok_or_else(|| CoreError::NotFound {
        entity: "Cake",
        id: cake_id.to_string(),
    })?;

    if !is_available(snapshot, cake_id, date) {
        return Err(CoreError::DateUnavailable {
            cake_id: cake_id.to_string(),
            date,
        });
    }

    let reservation = Reservation {
        id: new_id(),
        cake_id: cake_id.to_string(),
        user_id: identity.id.clone(),
        user_name: identity.display_name.clone(),
        cake_name: cake.name.clone(),
        date,
        status: ReservationStatus::Pending,
        created_at: now(),
    };

    snapshot
        .notifications
        .push(Notification::new_reservation(&reservation));
    snapshot.reservations.push(reservation.clone());

    Ok(reservation)
}

/// Apply a chef decision to a `pending` reservation.
///
/// Replaying a decision on an already-decided reservation fails with
/// [`CoreError::InvalidTransition`] rather than silently succeeding, so a
/// retry can never mint a duplicate blocked date or notification. Accepting
/// re-checks availability inside the same transaction: two pending
/// reservations for the same date can both exist, but only the first
/// acceptance wins — the second fails [`CoreError::DateUnavailable`] and
/// the reservation stays `pending` for the chef to refuse or retry later.
pub fn decide_reservation(
    snapshot: &mut Snapshot,
    reservation_id: &str,
    decision: Decision,
) -> Result<Reservation, CoreError> {
    let current = snapshot
        .reservation(reservation_id)
        .ok_or_else(|| CoreError::NotFound {
            entity: "Reservation",
            id: reservation_id.to_string(),
        })?;

    if current.status != ReservationStatus::Pending {
        return Err(CoreError::InvalidTransition {
            reservation_id: reservation_id.to_string(),
            reason: format!("reservation is already {}", current.status),
        });
    }

    let (cake_id, date) = (current.cake_id.clone(), current.date);

    if decision == Decision::Accepted {
        if !is_available(snapshot, &cake_id, date) {
            return Err(CoreError::DateUnavailable { cake_id, date });
        }
        snapshot.blocked_dates.push(BlockedDate {
            id: new_id(),
            cake_id,
            date,
            reservation_id: reservation_id.to_string(),
        });
    }

    // Status write and notification happen together with the block above;
    // the enclosing transaction commits all three or none.
    let reservation = snapshot
        .reservations
        .iter_mut()
        .find(|r| r.id == reservation_id)
        .ok_or_else(|| CoreError::NotFound {
            entity: "Reservation",
            id: reservation_id.to_string(),
        })?;
    reservation.status = decision.resulting_status();
    let updated = reservation.clone();

    snapshot
        .notifications
        .push(Notification::reservation_update(&updated));

    Ok(updated)
}
