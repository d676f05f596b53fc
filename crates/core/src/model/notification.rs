//! Notification records and the emitter that builds them.
//!
//! One notification is produced per state transition, addressed to the
//! party that did not initiate it: `create` notifies the chef channel,
//! `decide` notifies the original requester. Constructors here are pure;
//! the booking engine appends their output inside the same transaction as
//! the transition they describe, so a reader can never observe a
//! notification for a transition that did not durably happen.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::identity::CHEF_CHANNEL;
use crate::model::reservation::{Reservation, ReservationStatus};
use crate::types::{new_id, now, Id, Timestamp};

/// Discriminates what a notification announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewReservation,
    ReservationUpdate,
}

/// An in-app notification addressed to a user id or the chef channel.
///
/// Append-only except for the `read` flag and deletion by its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Id,
    /// Target: a specific user id, or [`CHEF_CHANNEL`].
    pub user_id: Id,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: Timestamp,
    /// Payload reference to the originating record.
    pub data: serde_json::Value,
}

impl Notification {
    /// Notification to the chef channel for a newly created reservation.
    pub fn new_reservation(reservation: &Reservation) -> Self {
        Notification {
            id: new_id(),
            user_id: CHEF_CHANNEL.to_string(),
            kind: NotificationKind::NewReservation,
            title: "New reservation".to_string(),
            message: format!(
                "{} reserved a {} for {}",
                reservation.user_name, reservation.cake_name, reservation.date
            ),
            read: false,
            created_at: now(),
            data: json!({ "reservation_id": reservation.id }),
        }
    }

    /// Notification to the requester for a decided reservation.
    ///
    /// The payload carries the resulting status so the client can render
    /// the outcome without refetching the reservation.
    pub fn reservation_update(reservation: &Reservation) -> Self {
        let verdict = match reservation.status {
            ReservationStatus::Accepted => "accepted",
            ReservationStatus::Refused => "refused",
            // The emitter is only invoked after a validated transition.
            ReservationStatus::Pending => "updated",
        };
        Notification {
            id: new_id(),
            user_id: reservation.user_id.clone(),
            kind: NotificationKind::ReservationUpdate,
            title: "Reservation update".to_string(),
            message: format!(
                "Your reservation of {} for {} was {verdict}",
                reservation.cake_name, reservation.date
            ),
            read: false,
            created_at: now(),
            data: json!({
                "reservation_id": reservation.id,
                "status": reservation.status,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Date;

    fn sample_reservation(status: ReservationStatus) -> Reservation {
        Reservation {
            id: "r1".into(),
            cake_id: "c1".into(),
            user_id: "u1".into(),
            user_name: "client123".into(),
            cake_name: "Gâteau basque".into(),
            date: Date::from_ymd_opt(2025, 6, 1).unwrap(),
            status,
            created_at: now(),
        }
    }

    #[test]
    fn test_new_reservation_targets_chef_channel() {
        let n = Notification::new_reservation(&sample_reservation(ReservationStatus::Pending));
        assert_eq!(n.user_id, CHEF_CHANNEL);
        assert_eq!(n.kind, NotificationKind::NewReservation);
        assert!(!n.read);
        assert_eq!(n.data["reservation_id"], "r1");
    }

    #[test]
    fn test_update_targets_requester_with_status() {
        let n = Notification::reservation_update(&sample_reservation(ReservationStatus::Accepted));
        assert_eq!(n.user_id, "u1");
        assert_eq!(n.kind, NotificationKind::ReservationUpdate);
        assert_eq!(n.data["status"], "accepted");
        assert!(n.message.contains("accepted"));
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&NotificationKind::NewReservation).unwrap();
        assert_eq!(json, "\"new_reservation\"");
    }
}
