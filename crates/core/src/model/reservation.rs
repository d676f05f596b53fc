use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Date, Id, Timestamp};

/// Reservation lifecycle state.
///
/// `Pending` is the sole non-terminal state and the only state a transition
/// is allowed out of. `Accepted` and `Refused` are terminal; there is no
/// path back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Accepted,
    Refused,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Accepted => "accepted",
            ReservationStatus::Refused => "refused",
        };
        f.write_str(s)
    }
}

/// A chef decision on a pending reservation.
///
/// Deliberately narrower than [`ReservationStatus`]: `pending` is not a
/// decision, so reverting a decided reservation is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Refused,
}

impl Decision {
    /// The status a reservation ends up in after this decision.
    pub fn resulting_status(self) -> ReservationStatus {
        match self {
            Decision::Accepted => ReservationStatus::Accepted,
            Decision::Refused => ReservationStatus::Refused,
        }
    }
}

impl FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Decision::Accepted),
            "refused" => Ok(Decision::Refused),
            other => Err(format!(
                "Unrecognized decision '{other}'. Must be one of: accepted, refused"
            )),
        }
    }
}

/// A customer's request to receive a cake on a specific calendar date,
/// subject to chef decision. Never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Id,
    pub cake_id: Id,
    pub user_id: Id,
    pub user_name: String,
    /// Denormalized for display; fixed at creation time.
    pub cake_name: String,
    pub date: Date,
    pub status: ReservationStatus,
    pub created_at: Timestamp,
}

/// A committed exclusivity record for a `(cake, date)` pair.
///
/// Created exactly when a reservation transitions to `accepted`, in the
/// same transaction as the status write. Never mutated. At most one may
/// exist per `(cake_id, date)` — the invariant the booking engine protects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockedDate {
    pub id: Id,
    pub cake_id: Id,
    pub date: Date,
    /// The reservation whose acceptance caused this block.
    pub reservation_id: Id,
}
