//! Entity types persisted in the store snapshot.

pub mod cake;
pub mod notification;
pub mod reservation;
pub mod user;

pub use cake::Cake;
pub use notification::{Notification, NotificationKind};
pub use reservation::{BlockedDate, Decision, Reservation, ReservationStatus};
pub use user::User;
