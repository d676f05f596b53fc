//! The logical database document.
//!
//! A [`Snapshot`] is the full persisted state: five domain collections plus
//! two collections owned by excluded subsystems (chat, suggestions) that
//! are carried through transactions untouched. The store hands a mutable
//! snapshot to exactly one transaction at a time; all domain logic operates
//! on that borrowed view.

use serde::{Deserialize, Serialize};

use crate::model::{BlockedDate, Cake, Notification, Reservation, User};
use crate::types::Id;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub cakes: Vec<Cake>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub blocked_dates: Vec<BlockedDate>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    /// Owned by the chat subsystem; opaque to the booking engine.
    #[serde(default)]
    pub messages: Vec<serde_json::Value>,
    /// Owned by the suggestion subsystem; opaque to the booking engine.
    #[serde(default)]
    pub suggestions: Vec<serde_json::Value>,
}

impl Snapshot {
    pub fn cake(&self, id: &str) -> Option<&Cake> {
        self.cakes.iter().find(|c| c.id == id)
    }

    pub fn cake_mut(&mut self, id: &str) -> Option<&mut Cake> {
        self.cakes.iter_mut().find(|c| c.id == id)
    }

    pub fn reservation(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn notification(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    /// Notification channels visible to the given user id are exactly the
    /// ids returned by the ownership check in the API layer; here we only
    /// resolve by record id.
    pub fn notification_mut(&mut self, id: &str) -> Option<&mut Notification> {
        self.notifications.iter_mut().find(|n| n.id == id)
    }

    /// Whether a username is taken by any account other than `except_id`.
    pub fn username_taken(&self, username: &str, except_id: Option<&Id>) -> bool {
        self.users
            .iter()
            .any(|u| u.username == username && Some(&u.id) != except_id)
    }
}
