//! Authenticated identity and role constants.
//!
//! The core trusts the identity context supplied by the session layer and
//! performs its own authorization only at the granularity "is this a
//! chef-only operation". Roles are plain strings so the API layer can embed
//! them in JWT claims without a round-trip through an enum.

use crate::types::Id;

/// The single privileged identity that owns cakes and decides reservations.
pub const ROLE_CHEF: &str = "chef";

/// A regular customer account.
pub const ROLE_CUSTOMER: &str = "customer";

/// Distinguished notification channel for the chef. Notifications addressed
/// here are visible to the chef account regardless of its user id.
pub const CHEF_CHANNEL: &str = "chef";

/// Authenticated identity context for a mutating call.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Id,
    pub display_name: String,
    pub role: String,
}

impl Identity {
    /// Whether this identity holds the chef role.
    pub fn is_chef(&self) -> bool {
        self.role == ROLE_CHEF
    }
}

/// Validate that a role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), String> {
    if role == ROLE_CHEF || role == ROLE_CUSTOMER {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {ROLE_CHEF}, {ROLE_CUSTOMER}"
        ))
    }
}
