//! Role-based access policy.
//!
//! Route guards consult [`authorize`] before a handler runs; the typed
//! [`AccessDecision`] replaces implicit middleware-array gating.

use super::entities::User;
use super::value_objects::Role;

/// Access tier a route requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRole {
  /// Any authenticated account
  User,
  /// Admin accounts only
  Admin,
}

/// Outcome of a capability check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
  Granted,
  Denied { required: RequiredRole, actual: Role },
}

impl AccessDecision {
  pub fn is_granted(&self) -> bool {
    matches!(self, AccessDecision::Granted)
  }
}

/// Decides whether `user` may reach a route gated at `required`.
///
/// Admins satisfy both tiers; plain users only the `User` tier.
pub fn authorize(user: &User, required: RequiredRole) -> AccessDecision {
  let granted = match required {
    RequiredRole::User => true,
    RequiredRole::Admin => user.role == Role::Admin,
  };

  if granted {
    AccessDecision::Granted
  } else {
    AccessDecision::Denied {
      required,
      actual: user.role,
    }
  }
}
