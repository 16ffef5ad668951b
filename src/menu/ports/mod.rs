//! Port trait definitions for the menu subsystem.

use crate::domain::UserId;

/// Port exposing the signed-in user.
///
/// Queried once per menu build.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    /// Returns the current user's identifier, or `None` when signed out.
    fn current_user_id(&self) -> Option<UserId>;
}
