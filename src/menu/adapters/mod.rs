//! Adapter implementations for menu ports.

use crate::domain::UserId;

use super::ports::IdentityProvider;

/// Identity provider returning a fixed user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentity {
    user_id: Option<UserId>,
}

impl StaticIdentity {
    /// Identity for a signed-in user.
    #[must_use]
    pub fn signed_in(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// Identity with no signed-in user.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self { user_id: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user_id(&self) -> Option<UserId> {
        self.user_id.clone()
    }
}
