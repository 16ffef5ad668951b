//! Shared world state for message menu BDD scenarios.

use std::sync::Arc;

use marginalia::{
    config::OverlayConfig,
    domain::MessageSnapshot,
    formatting::adapters::memory::{InMemoryMessageEditor, RecordingNotifier},
    menu::{adapters::StaticIdentity, domain::ContextMenu, services::CommandOutcome},
    overlay::OverlaySession,
};
use rstest::fixture;

/// Session type used by the BDD world.
pub type TestSession = OverlaySession<StaticIdentity, InMemoryMessageEditor, RecordingNotifier>;

/// Scenario world for message menu behaviour tests.
#[derive(Default)]
pub struct MenuWorld {
    /// Overlay session, created once the user signs in.
    pub session: Option<TestSession>,
    /// Editor shared with the session.
    pub editor: Arc<InMemoryMessageEditor>,
    /// Notifier shared with the session.
    pub notifier: Arc<RecordingNotifier>,
    /// Message the menu is opened on.
    pub message: Option<MessageSnapshot>,
    /// Menu built for the message.
    pub menu: ContextMenu,
    /// Outcome of the last selected entry.
    pub last_outcome: Option<CommandOutcome>,
}

impl MenuWorld {
    /// Starts a session for `user_id` with the default configuration.
    pub fn sign_in(&mut self, user_id: &str) {
        self.session = Some(OverlaySession::new(
            &OverlayConfig::default(),
            Arc::new(StaticIdentity::signed_in(user_id)),
            Arc::clone(&self.editor),
            Arc::clone(&self.notifier),
        ));
    }

    /// Returns the active session.
    ///
    /// # Errors
    ///
    /// Returns an error when no user has signed in.
    pub fn session(&self) -> Result<&TestSession, eyre::Report> {
        self.session
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no signed-in session in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MenuWorld {
    MenuWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
