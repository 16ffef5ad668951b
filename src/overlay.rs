//! Session-scoped composition of the overlay.

use std::sync::Arc;

use crate::config::OverlayConfig;
use crate::domain::MessageSnapshot;
use crate::formatting::{
    ports::{MessageEditor, Notifier},
    services::{FormatDispatcher, FormatRuleEngine},
};
use crate::menu::{
    domain::{ContextMenu, MenuCommand},
    ports::IdentityProvider,
    services::{CommandOutcome, MenuCommandExecutor, MenuContributionPoint},
};
use crate::visibility::{adapters::HiddenMessageFilter, services::VisibilityStore};

/// One client session's overlay.
///
/// The session owns the hidden set. Dropping the session discards it, and
/// render filters handed out earlier then let every message through.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use marginalia::config::OverlayConfig;
/// use marginalia::domain::MessageSnapshot;
/// use marginalia::formatting::adapters::memory::{InMemoryMessageEditor, RecordingNotifier};
/// use marginalia::menu::{adapters::StaticIdentity, domain::ContextMenu};
/// use marginalia::overlay::OverlaySession;
///
/// let session = OverlaySession::new(
///     &OverlayConfig::default(),
///     Arc::new(StaticIdentity::signed_in("u1")),
///     Arc::new(InMemoryMessageEditor::new()),
///     Arc::new(RecordingNotifier::new()),
/// );
///
/// let mut menu = ContextMenu::default();
/// let message = MessageSnapshot::new("m1", "c1", "u1", "hello");
/// assert_eq!(session.contribute(Some(&message), &mut menu), 5);
/// ```
pub struct OverlaySession<I, E, N>
where
    I: IdentityProvider,
    E: MessageEditor,
    N: Notifier,
{
    store: Arc<VisibilityStore>,
    contribution: MenuContributionPoint<I>,
    executor: MenuCommandExecutor<E, N>,
}

impl<I, E, N> OverlaySession<I, E, N>
where
    I: IdentityProvider,
    E: MessageEditor,
    N: Notifier,
{
    /// Starts a session with the built-in format rules.
    #[must_use]
    pub fn new(
        config: &OverlayConfig,
        identity: Arc<I>,
        editor: Arc<E>,
        notifier: Arc<N>,
    ) -> Self {
        Self::with_engine(config, FormatRuleEngine::new(), identity, editor, notifier)
    }

    /// Starts a session with a custom rule engine.
    #[must_use]
    pub fn with_engine(
        config: &OverlayConfig,
        engine: FormatRuleEngine,
        identity: Arc<I>,
        editor: Arc<E>,
        notifier: Arc<N>,
    ) -> Self {
        let shared_config = Arc::new(config.clone());
        let store = Arc::new(VisibilityStore::new());
        let dispatcher = FormatDispatcher::with_failure_notice(
            editor,
            notifier,
            shared_config.edit_failure_notice.as_str(),
        );
        Self {
            contribution: MenuContributionPoint::new(
                identity,
                engine.clone(),
                Arc::clone(&store),
                shared_config,
            ),
            executor: MenuCommandExecutor::new(engine, dispatcher, Arc::clone(&store)),
            store,
        }
    }

    /// Adds overlay entries to a message's context menu.
    pub fn contribute(&self, message: Option<&MessageSnapshot>, menu: &mut ContextMenu) -> usize {
        self.contribution.contribute(message, menu)
    }

    /// Runs the command behind a selected entry.
    pub async fn execute(&self, command: &MenuCommand) -> CommandOutcome {
        self.executor.execute(command).await
    }

    /// Render filter bound to this session's hidden set.
    #[must_use]
    pub fn render_filter(&self) -> HiddenMessageFilter {
        HiddenMessageFilter::new(self.store.reader())
    }
}
