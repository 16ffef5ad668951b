//! Execution of selected menu commands.

use std::sync::Arc;

use tracing::warn;

use crate::formatting::{
    domain::{DispatchOutcome, FormatRequest},
    ports::{MessageEditor, Notifier, Severity},
    services::{FormatDispatcher, FormatRuleEngine},
};
use crate::menu::domain::MenuCommand;
use crate::visibility::services::VisibilityStore;

/// What happened when a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The message was added to the hidden set.
    Hidden,
    /// A format dispatch ran.
    Formatted(DispatchOutcome),
    /// The command named a rule that does not exist.
    UnknownRule(String),
}

/// Runs [`MenuCommand`] values produced by the contribution point.
#[derive(Clone)]
pub struct MenuCommandExecutor<E, N>
where
    E: MessageEditor,
    N: Notifier,
{
    engine: FormatRuleEngine,
    dispatcher: FormatDispatcher<E, N>,
    store: Arc<VisibilityStore>,
}

impl<E, N> MenuCommandExecutor<E, N>
where
    E: MessageEditor,
    N: Notifier,
{
    /// Creates an executor.
    #[must_use]
    pub const fn new(
        engine: FormatRuleEngine,
        dispatcher: FormatDispatcher<E, N>,
        store: Arc<VisibilityStore>,
    ) -> Self {
        Self {
            engine,
            dispatcher,
            store,
        }
    }

    /// Executes a command. Failures are reported to the user, never returned.
    pub async fn execute(&self, command: &MenuCommand) -> CommandOutcome {
        match command {
            MenuCommand::Hide { message_id } => {
                self.store.hide(message_id.clone());
                CommandOutcome::Hidden
            }
            MenuCommand::Format {
                channel_id,
                message_id,
                original_content,
                rule_id,
            } => {
                let Some(rule) = self.engine.find(rule_id) else {
                    warn!(
                        %message_id,
                        rule_id = rule_id.as_str(),
                        "menu command references unknown format rule"
                    );
                    self.dispatcher
                        .notifier()
                        .notify(self.dispatcher.failure_notice(), Severity::Failure);
                    return CommandOutcome::UnknownRule(rule_id.clone());
                };
                let request = FormatRequest::new(
                    channel_id.clone(),
                    message_id.clone(),
                    original_content.clone(),
                    rule,
                );
                CommandOutcome::Formatted(self.dispatcher.dispatch(&request).await)
            }
        }
    }
}
