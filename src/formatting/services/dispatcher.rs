//! Format dispatcher: turns a chosen rule into a remote edit.

use std::sync::Arc;

use tracing::{debug, error};

use crate::formatting::{
    domain::{DispatchOutcome, FormatRequest},
    ports::{EditMessageRequest, MessageEditor, Notifier, Severity},
};

/// Notification shown when an edit is not applied.
pub const DEFAULT_FAILURE_NOTICE: &str = "Failed to edit message.";

/// Applies one rule to one message and reports the result.
///
/// The dispatcher holds no per-call state, so one instance can serve any
/// number of concurrent dispatches.
#[derive(Clone)]
pub struct FormatDispatcher<E, N>
where
    E: MessageEditor,
    N: Notifier,
{
    editor: Arc<E>,
    notifier: Arc<N>,
    failure_notice: Arc<str>,
}

impl<E, N> FormatDispatcher<E, N>
where
    E: MessageEditor,
    N: Notifier,
{
    /// Creates a dispatcher using [`DEFAULT_FAILURE_NOTICE`].
    #[must_use]
    pub fn new(editor: Arc<E>, notifier: Arc<N>) -> Self {
        Self::with_failure_notice(editor, notifier, DEFAULT_FAILURE_NOTICE)
    }

    /// Creates a dispatcher with a custom failure notification text.
    #[must_use]
    pub fn with_failure_notice(
        editor: Arc<E>,
        notifier: Arc<N>,
        failure_notice: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            editor,
            notifier,
            failure_notice: failure_notice.into(),
        }
    }

    /// Returns the notifier used for outcome reporting.
    #[must_use]
    pub const fn notifier(&self) -> &Arc<N> {
        &self.notifier
    }

    /// Returns the generic failure notification text.
    #[must_use]
    pub fn failure_notice(&self) -> &str {
        &self.failure_notice
    }

    /// Transforms the content and submits exactly one edit.
    ///
    /// Success shows the rule's confirmation; any failure shows the generic
    /// failure notice and is logged. Nothing is retried and no local copy of
    /// the message is touched.
    pub async fn dispatch(&self, request: &FormatRequest) -> DispatchOutcome {
        let rule = &request.rule;
        let Some(new_content) =
            super::isolation::transform_isolated(rule, &request.original_content)
        else {
            error!(
                channel_id = %request.channel_id,
                message_id = %request.message_id,
                rule_id = rule.id(),
                "format rule transform panicked; edit not submitted"
            );
            self.notifier.notify(&self.failure_notice, Severity::Failure);
            return DispatchOutcome::Failed;
        };

        let edit = EditMessageRequest::new(
            request.channel_id.clone(),
            request.message_id.clone(),
            new_content,
        );
        match self.editor.edit_message(&edit).await {
            Ok(()) => {
                debug!(
                    message_id = %request.message_id,
                    rule_id = rule.id(),
                    "message formatted"
                );
                self.notifier.notify(rule.confirmation(), Severity::Success);
                DispatchOutcome::Applied {
                    new_content: edit.content,
                }
            }
            Err(err) => {
                error!(
                    channel_id = %request.channel_id,
                    message_id = %request.message_id,
                    rule_id = rule.id(),
                    error = %err,
                    "failed to edit message"
                );
                self.notifier.notify(&self.failure_notice, Severity::Failure);
                DispatchOutcome::Failed
            }
        }
    }
}
