//! In-memory message editor.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::formatting::ports::{
    EditMessageRequest, MessageEditError, MessageEditResult, MessageEditor,
};

/// Message editor that records requests instead of calling a server.
///
/// Failures can be queued with [`InMemoryMessageEditor::fail_next`]; each
/// queued failure is consumed by exactly one edit call. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageEditor {
    state: Arc<Mutex<EditorState>>,
}

#[derive(Debug, Default)]
struct EditorState {
    submitted: Vec<EditMessageRequest>,
    queued_failures: VecDeque<MessageEditError>,
}

impl InMemoryMessageEditor {
    /// Creates an editor that accepts every edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next edit call fail with `error`.
    pub fn fail_next(&self, error: MessageEditError) {
        self.lock().queued_failures.push_back(error);
    }

    /// Returns every request received so far, including failed ones.
    #[must_use]
    pub fn submitted(&self) -> Vec<EditMessageRequest> {
        self.lock().submitted.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, EditorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl MessageEditor for InMemoryMessageEditor {
    async fn edit_message(&self, request: &EditMessageRequest) -> MessageEditResult<()> {
        let mut state = self.lock();
        state.submitted.push(request.clone());
        state.queued_failures.pop_front().map_or(Ok(()), Err)
    }
}
