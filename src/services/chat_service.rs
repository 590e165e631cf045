use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::models::ChatReply;
use crate::chat;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("a previous chat request is still being processed")]
    Busy,
}

/// Wraps the pure responder with the dashboard's simulated latency: a
/// fixed delay before the reply, and a busy flag that rejects (not
/// queues) a second submission while one is outstanding.
#[derive(Clone)]
pub struct ChatService {
    response_delay: Duration,
    busy: Arc<AtomicBool>,
}

impl ChatService {
    pub fn new(response_delay: Duration) -> Self {
        Self {
            response_delay,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Blank or whitespace-only input is a silent no-op. The delay always
    /// resolves; there is no cancellation or timeout path.
    pub async fn respond(&self, message: &str) -> Result<Option<ChatReply>, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Ok(None);
        }

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ChatError::Busy);
        }
        let _pending = PendingGuard(&self.busy);

        tokio::time::sleep(self.response_delay).await;
        Ok(Some(chat::respond_to(message)))
    }
}

/// Clears the busy flag when the in-flight response completes or is
/// dropped.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
