//! Simulated assistant latency.
//!
//! At most one reply is pending at a time. Scheduling a new reply aborts the pending one,
//! so only the newest user message is answered. A reply that was already sent before the
//! next `schedule` carries an older generation; receivers drop it with
//! [`ReplyTimer::is_current`]. Dropping the timer (the chat view being torn down) aborts
//! the pending reply as well.

use crate::catalog::RecipeCatalog;
use crate::recommend::compose_reply;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantReply {
    /// The `schedule` call that produced this reply.
    pub generation: u64,
    /// The user text this reply answers.
    pub prompt: String,
    pub content: String,
}

pub struct ReplyTimer {
    delay: Duration,
    catalog: Arc<RecipeCatalog>,
    replies: mpsc::UnboundedSender<AssistantReply>,
    pending: Option<JoinHandle<()>>,
    generation: u64,
}

impl ReplyTimer {
    pub fn new(
        delay: Duration,
        catalog: Arc<RecipeCatalog>,
    ) -> (Self, mpsc::UnboundedReceiver<AssistantReply>) {
        let (replies, receiver) = mpsc::unbounded_channel();
        let timer = Self {
            delay,
            catalog,
            replies,
            pending: None,
            generation: 0,
        };
        (timer, receiver)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Answers `prompt` after the delay, replacing any reply still pending.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, prompt: impl Into<String>) {
        self.cancel();

        let generation = self.generation;
        let prompt = prompt.into();
        let delay = self.delay;
        let catalog = Arc::clone(&self.catalog);
        let replies = self.replies.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let content = compose_reply(&prompt, &catalog);
            let reply = AssistantReply {
                generation,
                prompt,
                content,
            };
            if replies.send(reply).is_err() {
                tracing::debug!("reply receiver dropped before delivery");
            }
        }));
    }

    /// Aborts the pending reply. A reply already sent stops being current.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.pending.take()
            && !handle.is_finished()
        {
            tracing::debug!("cancelling pending assistant reply");
            handle.abort();
        }
    }

    /// Whether `reply` answers the most recent `schedule` and nothing cancelled it since.
    pub fn is_current(&self, reply: &AssistantReply) -> bool {
        reply.generation == self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ReplyTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
