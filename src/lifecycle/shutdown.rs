//! Shutdown coordination for the service.

use tokio::sync::watch;

/// Coordinator for graceful shutdown.
///
/// The trigger is latched: a task that subscribes after `trigger` still
/// observes it.
#[derive(Clone)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

/// One task's view of the shutdown trigger.
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Fire the trigger. Later calls have no further effect.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Number of live `ShutdownSignal`s.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Resolve once shutdown has been triggered, or the coordinator is gone.
    pub async fn recv(&mut self) {
        let _ = self.rx.wait_for(|triggered| *triggered).await;
    }
}
