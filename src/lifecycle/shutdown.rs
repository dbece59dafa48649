//! Shutdown coordination for the listener.

use tokio::sync::watch;

/// Coordinator for graceful shutdown.
///
/// A trigger is remembered, so subscribers created after it fire at once.
/// Dropping the coordinator also releases every subscriber.
#[derive(Debug)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
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

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Future side of [`Shutdown`].
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolves once shutdown is triggered or the coordinator is gone.
    pub async fn recv(mut self) {
        let _ = self.rx.wait_for(|&stop| stop).await;
    }
}
