//! Collapses bursts of calls (typeahead search) into one delayed invocation.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Holds at most one pending invocation.
///
/// Triggers called outside a Tokio runtime are dropped with a warning.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `callback` so that it only runs once `window` has passed since
    /// the last call of the returned trigger, with that call's argument.
    ///
    /// Each trigger call aborts the timer armed by the previous one. Once the
    /// timer fires the callback runs as its own task, so later triggers no
    /// longer affect it.
    pub fn debounce<A, F, Fut>(
        &self,
        callback: F,
        window: Duration,
    ) -> impl Fn(A) + Send + Sync + 'static
    where
        A: Send + 'static,
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let pending = self.pending.clone();
        let callback = Arc::new(callback);
        move |arg: A| {
            let Ok(runtime) = Handle::try_current() else {
                log::warn!("debounced call dropped: no Tokio runtime is running");
                return;
            };
            let callback = callback.clone();
            let timer = runtime.spawn(async move {
                tokio::time::sleep(window).await;
                tokio::spawn((*callback)(arg));
            });
            let previous = pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .replace(timer);
            if let Some(previous) = previous {
                previous.abort();
            }
        }
    }

    /// Cancels the pending invocation, if any.
    pub fn clear_timer(&self) {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(timer) = pending {
            timer.abort();
        }
    }

    /// Whether a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}
