//! Reduced-motion preference tracking.
//!
//! The platform's media-query facility is abstracted behind [`MotionSignal`]
//! so the watcher works the same against a real window shell or a test mock,
//! and degrades to a fixed default where no facility exists (SSR, CLI).

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// The media query this watcher tracks.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// A media-query-like signal source: current match state plus change
/// notifications. Either side may be unavailable in non-interactive
/// environments.
pub trait MotionSignal: Send + Sync {
    fn current(&self) -> Option<bool>;
    fn subscribe(&self) -> Option<watch::Receiver<bool>>;
}

/// Tracks whether the user prefers reduced motion.
///
/// Starts from a caller-supplied default, synchronously overrides it with
/// the source's current state when available, then follows change
/// notifications until dropped. Never fails; with no usable source it just
/// keeps reporting the default.
pub struct ReducedMotion {
    state: Arc<watch::Sender<bool>>,
    forwarder: Option<JoinHandle<()>>,
}

impl ReducedMotion {
    /// A watcher pinned to `default`, for environments without a
    /// media-query facility.
    pub fn fixed(default: bool) -> Self {
        let (tx, _rx) = watch::channel(default);
        Self {
            state: Arc::new(tx),
            forwarder: None,
        }
    }

    /// Attaches to a signal source. Must be called within a tokio runtime
    /// when the source supports change notifications.
    pub fn attach(source: &dyn MotionSignal, default: bool) -> Self {
        let (tx, _rx) = watch::channel(default);
        let state = Arc::new(tx);

        if let Some(current) = source.current() {
            state.send_replace(current);
        }

        let forwarder = source.subscribe().map(|mut changes| {
            let state = Arc::clone(&state);
            tokio::spawn(async move {
                while changes.changed().await.is_ok() {
                    let matches = *changes.borrow_and_update();
                    state.send_replace(matches);
                }
            })
        });

        Self { state, forwarder }
    }

    pub fn prefers_reduced(&self) -> bool {
        *self.state.borrow()
    }

    /// Change feed for callers that re-render on preference flips.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }
}

impl Drop for ReducedMotion {
    fn drop(&mut self) {
        // Stop forwarding so no update can land after teardown.
        if let Some(task) = self.forwarder.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct MockMediaQuery {
        state: watch::Sender<bool>,
    }

    impl MockMediaQuery {
        fn new(matches: bool) -> Self {
            let (tx, _rx) = watch::channel(matches);
            Self { state: tx }
        }

        fn set(&self, matches: bool) {
            self.state.send_replace(matches);
        }
    }

    impl MotionSignal for MockMediaQuery {
        fn current(&self) -> Option<bool> {
            Some(*self.state.borrow())
        }

        fn subscribe(&self) -> Option<watch::Receiver<bool>> {
            Some(self.state.subscribe())
        }
    }

    struct UnavailableSignal;

    impl MotionSignal for UnavailableSignal {
        fn current(&self) -> Option<bool> {
            None
        }

        fn subscribe(&self) -> Option<watch::Receiver<bool>> {
            None
        }
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    #[tokio::test]
    async fn reads_initial_state_from_the_source() {
        let mock = MockMediaQuery::new(true);
        let motion = ReducedMotion::attach(&mock, false);
        assert!(motion.prefers_reduced());
    }

    #[tokio::test]
    async fn follows_change_notifications() {
        let mock = MockMediaQuery::new(false);
        let motion = ReducedMotion::attach(&mock, false);
        assert!(!motion.prefers_reduced());

        mock.set(true);
        settle().await;
        assert!(motion.prefers_reduced());

        mock.set(false);
        settle().await;
        assert!(!motion.prefers_reduced());
    }

    #[tokio::test]
    async fn teardown_stops_updates() {
        let mock = MockMediaQuery::new(false);
        let motion = ReducedMotion::attach(&mock, false);
        let rx = motion.subscribe();
        drop(motion);

        mock.set(true);
        settle().await;
        assert!(!*rx.borrow());
    }

    #[tokio::test]
    async fn degrades_to_default_without_a_facility() {
        let motion = ReducedMotion::attach(&UnavailableSignal, true);
        assert!(motion.prefers_reduced());

        let fixed = ReducedMotion::fixed(false);
        assert!(!fixed.prefers_reduced());
    }
}
