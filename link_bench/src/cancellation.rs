use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// An externally driven stop request, polled between repetitions and between suite runs.
///
/// `poll_cancelled` must not block.  Sources backed by an event queue consume at most one pending event
/// per call.
pub trait CancellationSignal {
    fn poll_cancelled(&mut self) -> bool;
}

/// Never requests cancellation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverCancel;

impl CancellationSignal for NeverCancel {
    fn poll_cancelled(&mut self) -> bool {
        false
    }
}

/// A sticky cancellation flag; clones share the same state, so one clone can be handed to another thread
/// (e.g. a signal handler) while the benchmark polls another.
#[derive(Debug, Default, Clone)]
pub struct CancellationFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl CancellationSignal for CancellationFlag {
    fn poll_cancelled(&mut self) -> bool {
        self.is_cancelled()
    }
}

impl<S: CancellationSignal + ?Sized> CancellationSignal for &mut S {
    fn poll_cancelled(&mut self) -> bool {
        (**self).poll_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_is_shared_and_sticky() {
        let flag = CancellationFlag::new();
        let mut poller = flag.clone();
        assert!(!poller.poll_cancelled());

        flag.cancel();
        assert!(poller.poll_cancelled());
        assert!(poller.poll_cancelled());
    }

    #[test]
    fn test_cancel_from_another_thread() {
        let flag = CancellationFlag::new();
        let remote = flag.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(flag.is_cancelled());
    }

    #[test]
    fn test_never_cancel() {
        let mut s = NeverCancel;
        assert!((0..10).all(|_| !s.poll_cancelled()));
    }
}
