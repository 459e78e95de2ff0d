//! Change notification for threads.
//!
//! A [`Thread`](crate::thread::Thread) pushes its current ordered contents to
//! every registered observer after each edit call, synchronously and in
//! registration order.

use std::sync::{Arc, Mutex};

/// Receives the ordered segment contents after every edit call.
///
/// Must be `Send + Sync` so a thread with observers can move between
/// threads.
pub trait ThreadObserver: Send + Sync {
    fn on_change(&self, contents: &[String]);
}

impl<F> ThreadObserver for F
where
    F: Fn(&[String]) + Send + Sync,
{
    fn on_change(&self, contents: &[String]) {
        self(contents)
    }
}

/// Ordered set of observers attached to one thread.
#[derive(Default, Clone)]
pub(crate) struct ObserverSet {
    observers: Vec<Arc<dyn ThreadObserver>>,
}

impl ObserverSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, observer: Arc<dyn ThreadObserver>) {
        self.observers.push(observer);
    }

    pub(crate) fn notify(&self, contents: &[String]) {
        for observer in &self.observers {
            observer.on_change(contents);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Observer wrapping a boxed callback.
pub struct CallbackObserver {
    callback: Box<dyn Fn(&[String]) + Send + Sync>,
}

impl CallbackObserver {
    pub fn new(callback: impl Fn(&[String]) + Send + Sync + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl ThreadObserver for CallbackObserver {
    fn on_change(&self, contents: &[String]) {
        (self.callback)(contents);
    }
}

/// Observer that keeps every notification in memory (for tests / inspection).
#[derive(Debug, Default)]
pub struct RecordingObserver {
    snapshots: Mutex<Vec<Vec<String>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<Vec<String>> {
        self.lock().clone()
    }

    /// Most recent notification, if any
    pub fn last(&self) -> Option<Vec<String>> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<String>>> {
        self.snapshots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ThreadObserver for RecordingObserver {
    fn on_change(&self, contents: &[String]) {
        self.lock().push(contents.to_vec());
    }
}
