//! Main queue
//!
//! A cooperative, single-threaded task queue standing in for the UI thread's
//! run loop. Work posted here runs on the next `run_pending` pass, after the
//! current layout pass has finished.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// A unit of deferred work
pub type Task = Box<dyn FnOnce() + Send>;

/// Cloneable handle to the main queue
#[derive(Clone, Default)]
pub struct MainQueue {
    tasks: Arc<Mutex<VecDeque<Task>>>,
}

impl MainQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task for the next pass
    pub fn post<F: FnOnce() + Send + 'static>(&self, task: F) {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Box::new(task));
    }

    /// Run every task queued before this call
    ///
    /// Tasks posted while draining wait for the next pass. Returns the number
    /// of tasks that ran.
    pub fn run_pending(&self) -> usize {
        // Take the batch first so tasks can post without deadlocking
        let batch: VecDeque<Task> =
            std::mem::take(&mut *self.tasks.lock().unwrap_or_else(PoisonError::into_inner));

        let count = batch.len();
        for task in batch {
            task();
        }
        if count > 0 {
            tracing::trace!(count, "main queue pass");
        }
        count
    }

    /// Number of tasks waiting for the next pass
    pub fn len(&self) -> usize {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for MainQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainQueue")
            .field("pending", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_tasks_run_on_next_pass() {
        let queue = MainQueue::new();
        let ran = Arc::new(AtomicUsize::new(0));

        let ran_clone = ran.clone();
        queue.post(move || {
            ran_clone.fetch_add(1, Ordering::SeqCst);
        });

        // Posting does not run anything
        assert_eq!(ran.load(Ordering::SeqCst), 0);
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_tasks_posted_while_draining_wait() {
        let queue = MainQueue::new();
        let ran = Arc::new(AtomicUsize::new(0));

        let inner_queue = queue.clone();
        let ran_clone = ran.clone();
        queue.post(move || {
            let ran_inner = ran_clone.clone();
            inner_queue.post(move || {
                ran_inner.fetch_add(10, Ordering::SeqCst);
            });
            ran_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 11);
    }
}
