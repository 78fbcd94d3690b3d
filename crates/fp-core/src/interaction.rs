//! Designated interaction thread.
//!
//! Host environment queries are only valid on one thread. Callers on other
//! execution contexts marshal their probe calls onto this executor and
//! block until the result comes back. The call itself performs no internal
//! suspension; there is no cancellation or timeout. Thread affinity is
//! enforced here at the call boundary, not by thread checks inside the
//! cache.

use fp_common::{Error, Result};
use std::sync::mpsc;
use std::thread;

type Job = Box<dyn FnOnce() + Send>;

/// Handle to the designated interaction thread.
///
/// Dropping the handle shuts the thread down and joins it.
pub struct InteractionThread {
    sender: Option<mpsc::Sender<Job>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl InteractionThread {
    /// Spawn the interaction thread.
    pub fn spawn() -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let worker = thread::spawn(move || {
            while let Ok(job) = receiver.recv() {
                job();
            }
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Run `task` on the interaction thread, blocking until it completes.
    ///
    /// Fails with [`Error::Dispatch`] if the thread has shut down.
    pub fn run<T, F>(&self, task: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| Error::Dispatch("interaction thread stopped".to_string()))?;

        let (result_tx, result_rx) = mpsc::channel();
        let job: Job = Box::new(move || {
            let _ = result_tx.send(task());
        });

        sender
            .send(job)
            .map_err(|_| Error::Dispatch("interaction thread stopped".to_string()))?;

        result_rx
            .recv()
            .map_err(|_| Error::Dispatch("interaction thread dropped the task".to_string()))
    }

    /// Stop accepting work and join the thread.
    ///
    /// Jobs already queued still run before the thread exits.
    pub fn shutdown(&mut self) {
        // Closing the channel ends the worker loop.
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for InteractionThread {
    fn drop(&mut self) {
        self.shutdown();
    }
}
