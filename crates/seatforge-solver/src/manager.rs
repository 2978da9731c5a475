//! Background seating runs.
//!
//! Provides the high-level API for:
//! - Running the engine on a worker thread
//! - Waiting for the result from sync or async code

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::thread::JoinHandle;

use tokio::sync::oneshot;
use tracing::debug;

use seatforge_core::{Result, SeatForgeError, SeatingProblem};

use crate::engine::SeatingEngine;
use crate::result::SeatingResult;

/// Dispatches seating runs to worker threads.
///
/// Each job gets its own owned copy of the problem, so callers may keep
/// editing their data while a run is in flight. Runs cannot be cancelled;
/// dropping the [`SeatingJob`] discards the result.
#[derive(Debug, Clone, Default)]
pub struct SeatingManager {
    engine: Arc<SeatingEngine>,
}

impl SeatingManager {
    pub fn new(engine: SeatingEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &SeatingEngine {
        &self.engine
    }

    /// Starts a run on a new thread and returns a handle to its result.
    pub fn solve_in_background(&self, problem: SeatingProblem) -> SeatingJob {
        let (sender, receiver) = oneshot::channel();
        let engine = Arc::clone(&self.engine);

        let handle = std::thread::spawn(move || {
            let result = engine.solve(&problem);
            if sender.send(result).is_err() {
                debug!(event = "result_discarded");
            }
        });

        SeatingJob {
            receiver,
            handle,
            taken: false,
        }
    }
}

/// Handle to a seating run executing on another thread.
///
/// Await it from async code, or call [`SeatingJob::blocking_wait`] from a
/// plain thread. Either way a worker that dies before delivering yields
/// [`SeatForgeError::Cancelled`]. The result is handed out once.
#[derive(Debug)]
pub struct SeatingJob {
    receiver: oneshot::Receiver<SeatingResult>,
    handle: JoinHandle<()>,
    taken: bool,
}

impl SeatingJob {
    /// Returns true once the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks the current thread until the result arrives.
    ///
    /// Must not be called from within an async runtime; await the job there.
    pub fn blocking_wait(self) -> Result<SeatingResult> {
        let SeatingJob {
            receiver,
            handle,
            taken,
        } = self;
        let result = if taken {
            Err(SeatForgeError::Cancelled)
        } else {
            receiver
                .blocking_recv()
                .map_err(|_| SeatForgeError::Cancelled)
        };
        // a panicked worker already closed the channel
        let _ = handle.join();
        result
    }

    /// Returns true once [`SeatingJob::try_result`] has handed out the
    /// result.
    pub fn is_taken(&self) -> bool {
        self.taken
    }

    /// Takes the result if it is ready.
    ///
    /// Returns `None` while the run is in flight and on every call after the
    /// result has been taken.
    pub fn try_result(&mut self) -> Option<Result<SeatingResult>> {
        if self.taken {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.taken = true;
                Some(Ok(result))
            }
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(SeatForgeError::Cancelled)),
        }
    }
}

impl Future for SeatingJob {
    type Output = Result<SeatingResult>;

    /// Resolves to [`SeatForgeError::Cancelled`] when the result was already
    /// taken with [`SeatingJob::try_result`].
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.taken {
            return Poll::Ready(Err(SeatForgeError::Cancelled));
        }
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.map_err(|_| SeatForgeError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_test::classroom_problem;

    #[test]
    fn test_blocking_wait() {
        let manager = SeatingManager::new(SeatingEngine::with_seed(11));
        let problem = classroom_problem();

        let result = manager
            .solve_in_background(problem.clone())
            .blocking_wait()
            .unwrap();

        let direct = manager.engine().solve(&problem);
        assert_eq!(result.assignment, direct.assignment);
        assert_eq!(result.seed, 11);
    }

    #[test]
    fn test_try_result_eventually_ready() {
        let manager = SeatingManager::default();
        let mut job = manager.solve_in_background(classroom_problem());

        let result = loop {
            if let Some(result) = job.try_result() {
                break result.unwrap();
            }
            std::thread::yield_now();
        };
        assert_eq!(result.assignment.len(), 30);
        assert!(job.is_taken());
        assert!(job.try_result().is_none());
        assert!(job.try_result().is_none());
    }

    #[tokio::test]
    async fn test_await_job() {
        let manager = SeatingManager::new(SeatingEngine::with_seed(5));
        let jobs: Vec<SeatingJob> = (0..4)
            .map(|_| manager.solve_in_background(classroom_problem()))
            .collect();

        let mut results = Vec::new();
        for job in jobs {
            results.push(job.await.unwrap());
        }
        assert!(results.windows(2).all(|w| w[0].assignment == w[1].assignment));
    }
}
