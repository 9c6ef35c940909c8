//! Background submission worker.
//!
//! Requests run on a tokio runtime so the event loop keeps drawing while the
//! endpoint is slow. Outcomes come back over a channel and are applied on the
//! UI thread.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};

use crate::client::{Generation, PredictionService, SubmissionError};
use crate::model::{PredictionRequest, PredictionResult};

/// The settled result of one submission.
#[derive(Debug)]
pub struct SubmissionOutcome {
    /// Which submission this belongs to.
    pub generation: Generation,
    pub result: Result<PredictionResult, SubmissionError>,
}

/// Runs submissions off the UI thread.
pub struct SubmissionWorker<S> {
    runtime: Runtime,
    service: Arc<S>,
    tx: Sender<SubmissionOutcome>,
    rx: Receiver<SubmissionOutcome>,
}

impl<S: PredictionService> SubmissionWorker<S> {
    /// Creates a worker with its own runtime.
    pub fn new(service: S) -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("oncocalc-submit")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            runtime,
            service: Arc::new(service),
            tx,
            rx,
        })
    }

    /// Starts a submission. Its outcome is delivered via [`try_recv`](Self::try_recv).
    pub fn spawn(&self, generation: Generation, request: PredictionRequest) {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = service.submit(request).await;
            // The receiver only goes away when the app is shutting down.
            let _ = tx.send(SubmissionOutcome { generation, result });
        });
    }

    /// Returns the next settled outcome without blocking.
    pub fn try_recv(&self) -> Option<SubmissionOutcome> {
        self.rx.try_recv().ok()
    }

    /// Blocks for up to `timeout` waiting for an outcome.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<SubmissionOutcome> {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}
