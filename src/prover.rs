//! Asynchronous submission of computations to dedicated worker threads.

use crate::{
    BackendKind, CancelToken, ComputationResult, ComputationState, Error, Iterations, Modulus,
    ModulusRegistry, ProverConfig, ResidueInput, Result,
    backend::{Checkpoint, SquaringBackend},
    computation::{SharedState, iterations, log_failure, run},
};
use alloc::{string::String, sync::Arc};
use core::{
    any::Any,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use std::{
    panic::{self, AssertUnwindSafe},
    sync::Mutex,
    thread,
    time::{Duration, Instant},
};
use tokio::sync::oneshot;
use tracing::debug;

/// Accepts `(modulus, t, x)` submissions and runs each on its own worker thread.
///
/// Submission never blocks and never fails synchronously: every failure, including invalid
/// parameters, is delivered through the returned [`ComputationHandle`]. Parsing and reducing
/// `x` happens on the worker, so oversized inputs do not stall the caller.
#[derive(Clone, Debug)]
pub struct Prover {
    registry: ModulusRegistry,
    backend: Arc<dyn SquaringBackend>,
    timeout: Option<Duration>,
}

impl Prover {
    /// A prover over `registry` using the Montgomery backend and no deadline.
    pub fn new(registry: ModulusRegistry) -> Self {
        Self {
            registry,
            backend: BackendKind::default().backend(),
            timeout: None,
        }
    }

    /// Build a prover from configuration, validating every configured modulus.
    pub fn from_config(config: &ProverConfig) -> Result<Self> {
        Ok(Self {
            registry: config.registry()?,
            backend: config.backend.backend(),
            timeout: config.timeout(),
        })
    }

    /// Replace the squaring backend.
    pub fn with_backend(mut self, backend: Arc<dyn SquaringBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Cancel every computation still running `timeout` after its submission.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The moduli this prover accepts.
    pub fn registry(&self) -> &ModulusRegistry {
        &self.registry
    }

    /// Submit `x^(2^t) mod N` for the modulus registered as `modulus_id`.
    pub fn submit<T, X>(&self, modulus_id: &str, t: T, x: X) -> ComputationHandle
    where
        T: TryInto<Iterations>,
        T::Error: Into<Error>,
        X: Into<ResidueInput>,
    {
        match self.registry.resolve(modulus_id) {
            Ok(modulus) => self.submit_to(modulus, t, x),
            Err(err) => ComputationHandle::failed(err),
        }
    }

    /// Submit `x^(2^t) mod N` for an explicit modulus.
    pub fn submit_to<T, X>(&self, modulus: Arc<Modulus>, t: T, x: X) -> ComputationHandle
    where
        T: TryInto<Iterations>,
        T::Error: Into<Error>,
        X: Into<ResidueInput>,
    {
        let t = match iterations(t) {
            Ok(t) => t,
            Err(err) => return ComputationHandle::failed(err),
        };

        let (tx, rx) = oneshot::channel();
        let cancel = CancelToken::new();
        let state = SharedState::new();
        let job = self.job(modulus, t, x.into(), cancel.clone(), state.clone());

        match job.spawn(move |result| {
            let _ = tx.send(result);
        }) {
            Ok(()) => ComputationHandle { rx, cancel, state },
            Err(err) => ComputationHandle::failed(err),
        }
    }

    /// Submit a computation and deliver its result to `callback` as a string: the fixed-width
    /// hex encoding on success, the empty string on any failure.
    ///
    /// The callback runs on the worker thread, or on the caller's thread if the submission is
    /// rejected before a worker starts. The returned token cancels the computation.
    pub fn submit_with_callback<T, X, F>(
        &self,
        modulus_id: &str,
        t: T,
        x: X,
        callback: F,
    ) -> CancelToken
    where
        T: TryInto<Iterations>,
        T::Error: Into<Error>,
        X: Into<ResidueInput>,
        F: FnOnce(String) + Send + 'static,
    {
        let cancel = CancelToken::new();

        let prepared = self
            .registry
            .resolve(modulus_id)
            .and_then(|modulus| Ok((modulus, iterations(t)?)));

        let (modulus, t) = match prepared {
            Ok(prepared) => prepared,
            Err(err) => {
                log_failure(&err);
                callback(String::new());
                return cancel;
            }
        };

        let job = self.job(modulus, t, x.into(), cancel.clone(), SharedState::new());

        // the closure is handed to the worker only on a successful spawn
        let callback = Arc::new(Mutex::new(Some(callback)));
        let worker_callback = callback.clone();
        if let Err(err) = job.spawn(move |result| {
            if let Some(callback) = take(&worker_callback) {
                callback(result.into_sentinel());
            }
        }) {
            log_failure(&err);
            if let Some(callback) = take(&callback) {
                callback(String::new());
            }
        }

        cancel
    }

    fn job(
        &self,
        modulus: Arc<Modulus>,
        t: Iterations,
        x: ResidueInput,
        cancel: CancelToken,
        state: SharedState,
    ) -> Job {
        Job {
            t,
            x,
            modulus,
            backend: self.backend.clone(),
            cancel,
            deadline: self.timeout.map(|timeout| Instant::now() + timeout),
            state,
        }
    }
}

fn take<F>(slot: &Mutex<Option<F>>) -> Option<F> {
    match slot.lock() {
        Ok(mut guard) => guard.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    }
}

/// Everything a worker thread needs to run one computation.
struct Job {
    t: Iterations,
    x: ResidueInput,
    modulus: Arc<Modulus>,
    backend: Arc<dyn SquaringBackend>,
    cancel: CancelToken,
    deadline: Option<Instant>,
    state: SharedState,
}

impl Job {
    /// Start the worker thread. `deliver` receives the result exactly once, including when
    /// the backend panics.
    fn spawn<D>(self, deliver: D) -> Result<()>
    where
        D: FnOnce(ComputationResult) + Send + 'static,
    {
        debug!(
            iterations = self.t.get(),
            modulus_bits = self.modulus.bits(),
            "submitting computation"
        );

        thread::Builder::new()
            .name("sqr-vdf-worker".into())
            .spawn(move || {
                self.state.set(ComputationState::Running);

                let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.execute()))
                    .unwrap_or_else(|payload| {
                        Err(Error::BackendUnavailable(format!(
                            "worker panicked: {}",
                            panic_message(&*payload)
                        )))
                    });
                if let Err(err) = &outcome {
                    log_failure(err);
                }

                let result = ComputationResult::from(outcome);
                self.state.set(result.state());
                deliver(result);
            })
            .map(drop)
            .map_err(|err| Error::BackendUnavailable(format!("failed to spawn worker: {err}")))
    }

    fn execute(&self) -> Result<String> {
        let start = self.x.resolve(&self.modulus)?;
        let checkpoint = Checkpoint::new(&self.cancel, self.deadline);
        run(self.t, &start, &self.modulus, self.backend.as_ref(), &checkpoint)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Handle to one submitted computation.
///
/// Resolves (as a [`Future`]) to exactly one [`ComputationResult`]. Dropping the handle
/// detaches the computation; call [`ComputationHandle::cancel`] first to stop it.
#[derive(Debug)]
pub struct ComputationHandle {
    rx: oneshot::Receiver<ComputationResult>,
    cancel: CancelToken,
    state: SharedState,
}

impl ComputationHandle {
    /// A handle that is already resolved with `err`.
    fn failed(err: Error) -> Self {
        log_failure(&err);

        let (tx, rx) = oneshot::channel();
        let result = ComputationResult::failure(err);
        let state = SharedState::new();
        state.set(result.state());
        let _ = tx.send(result);

        Self {
            rx,
            cancel: CancelToken::new(),
            state,
        }
    }

    /// Request cancellation. Takes effect at the next step boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A token that cancels this computation, e.g. to hand to another task.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ComputationState {
        self.state.get()
    }

    /// Block the current thread until the computation finishes.
    ///
    /// Panics if called from within an asynchronous execution context; `.await` the handle
    /// there instead.
    pub fn wait(self) -> ComputationResult {
        let result = self.rx.blocking_recv();
        resolve(result, &self.state)
    }
}

impl Future for ComputationHandle {
    type Output = ComputationResult;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<ComputationResult> {
        let this = self.get_mut();
        Pin::new(&mut this.rx)
            .poll(cx)
            .map(|result| resolve(result, &this.state))
    }
}

/// A closed channel means the worker died without reporting.
fn resolve(
    result: core::result::Result<ComputationResult, oneshot::error::RecvError>,
    state: &SharedState,
) -> ComputationResult {
    result.unwrap_or_else(|_| {
        let err = Error::BackendUnavailable("worker terminated without a result".into());
        log_failure(&err);
        state.set(ComputationState::Failed);
        ComputationResult::failure(err)
    })
}
