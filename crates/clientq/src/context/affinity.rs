//! Execution-context affinity.
//!
//! A [`ContextHandle`] owns a dedicated OS thread running a single-threaded
//! Tokio runtime and a `LocalSet`. Work submitted through the handle always
//! executes on that thread, so resources bound to it (a store session, a
//! `!Send` client) are never touched from anywhere else.
//!
//! Every job runs with the handle installed as a task-local, which lets a
//! caller capture [`ContextHandle::current`] once and route each later step
//! of the same logical operation back onto it.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::Instrument;

type LocalFuture = Pin<Box<dyn Future<Output = ()>>>;
type Job = Box<dyn FnOnce() -> LocalFuture + Send>;

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

tokio::task_local! {
    static CURRENT: Pinned;
}

/// What a job on a context knows about the context it runs on.
///
/// Holds only a weak sender so running work never keeps the job queue open.
#[derive(Clone)]
struct Pinned {
    id: ContextId,
    jobs: mpsc::WeakUnboundedSender<Job>,
}

/// Identifier of an execution context, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx-{}", self.0)
    }
}

/// Errors raised when work cannot be delivered to, or finished on, a context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("Failed to start execution context: {0}")]
    Spawn(String),
    #[error("Execution context {0} is closed")]
    Closed(ContextId),
    #[error("Task on execution context {0} ended without a result")]
    Dropped(ContextId),
}

/// Cloneable handle to a pinned execution context.
///
/// The context thread stops once every handle is dropped, every queued job
/// has been started and every started job has run to completion.
#[derive(Debug, Clone)]
pub struct ContextHandle {
    id: ContextId,
    jobs: mpsc::UnboundedSender<Job>,
}

impl ContextHandle {
    /// Starts a new execution context on a dedicated thread.
    pub fn spawn(name: &str) -> Result<Self, ContextError> {
        let id = ContextId(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed));
        let (jobs, mut job_rx) = mpsc::unbounded_channel::<Job>();
        let weak_jobs = jobs.downgrade();

        std::thread::Builder::new()
            .name(format!("{name}-{id}"))
            .spawn(move || {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(err) => {
                        tracing::error!(context_id = %id, error = %err, "Failed to build context runtime");
                        return;
                    }
                };

                let local = tokio::task::LocalSet::new();
                local.block_on(&rt, async move {
                    tracing::debug!(context_id = %id, "Execution context started");

                    // Ends only when every handle is gone and the queue is empty.
                    while let Some(job) = job_rx.recv().await {
                        let pinned = Pinned {
                            id,
                            jobs: weak_jobs.clone(),
                        };
                        tokio::task::spawn_local(CURRENT.scope(pinned, job()));
                    }
                });

                // Let detached work that is still in flight finish.
                rt.block_on(local);
                tracing::debug!(context_id = %id, "Execution context stopped");
            })
            .map_err(|e| ContextError::Spawn(e.to_string()))?;

        Ok(Self { id, jobs })
    }

    /// Returns the context the calling task is running on, if any.
    ///
    /// Work still draining after every handle was dropped sees `None`.
    pub fn current() -> Option<Self> {
        CURRENT
            .try_with(|pinned| {
                pinned.jobs.upgrade().map(|jobs| ContextHandle {
                    id: pinned.id,
                    jobs,
                })
            })
            .ok()
            .flatten()
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Returns true if the calling task is already running on this context.
    pub fn is_current(&self) -> bool {
        CURRENT.try_with(|pinned| pinned.id == self.id).unwrap_or(false)
    }

    /// Runs `task` on this context and waits for its output.
    ///
    /// The future built by `task` does not need to be `Send`: it is created
    /// and polled on the context thread only. The caller's tracing span is
    /// carried over. Already on this context, the work is spawned locally
    /// instead of going through the job queue.
    pub async fn run<F, Fut, T>(&self, task: F) -> Result<T, ContextError>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + 'static,
        T: Send + 'static,
    {
        let span = tracing::Span::current();

        if self.is_current() {
            let handle = tokio::task::spawn_local(
                CURRENT.scope(self.pinned(), async move { task().await }.instrument(span)),
            );
            return handle.await.map_err(|_| ContextError::Dropped(self.id));
        }

        let (reply_tx, reply_rx) = oneshot::channel();
        self.submit(Box::new(move || -> LocalFuture {
            let work = async move {
                let output = task().await;
                // Receiver gone means the caller stopped waiting.
                let _ = reply_tx.send(output);
            };
            Box::pin(work.instrument(span))
        }))?;

        reply_rx.await.map_err(|_| ContextError::Dropped(self.id))
    }

    /// Starts `task` on this context without waiting for it.
    ///
    /// Only delivery is reported; the task's own outcome is its business.
    pub fn spawn_detached<F, Fut>(&self, task: F) -> Result<(), ContextError>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let span = tracing::Span::current();

        if self.is_current() {
            tokio::task::spawn_local(
                CURRENT.scope(self.pinned(), async move { task().await }.instrument(span)),
            );
            return Ok(());
        }

        self.submit(Box::new(move || -> LocalFuture {
            Box::pin(async move { task().await }.instrument(span))
        }))
    }

    fn pinned(&self) -> Pinned {
        Pinned {
            id: self.id,
            jobs: self.jobs.downgrade(),
        }
    }

    fn submit(&self, job: Job) -> Result<(), ContextError> {
        self.jobs
            .send(job)
            .map_err(|_| ContextError::Closed(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use std::time::Duration;

    fn thread_name() -> Option<String> {
        std::thread::current().name().map(str::to_string)
    }

    #[tokio::test]
    async fn test_run_executes_on_context_thread() {
        let ctx = ContextHandle::spawn("test-ctx").unwrap();
        let expected = format!("test-ctx-{}", ctx.id());

        let name = ctx.run(|| async { thread_name() }).await.unwrap();

        assert_eq!(name, Some(expected));
        assert_ne!(name, thread_name());
    }

    #[tokio::test]
    async fn test_current_is_set_inside_context_only() {
        let ctx = ContextHandle::spawn("test-ctx").unwrap();

        assert!(ContextHandle::current().is_none());
        assert!(!ctx.is_current());

        let inside = ctx
            .run(|| async { ContextHandle::current().map(|c| c.id()) })
            .await
            .unwrap();

        assert_eq!(inside, Some(ctx.id()));
    }

    #[tokio::test]
    async fn test_nested_run_stays_on_same_context() {
        let ctx = ContextHandle::spawn("test-ctx").unwrap();

        let (outer, inner) = ctx
            .run(|| async {
                let outer = thread_name();
                let current = ContextHandle::current().expect("running on a context");
                let inner = current.run(|| async { thread_name() }).await.unwrap();
                (outer, inner)
            })
            .await
            .unwrap();

        assert_eq!(outer, inner);
    }

    #[tokio::test]
    async fn test_run_accepts_non_send_futures() {
        let ctx = ContextHandle::spawn("test-ctx").unwrap();

        let value = ctx
            .run(|| async {
                let shared = Rc::new(21);
                tokio::task::yield_now().await;
                *shared * 2
            })
            .await
            .unwrap();

        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_distinct_contexts_use_distinct_threads() {
        let first = ContextHandle::spawn("test-ctx").unwrap();
        let second = ContextHandle::spawn("test-ctx").unwrap();

        assert_ne!(first.id(), second.id());

        let a = first.run(|| async { thread_name() }).await.unwrap();
        let b = second.run(|| async { thread_name() }).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_spawn_detached_runs_on_context() {
        let ctx = ContextHandle::spawn("test-ctx").unwrap();
        let (tx, rx) = oneshot::channel();

        ctx.spawn_detached(move || async move {
            let _ = tx.send(ContextHandle::current().map(|c| c.id()));
        })
        .unwrap();

        let observed = tokio::time::timeout(Duration::from_secs(2), rx)
            .await
            .expect("detached task should finish")
            .unwrap();
        assert_eq!(observed, Some(ctx.id()));
    }

    #[tokio::test]
    async fn test_detached_work_finishes_after_last_handle_dropped() {
        let ctx = ContextHandle::spawn("test-ctx").unwrap();
        let (tx, rx) = oneshot::channel();

        ctx.spawn_detached(move || async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            let _ = tx.send(thread_name());
        })
        .unwrap();
        drop(ctx);

        let observed = tokio::time::timeout(Duration::from_secs(2), rx)
            .await
            .expect("detached task should finish")
            .unwrap();
        assert!(observed.is_some_and(|name| name.starts_with("test-ctx-")));
    }

    #[tokio::test]
    async fn test_current_is_none_while_draining() {
        let ctx = ContextHandle::spawn("test-ctx").unwrap();
        let (tx, rx) = oneshot::channel();

        ctx.spawn_detached(move || async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            let _ = tx.send(ContextHandle::current().is_some());
        })
        .unwrap();
        drop(ctx);

        let has_current = tokio::time::timeout(Duration::from_secs(2), rx)
            .await
            .expect("detached task should finish")
            .unwrap();
        assert!(!has_current);
    }

    #[tokio::test]
    async fn test_panicking_task_reports_dropped() {
        let ctx = ContextHandle::spawn("test-ctx").unwrap();

        let result: Result<(), ContextError> = ctx
            .run(|| async {
                if true {
                    panic!("task failed");
                }
            })
            .await;

        assert_eq!(result, Err(ContextError::Dropped(ctx.id())));

        // The context keeps serving work after a task panics.
        let after = ctx.run(|| async { 7 }).await.unwrap();
        assert_eq!(after, 7);
    }
}
