//! Recurring job scheduling on a cooperative poll loop.
//!
//! The scheduler is a plain value owned by the entry point: jobs are
//! registered against it at startup and the whole thing is dropped at
//! shutdown. Due jobs run inline, one at a time, on the loop's own task; a
//! job that overruns its period delays its next run rather than skipping it
//! or running concurrently with itself.

use std::future::Future;

use anyhow::Result;
use futures_util::future::BoxFuture;
use tokio::time::{sleep, Duration, Instant};
use tracing::{debug, error};

use crate::config::SCHEDULER_TICK_SECS;

type JobFuture = BoxFuture<'static, Result<()>>;
type JobFn = Box<dyn FnMut() -> JobFuture + Send>;

struct ScheduledJob {
    name: &'static str,
    interval: Duration,
    next_due: Instant,
    run: JobFn,
}

/// Registry of recurring jobs plus the poll loop that drives them.
pub struct Scheduler {
    jobs: Vec<ScheduledJob>,
    tick: Duration,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            tick: Duration::from_secs(SCHEDULER_TICK_SECS),
        }
    }

    /// Register a recurring job. The first run falls due one full interval
    /// after registration.
    pub fn every<F, Fut>(&mut self, name: &'static str, interval: Duration, mut job: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let run: JobFn = Box::new(move || -> JobFuture { Box::pin(job()) });
        self.jobs.push(ScheduledJob {
            name,
            interval,
            next_due: Instant::now() + interval,
            run,
        });
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Run every due job inline, sequentially. A failed cycle is logged and
    /// skipped; the job stays registered and its next run is scheduled one
    /// interval after this one finished.
    pub async fn run_pending(&mut self) {
        for job in &mut self.jobs {
            if Instant::now() < job.next_due {
                continue;
            }

            debug!("[SCHED] Job '{}' due, running", job.name);
            let started = Instant::now();
            match (job.run)().await {
                Ok(()) => {
                    debug!(
                        "[SCHED] Job '{}' finished in {:?}",
                        job.name,
                        started.elapsed()
                    );
                }
                Err(e) => {
                    error!(
                        "[SCHED] Job '{}' failed, skipping this cycle: {:#}",
                        job.name, e
                    );
                }
            }
            job.next_due = Instant::now() + job.interval;
        }
    }

    /// Poll for due jobs forever, sleeping one tick quantum between checks.
    /// Only external process termination stops the loop.
    pub async fn run_forever(&mut self) {
        loop {
            self.run_pending().await;
            sleep(self.tick).await;
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::advance;

    fn counting_job(counter: Arc<AtomicUsize>) -> impl FnMut() -> BoxFuture<'static, Result<()>> {
        move || {
            let counter = counter.clone();
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_job_does_not_run_before_interval() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut sched = Scheduler::new();
        sched.every("count", Duration::from_secs(300), counting_job(counter.clone()));

        sched.run_pending().await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        advance(Duration::from_secs(299)).await;
        sched.run_pending().await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_job_runs_when_due_and_reschedules() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut sched = Scheduler::new();
        sched.every("count", Duration::from_secs(300), counting_job(counter.clone()));

        advance(Duration::from_secs(300)).await;
        sched.run_pending().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        // Not due again until another full interval has elapsed
        sched.run_pending().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        advance(Duration::from_secs(300)).await;
        sched.run_pending().await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_cycle_keeps_schedule_alive() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let seen = attempts.clone();
        let mut sched = Scheduler::new();
        sched.every("flaky", Duration::from_secs(60), move || {
            let seen = seen.clone();
            async move {
                if seen.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(anyhow::anyhow!("bad cycle"))
                } else {
                    Ok(())
                }
            }
        });

        advance(Duration::from_secs(60)).await;
        sched.run_pending().await;
        assert_eq!(attempts.load(Ordering::SeqCst), 1);

        // The failure above must not unregister the job
        advance(Duration::from_secs(60)).await;
        sched.run_pending().await;
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
