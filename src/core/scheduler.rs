//! Refresh scheduler: one warm-up frame, then a fixed cadence

use anyhow::Result;
use log::{error, info, trace};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Source of delays between cycles
#[allow(async_fn_in_trait)]
pub trait Clock {
    async fn sleep(&mut self, duration: Duration);
}

/// Real time, via the Tokio timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

impl Clock for TokioClock {
    async fn sleep(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Work done once per cycle
#[allow(async_fn_in_trait)]
pub trait RenderCycle {
    async fn run_cycle(&mut self) -> Result<()>;
}

/// Where the scheduler is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Before the first frame; followed by the short warm-up delay
    WarmUp,
    /// Regular cadence
    Steady,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Shutdown,
    CycleLimit,
}

/// Drives render cycles until shutdown
pub struct Scheduler<C: Clock> {
    clock: C,
    warm_up: Duration,
    interval: Duration,
    state: SchedulerState,
    cycles: u64,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(clock: C, warm_up: Duration, interval: Duration) -> Self {
        Self {
            clock,
            warm_up,
            interval,
            state: SchedulerState::WarmUp,
            cycles: 0,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Completed cycles so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Delay that follows a frame rendered in the current state
    fn delay(&self) -> Duration {
        match self.state {
            SchedulerState::WarmUp => self.warm_up,
            SchedulerState::Steady => self.interval,
        }
    }

    /// Run cycles until `shutdown` turns true or `max_cycles` have run
    ///
    /// Shutdown is observed between cycles and interrupts the wait; a cycle
    /// that has started always finishes. A failed cycle is logged and the
    /// schedule carries on.
    pub async fn run<R: RenderCycle>(
        &mut self,
        cycle: &mut R,
        mut shutdown: watch::Receiver<bool>,
        max_cycles: Option<u64>,
    ) -> RunOutcome {
        loop {
            if *shutdown.borrow() {
                info!("Shutdown requested, stopping after {} cycles", self.cycles);
                return RunOutcome::Shutdown;
            }

            let start = Instant::now();
            if let Err(e) = cycle.run_cycle().await {
                error!("Frame {} failed: {:#}", self.cycles + 1, e);
            }
            trace!("Cycle {} took {:?}", self.cycles + 1, start.elapsed());
            self.cycles += 1;

            let delay = self.delay();
            self.state = SchedulerState::Steady;

            tokio::select! {
                _ = self.clock.sleep(delay) => {}
                changed = shutdown.changed() => {
                    // A dropped sender means nobody can ask for shutdown any more
                    if changed.is_err() {
                        self.clock.sleep(delay).await;
                    }
                }
            }

            if max_cycles.is_some_and(|max| self.cycles >= max) {
                return RunOutcome::CycleLimit;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Virtual time that advances only when slept on
    #[derive(Clone, Default)]
    struct MockClock {
        now: Rc<RefCell<Duration>>,
        sleeps: Rc<RefCell<Vec<Duration>>>,
    }

    impl Clock for MockClock {
        async fn sleep(&mut self, duration: Duration) {
            *self.now.borrow_mut() += duration;
            self.sleeps.borrow_mut().push(duration);
        }
    }

    struct CountingCycle {
        clock: MockClock,
        starts: Vec<Duration>,
        fail_first: bool,
    }

    impl RenderCycle for CountingCycle {
        async fn run_cycle(&mut self) -> Result<()> {
            self.starts.push(*self.clock.now.borrow());
            if self.fail_first && self.starts.len() == 1 {
                anyhow::bail!("display unplugged");
            }
            Ok(())
        }
    }

    fn cycle(clock: &MockClock) -> CountingCycle {
        CountingCycle {
            clock: clock.clone(),
            starts: Vec::new(),
            fail_first: false,
        }
    }

    #[tokio::test]
    async fn test_warm_up_then_steady_cadence() {
        let clock = MockClock::default();
        let mut cycle = cycle(&clock);
        let (_tx, rx) = watch::channel(false);

        let mut scheduler =
            Scheduler::new(clock.clone(), Duration::from_secs(5), Duration::from_secs(60));
        assert_eq!(scheduler.state(), SchedulerState::WarmUp);

        let outcome = scheduler.run(&mut cycle, rx, Some(3)).await;

        assert_eq!(outcome, RunOutcome::CycleLimit);
        assert_eq!(scheduler.cycles(), 3);
        assert_eq!(scheduler.state(), SchedulerState::Steady);
        assert_eq!(
            cycle.starts,
            vec![Duration::ZERO, Duration::from_secs(5), Duration::from_secs(65)]
        );
        assert_eq!(
            *clock.sleeps.borrow(),
            vec![
                Duration::from_secs(5),
                Duration::from_secs(60),
                Duration::from_secs(60)
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_cycle_does_not_stop_loop() {
        let clock = MockClock::default();
        let mut cycle = CountingCycle {
            fail_first: true,
            ..cycle(&clock)
        };
        let (_tx, rx) = watch::channel(false);

        let mut scheduler =
            Scheduler::new(clock.clone(), Duration::from_secs(5), Duration::from_secs(60));
        scheduler.run(&mut cycle, rx, Some(2)).await;
        assert_eq!(cycle.starts.len(), 2);
    }

    #[tokio::test]
    async fn test_shutdown_before_start() {
        let clock = MockClock::default();
        let mut cycle = cycle(&clock);
        let (tx, rx) = watch::channel(false);
        tx.send(true).unwrap();

        let mut scheduler = Scheduler::new(clock, Duration::from_secs(5), Duration::from_secs(60));
        let outcome = scheduler.run(&mut cycle, rx, None).await;
        assert_eq!(outcome, RunOutcome::Shutdown);
        assert!(cycle.starts.is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_interrupts_wait() {
        let (tx, rx) = watch::channel(false);
        let mut cycle = CountingCycle {
            clock: MockClock::default(),
            starts: Vec::new(),
            fail_first: false,
        };

        let stopper = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            tx.send(true).unwrap();
        });

        // Real clock with an hour-long interval: only shutdown can end this
        let mut scheduler =
            Scheduler::new(TokioClock, Duration::from_secs(3600), Duration::from_secs(3600));
        let outcome = tokio::time::timeout(
            Duration::from_secs(10),
            scheduler.run(&mut cycle, rx, None),
        )
        .await
        .expect("shutdown should end the run");

        stopper.await.unwrap();
        assert_eq!(outcome, RunOutcome::Shutdown);
        assert_eq!(cycle.starts.len(), 1);
    }
}
