// crates/roomfinder-core/src/schedule.rs
use std::time::Duration;

/// Handle for a scheduled task; pass it to [`DeferredQueue::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Deferred one-shot tasks over a caller-supplied monotonic clock.
///
/// `now` is whatever the host measures time in (page uptime, `Date.now()`
/// converted to a `Duration`, ...), as long as it never goes backwards. Each
/// scheduled task fires exactly once, either when [`run_due`] sees its
/// deadline pass or when [`flush`] is called on a completion signal. Tasks
/// scheduled back to back are independent: both fire.
///
/// [`run_due`]: DeferredQueue::run_due
/// [`flush`]: DeferredQueue::flush
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    next_id: u64,
    pending: Vec<(TaskId, Duration)>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Duration, delay: Duration) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, now.saturating_add(delay)));
        id
    }

    /// Returns `false` if the task already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(t, _)| *t != id);
        self.pending.len() != before
    }

    /// Remove and return every task whose deadline is at or before `now`,
    /// in scheduling order.
    pub fn run_due(&mut self, now: Duration) -> Vec<TaskId> {
        let mut fired = Vec::new();
        self.pending.retain(|&(id, deadline)| {
            if deadline <= now {
                fired.push(id);
                false
            } else {
                true
            }
        });
        fired
    }

    /// Fire everything immediately, regardless of deadlines.
    pub fn flush(&mut self) -> Vec<TaskId> {
        self.pending.drain(..).map(|(id, _)| id).collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Earliest pending deadline, for hosts that arm a single timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|&(_, d)| d).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_once_after_deadline() {
        let mut q = DeferredQueue::new();
        let id = q.schedule(ms(0), ms(250));
        assert!(q.run_due(ms(249)).is_empty());
        assert_eq!(q.run_due(ms(250)), vec![id]);
        assert!(q.run_due(ms(1_000)).is_empty());
    }

    #[test]
    fn overlapping_tasks_both_fire() {
        let mut q = DeferredQueue::new();
        let a = q.schedule(ms(0), ms(250));
        let b = q.schedule(ms(100), ms(250));
        assert_eq!(q.next_deadline(), Some(ms(250)));
        assert_eq!(q.run_due(ms(400)), vec![a, b]);
    }

    #[test]
    fn cancel_and_flush() {
        let mut q = DeferredQueue::new();
        let a = q.schedule(ms(0), ms(250));
        let b = q.schedule(ms(0), ms(250));
        assert!(q.cancel(a));
        assert!(!q.cancel(a));
        assert_eq!(q.flush(), vec![b]);
        assert_eq!(q.pending(), 0);
    }
}
