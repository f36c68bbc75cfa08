/// Identifies a scheduled task so it can be cancelled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

/// Periodic callback scheduling, as offered by the host's game loop.
///
/// Tasks are plain values handed back to the caller when they fire; the caller decides what to
/// do with them. Delays are measured in ticks and a delay of zero means "on the next tick":
/// nothing fires synchronously from the scheduling call.
pub trait Scheduler<T> {
    /// Fires `task` every `interval_ticks` ticks, starting `interval_ticks` from now.
    fn schedule_repeating(&mut self, interval_ticks: u64, task: T) -> TaskHandle;

    fn schedule_once(&mut self, delay_ticks: u64, task: T) -> TaskHandle;

    /// Returns `false` if the task already ran to completion or was cancelled before.
    fn cancel(&mut self, handle: TaskHandle) -> bool;
}

#[derive(Debug, Clone)]
struct ScheduledTask<T> {
    handle: TaskHandle,
    task: T,
    due: u64,
    interval: Option<u64>,
}

/// Cooperative scheduler driven by explicit calls to [`TickScheduler::advance`], one per tick.
#[derive(Debug, Clone)]
pub struct TickScheduler<T> {
    current_tick: u64,
    next_handle: u64,
    tasks: Vec<ScheduledTask<T>>,
}

impl<T> Default for TickScheduler<T> {
    fn default() -> Self {
        Self {
            current_tick: 0,
            next_handle: 0,
            tasks: Vec::new(),
        }
    }
}

impl<T: Clone> TickScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Number of tasks still waiting to fire
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Moves time forward by one tick and returns the tasks due on it, in scheduling order.
    /// One-shot tasks are dropped once returned; repeating tasks are rescheduled.
    pub fn advance(&mut self) -> Vec<(TaskHandle, T)> {
        self.current_tick += 1;
        let now = self.current_tick;
        let mut fired = Vec::new();

        self.tasks.retain_mut(|scheduled| {
            if scheduled.due > now {
                return true;
            }
            fired.push((scheduled.handle, scheduled.task.clone()));
            match scheduled.interval {
                Some(interval) => {
                    scheduled.due = now + interval;
                    true
                }
                None => false,
            }
        });

        fired
    }

    fn push(&mut self, delay: u64, interval: Option<u64>, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.tasks.push(ScheduledTask {
            handle,
            task,
            due: self.current_tick + delay.max(1),
            interval,
        });
        handle
    }
}

impl<T: Clone> Scheduler<T> for TickScheduler<T> {
    fn schedule_repeating(&mut self, interval_ticks: u64, task: T) -> TaskHandle {
        let interval = interval_ticks.max(1);
        self.push(interval, Some(interval), task)
    }

    fn schedule_once(&mut self, delay_ticks: u64, task: T) -> TaskHandle {
        self.push(delay_ticks, None, task)
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }
}
