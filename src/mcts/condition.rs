//! Loop conditions deciding when a search stops.
//!
//! The search checks `should_continue` before each iteration and calls
//! `on_iteration_complete` after it. Iterations are never interrupted, so a
//! deadline can be overrun by at most one rollout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Strategy deciding whether the search loop keeps going.
pub trait LoopCondition {
    /// Check if another iteration should run.
    fn should_continue(&self) -> bool;

    /// Called once after every completed iteration.
    fn on_iteration_complete(&mut self);
}

/// Stop after a fixed number of iterations.
#[derive(Clone, Debug)]
pub struct IterationLimit {
    limit: u64,
    completed: u64,
}

impl IterationLimit {
    pub fn new(limit: u64) -> Self {
        Self { limit, completed: 0 }
    }
}

impl LoopCondition for IterationLimit {
    fn should_continue(&self) -> bool {
        self.completed < self.limit
    }

    fn on_iteration_complete(&mut self) {
        self.completed += 1;
    }
}

/// Stop once a wall-clock budget, measured from construction, runs out.
#[derive(Clone, Debug)]
pub struct TimeLimit {
    deadline: Instant,
}

impl TimeLimit {
    pub fn new(budget: Duration) -> Self {
        Self {
            deadline: Instant::now() + budget,
        }
    }
}

impl LoopCondition for TimeLimit {
    fn should_continue(&self) -> bool {
        Instant::now() < self.deadline
    }

    fn on_iteration_complete(&mut self) {}
}

/// Run until another thread says stop.
///
/// Share it through an `Arc`: the searching thread passes its handle to
/// `run_until` while another keeps one to call [`ExplicitTerminator::set_done`].
#[derive(Debug, Default)]
pub struct ExplicitTerminator {
    done: AtomicBool,
}

impl ExplicitTerminator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the stop flag.
    pub fn set_done(&self, done: bool) {
        self.done.store(done, Ordering::Release);
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

impl LoopCondition for ExplicitTerminator {
    fn should_continue(&self) -> bool {
        !self.is_done()
    }

    fn on_iteration_complete(&mut self) {}
}

impl LoopCondition for Arc<ExplicitTerminator> {
    fn should_continue(&self) -> bool {
        !self.is_done()
    }

    fn on_iteration_complete(&mut self) {}
}

/// A search budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Budget {
    /// Run exactly this many iterations (fewer if the search ends early).
    Iterations(u64),
    /// Run until this much wall-clock time has passed.
    Time(Duration),
}

impl Budget {
    /// Build the loop condition for this budget, starting its clock now.
    #[must_use]
    pub fn condition(self) -> Box<dyn LoopCondition> {
        match self {
            Budget::Iterations(limit) => Box::new(IterationLimit::new(limit)),
            Budget::Time(budget) => Box::new(TimeLimit::new(budget)),
        }
    }
}
