//! Cooperative coroutine scheduler built on the continuation monad.
//!
//! The scheduler owns a FIFO run queue of suspended [`Task`]s. Tasks are
//! never preempted: a task runs until it completes or until it reaches a
//! [`yield_now`](Scheduler::yield_now) point, where its captured rest is
//! parked at the back of the queue and the slice ends. The driving
//! [`run`](Scheduler::run) call is the trampoline: every slice unwinds
//! back to it before the next task is popped, so stack depth is bounded
//! by the composed chain of one slice, not by the number of yields.
//!
//! # Invariants
//!
//! - At most one task executes at a time.
//! - Strict FIFO fairness: N tasks that each yield once run round-robin.
//! - No cancellation, no timeouts, no blocked state - a parked task is
//!   always runnable.
//! - The scheduler lives on one thread (`!Send + !Sync`, statically
//!   asserted); the queue is only touched from that thread.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use effectual::control::{Continuation, Scheduler, Task};
//!
//! let scheduler = Scheduler::new();
//! let log = Rc::new(RefCell::new(Vec::new()));
//!
//! for name in ["one", "two"] {
//!     let before = Rc::clone(&log);
//!     let after = Rc::clone(&log);
//!     let task: Task = Continuation::new(move |success, _failure| {
//!         before.borrow_mut().push(format!("{name} started"));
//!         success(())
//!     })
//!     .then(scheduler.yield_now())
//!     .then(Continuation::new(move |success, _failure| {
//!         after.borrow_mut().push(format!("{name} finished"));
//!         success(())
//!     }));
//!     scheduler.submit(task);
//! }
//!
//! scheduler.run_until_idle().expect("no task faults");
//! assert_eq!(
//!     log.borrow().as_slice(),
//!     ["one started", "two started", "one finished", "two finished"]
//! );
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use static_assertions::assert_not_impl_any;

use super::continuation::{Continuation, Fault};

/// A unit of cooperative work: a continuation producing nothing, faulting
/// with [`Fault`].
pub type Task = Continuation<(), (), Fault>;

/// A single-threaded cooperative scheduler with a FIFO run queue.
///
/// Cloning produces another handle to the same run queue, so a running
/// task can hold a handle and submit further tasks.
///
/// See the [module documentation](self) for the execution model.
#[derive(Clone, Default)]
pub struct Scheduler {
    /// Parked tasks, front is next to run.
    queue: Rc<RefCell<VecDeque<Task>>>,
    /// A fault that escaped a task's top level, awaiting pickup by the
    /// driving `run` call.
    fault: Rc<RefCell<Option<Fault>>>,
}

// Rc-based internals pin the scheduler to one thread.
assert_not_impl_any!(Scheduler: Send, Sync);

impl Scheduler {
    /// Creates a scheduler with an empty run queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks a task at the back of the run queue.
    ///
    /// The task does not start running until a [`run`](Self::run) call
    /// reaches it.
    pub fn submit(&self, task: Task) {
        self.queue.borrow_mut().push_back(task);
    }

    /// Whether the run queue is empty.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// The number of parked tasks.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.queue.borrow().len()
    }

    /// A continuation that offers to hand control to the next parked
    /// task.
    ///
    /// If the queue is empty the current task simply continues. Otherwise
    /// the rest of the current task is captured via call/cc, parked
    /// *behind* every waiting task, and the current slice ends: control
    /// unwinds to the driving [`run`](Self::run) call, which pops the
    /// next task at top level. The parked rest resumes in a later slice
    /// with its value `()`.
    #[must_use]
    pub fn yield_now(&self) -> Task {
        let queue = Rc::clone(&self.queue);
        Continuation::call_with_current_continuation_once(move |suspend| {
            if queue.borrow().is_empty() {
                return Continuation::pure(());
            }

            let rest = suspend(());
            queue.borrow_mut().push_back(rest);

            // End this slice without running anything further in the
            // current frame; the driving `run` call is the trampoline.
            // The yielding task's own callbacks stay parked with its
            // rest.
            Continuation::new(|_success, _failure| {})
        })
    }

    /// Dequeues and runs exactly one task to completion or to its next
    /// yield, discarding its value.
    ///
    /// A no-op `Ok(())` when the queue is empty, so callers can drive
    /// `while !scheduler.is_idle() { scheduler.run()?; }` loops naively.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] of a task whose failure escaped its top
    /// level during this call - a `throw` no `recover` intercepted, or a
    /// panic captured by a protected chain. There is no supervisory
    /// recovery; remaining tasks stay parked and a later `run` can
    /// continue with them.
    pub fn run(&self) -> Result<(), Fault> {
        let task = self.queue.borrow_mut().pop_front();
        if let Some(task) = task {
            let fault_slot = Rc::clone(&self.fault);
            task.run(|()| (), move |error| {
                *fault_slot.borrow_mut() = Some(error);
            });
        }
        match self.fault.borrow_mut().take() {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    /// Runs tasks until the queue drains, stopping at the first fault.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Fault`] a [`run`](Self::run) call reports.
    pub fn run_until_idle(&self) -> Result<(), Fault> {
        while !self.is_idle() {
            self.run()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn step(log: &Rc<RefCell<Vec<String>>>, entry: &str) -> Task {
        let log = Rc::clone(log);
        let entry = entry.to_string();
        Continuation::new(move |success, _failure| {
            log.borrow_mut().push(entry);
            success(())
        })
    }

    #[rstest]
    fn submitted_tasks_stay_queued_until_run() {
        let scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        scheduler.submit(step(&log, "ran"));

        assert_eq!(scheduler.pending_tasks(), 1);
        assert!(log.borrow().is_empty());

        scheduler.run().expect("task does not fault");
        assert_eq!(log.borrow().as_slice(), ["ran"]);
        assert!(scheduler.is_idle());
    }

    #[rstest]
    fn task_without_yields_completes_in_one_run() {
        let scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        scheduler.submit(step(&log, "a").then(step(&log, "b")).then(step(&log, "c")));

        scheduler.run().expect("task does not fault");
        assert_eq!(log.borrow().as_slice(), ["a", "b", "c"]);
        assert!(scheduler.is_idle());
    }

    #[rstest]
    fn yielding_tasks_run_round_robin() {
        let scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for name in ["t1", "t2", "t3"] {
            let task = step(&log, &format!("{name}a"))
                .then(scheduler.yield_now())
                .then(step(&log, &format!("{name}b")));
            scheduler.submit(task);
        }

        scheduler.run_until_idle().expect("no task faults");
        assert_eq!(
            log.borrow().as_slice(),
            ["t1a", "t2a", "t3a", "t1b", "t2b", "t3b"]
        );
    }

    #[rstest]
    fn yield_with_empty_queue_continues_in_place() {
        let scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        scheduler.submit(
            step(&log, "before")
                .then(scheduler.yield_now())
                .then(step(&log, "after")),
        );

        scheduler.run().expect("task does not fault");
        assert_eq!(log.borrow().as_slice(), ["before", "after"]);
        assert!(scheduler.is_idle());
    }

    #[rstest]
    fn panicking_task_surfaces_its_message_as_a_fault() {
        let scheduler = Scheduler::new();
        scheduler.submit(
            Continuation::pure(()).flat_map(|()| -> Task { panic!("task exploded") }),
        );

        let fault = scheduler.run().expect_err("fault must surface");
        assert_eq!(fault.message(), "task exploded");
        assert!(scheduler.is_idle());
    }

    #[rstest]
    fn thrown_fault_surfaces_without_panicking() {
        let scheduler = Scheduler::new();
        scheduler.submit(Continuation::throw(Fault::new("gave up")));

        let fault = scheduler.run().expect_err("fault must surface");
        assert_eq!(fault.message(), "gave up");
    }

    #[rstest]
    fn faulting_task_does_not_disturb_later_tasks() {
        let scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        scheduler.submit(Continuation::throw(Fault::new("first fault")));
        scheduler.submit(step(&log, "survivor"));

        assert!(scheduler.run().is_err());
        scheduler.run().expect("second task is fine");
        assert_eq!(log.borrow().as_slice(), ["survivor"]);
    }

    #[rstest]
    fn run_on_empty_queue_is_a_no_op() {
        let scheduler = Scheduler::new();
        assert!(scheduler.run().is_ok());
        assert!(scheduler.is_idle());
    }
}
