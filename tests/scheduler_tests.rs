//! Integration tests for the cooperative scheduler.
//!
//! The round-robin scenario mirrors the canonical usage: several tasks
//! that each do a slice of work, yield, and finish their work, observed
//! through a shared counter log.

use std::cell::RefCell;
use std::rc::Rc;

use effectual::control::{Continuation, Fault, Scheduler, Task};
use rstest::rstest;

fn increment(log: &Rc<RefCell<Vec<String>>>, entry: String) -> Task {
    let log = Rc::clone(log);
    Continuation::new(move |success, _failure| {
        log.borrow_mut().push(entry);
        success(())
    })
}

#[rstest]
fn three_yielding_tasks_interleave_round_robin() {
    let scheduler = Scheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    for name in ["T1", "T2", "T3"] {
        let task = increment(&log, format!("{name}a"))
            .then(scheduler.yield_now())
            .then(increment(&log, format!("{name}b")));
        scheduler.submit(task);
    }

    scheduler.run_until_idle().expect("no task faults");
    assert_eq!(
        log.borrow().as_slice(),
        ["T1a", "T2a", "T3a", "T1b", "T2b", "T3b"]
    );
}

#[rstest]
fn two_yields_per_task_stay_fair() {
    let scheduler = Scheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    for name in ["A", "B"] {
        let task = increment(&log, format!("{name}1"))
            .then(scheduler.yield_now())
            .then(increment(&log, format!("{name}2")))
            .then(scheduler.yield_now())
            .then(increment(&log, format!("{name}3")));
        scheduler.submit(task);
    }

    scheduler.run_until_idle().expect("no task faults");
    assert_eq!(
        log.borrow().as_slice(),
        ["A1", "B1", "A2", "B2", "A3", "B3"]
    );
}

#[rstest]
fn tasks_submitted_mid_run_wait_their_turn() {
    let scheduler = Scheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let late = increment(&log, "late".to_string());
    let late_submitter: Task = {
        let log = Rc::clone(&log);
        // A clone is another handle to the same run queue.
        let handle = scheduler.clone();
        Continuation::new(move |success, _failure| {
            log.borrow_mut().push("spawner".to_string());
            handle.submit(late);
            success(())
        })
    };
    scheduler.submit(late_submitter);

    scheduler.run().expect("spawner completes");
    assert_eq!(log.borrow().as_slice(), ["spawner"]);
    assert_eq!(scheduler.pending_tasks(), 1);

    scheduler.run().expect("late task completes");
    assert_eq!(log.borrow().as_slice(), ["spawner", "late"]);
}

#[rstest]
fn counter_survives_many_yielding_tasks() {
    let scheduler = Scheduler::new();
    let counter = Rc::new(RefCell::new(0));

    for _ in 0..10 {
        let first = Rc::clone(&counter);
        let second = Rc::clone(&counter);
        let task: Task = Continuation::new(move |success, _failure| {
            *first.borrow_mut() += 1;
            success(())
        })
        .then(scheduler.yield_now())
        .then(Continuation::new(move |success, _failure| {
            *second.borrow_mut() += 1;
            success(())
        }));
        scheduler.submit(task);
    }

    scheduler.run_until_idle().expect("no task faults");
    assert_eq!(*counter.borrow(), 20);
    assert!(scheduler.is_idle());
}

fn yield_loop(scheduler: &Scheduler, remaining: u32, counter: &Rc<RefCell<u32>>) -> Task {
    if remaining == 0 {
        return Continuation::pure(());
    }
    let handle = scheduler.clone();
    let counter = Rc::clone(counter);
    scheduler.yield_now().flat_map(move |()| {
        *counter.borrow_mut() += 1;
        yield_loop(&handle, remaining - 1, &counter)
    })
}

#[rstest]
fn tens_of_thousands_of_yields_unwind_between_slices() {
    let scheduler = Scheduler::new();
    let counter = Rc::new(RefCell::new(0u32));

    // Each slice must return to the driving run call before the next
    // one starts; nesting slices instead would overflow the stack long
    // before 20,000 yields.
    for _ in 0..2 {
        scheduler.submit(yield_loop(&scheduler, 10_000, &counter));
    }

    scheduler.run_until_idle().expect("no task faults");
    assert_eq!(*counter.borrow(), 20_000);
    assert!(scheduler.is_idle());
}

#[rstest]
fn panicking_task_reports_its_message() {
    let scheduler = Scheduler::new();
    scheduler.submit(Continuation::pure(()).flat_map(|()| -> Task { panic!("worker died") }));

    let fault = scheduler.run().expect_err("fault must surface");
    assert_eq!(fault.message(), "worker died");
}

#[rstest]
fn thrown_fault_is_no_different_from_a_panic_to_the_driver() {
    let scheduler = Scheduler::new();
    scheduler.submit(Continuation::throw(Fault::new("declined")));

    let fault = scheduler.run().expect_err("fault must surface");
    assert_eq!(fault.message(), "declined");
}

#[rstest]
fn run_until_idle_stops_at_the_first_fault() {
    let scheduler = Scheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    scheduler.submit(increment(&log, "first".to_string()));
    scheduler.submit(Continuation::throw(Fault::new("bad task")));
    scheduler.submit(increment(&log, "never reached in this drive".to_string()));

    assert!(scheduler.run_until_idle().is_err());
    assert_eq!(log.borrow().as_slice(), ["first"]);
    // The remaining task stays parked; a later drive picks it up.
    assert_eq!(scheduler.pending_tasks(), 1);
    scheduler.run_until_idle().expect("remaining task is fine");
    assert_eq!(scheduler.pending_tasks(), 0);
}
