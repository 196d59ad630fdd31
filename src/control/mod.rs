//! Control-flow abstractions: continuations and cooperative scheduling.
//!
//! - [`Continuation`]: continuation-passing computations with a
//!   success/failure callback pair, first-class capture via call/cc, and
//!   a protected chain that converts panics into [`Fault`]s
//! - [`Scheduler`]: a single-threaded cooperative coroutine scheduler
//!   whose suspension points are continuations parked in a FIFO run queue
//!
//! [`Task`] names the scheduler's unit of work,
//! `Continuation<(), (), Fault>`.

mod continuation;
mod scheduler;

pub use continuation::{Continuation, Fault};
pub use scheduler::{Scheduler, Task};
