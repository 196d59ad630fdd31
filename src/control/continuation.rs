//! Continuation monad with a success/failure callback pair.
//!
//! A `Continuation<R, A, E>` represents "the rest of the computation" in
//! continuation-passing style: a function that, given a success callback
//! `(A) -> R` and a failure callback `(E) -> R`, produces the final result
//! `R`. The representation is `((A -> R), (E -> R)) -> R`.
//!
//! # Callback protocol
//!
//! Over a computation's lifetime exactly one of the two callbacks is
//! invoked, exactly once. A suspended computation (see
//! [`call_with_current_continuation_once`]) defers its callbacks until it
//! is resumed; they are still invoked exactly once in total.
//!
//! # Exception protocol
//!
//! - [`throw`](Continuation::throw) routes a value to the failure
//!   callback; no success path exists downstream of it.
//! - [`flat_map`](Continuation::flat_map) evaluates its step function
//!   under a protected call: a panic inside the step is captured as a
//!   [`Fault`] and routed to the failure callback rather than unwinding
//!   through the CPS machinery. This is why `flat_map` requires
//!   `E: From<Fault>`.
//! - [`recover`](Continuation::recover) intercepts the failure path and
//!   resumes with a replacement computation.
//!
//! # Laws
//!
//! `Continuation` forms a monad:
//!
//! - Left Identity: `Continuation::pure(a).flat_map(f)` runs as `f(a)`
//! - Right Identity: `m.flat_map(Continuation::pure)` runs as `m`
//! - Associativity:
//!   `m.flat_map(f).flat_map(g)` runs as `m.flat_map(|x| f(x).flat_map(g))`
//!
//! # Examples
//!
//! ```rust
//! use effectual::control::{Continuation, Fault};
//!
//! let computation: Continuation<i32, i32> = Continuation::pure(21)
//!     .flat_map(|x| Continuation::pure(x * 2));
//!
//! let result = computation.run(|x| x, |_fault: Fault| -1);
//! assert_eq!(result, 42);
//! ```
//!
//! Early exit with a first-class continuation:
//!
//! ```rust
//! use effectual::control::{Continuation, Fault};
//!
//! let computation = Continuation::call_with_current_continuation_once(|exit| {
//!     Continuation::pure(20).flat_map(move |x| {
//!         if x > 10 {
//!             exit(x * 100) // abandons the rest of the chain
//!         } else {
//!             Continuation::pure(x + 5)
//!         }
//!     })
//! });
//!
//! let result = computation.run(|x| x, |_fault: Fault| -1);
//! assert_eq!(result, 2000);
//! ```
//!
//! [`call_with_current_continuation_once`]: Continuation::call_with_current_continuation_once

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use static_assertions::assert_not_impl_any;

/// A boxed one-shot callback from a value to the final result.
type Callback<T, R> = Box<dyn FnOnce(T) -> R>;

/// A boxed CPS body: given the success and failure callbacks, produce the
/// final result.
type CpsFunction<A, E, R> = Box<dyn FnOnce(Callback<A, R>, Callback<E, R>) -> R>;

/// A shared, mutable holder for a one-shot callback.
///
/// Two mutually-exclusive paths sometimes need the same `FnOnce`; the
/// holder lets exactly one of them take it.
type CallbackHolder<T, R> = Rc<RefCell<Option<Callback<T, R>>>>;

/// A raised fault crossing a CPS boundary.
///
/// Carries the message of an explicit [`Continuation::throw`] or of a
/// panic captured by a protected call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Creates a fault with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The fault message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Converts a captured panic payload into a fault.
    ///
    /// `&str` and `String` payloads keep their text; anything else
    /// becomes a generic message.
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload.downcast::<String>().map_or_else(
            |payload| {
                payload.downcast::<&'static str>().map_or_else(
                    |_| "computation panicked".to_string(),
                    |text| (*text).to_string(),
                )
            },
            |text| *text,
        );
        Self { message }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl std::error::Error for Fault {}

/// A computation in continuation-passing style with an explicit failure
/// path.
///
/// # Type Parameters
///
/// * `R` - The final result type of the whole computation
/// * `A` - The intermediate value this computation produces
/// * `E` - The failure type (defaults to [`Fault`])
///
/// # Examples
///
/// ```rust
/// use effectual::control::{Continuation, Fault};
///
/// let computation: Continuation<String, i32> = Continuation::pure(42);
/// let result = computation.run(
///     |x| format!("the answer is {x}"),
///     |fault: Fault| format!("failed: {fault}"),
/// );
/// assert_eq!(result, "the answer is 42");
/// ```
pub struct Continuation<R, A, E = Fault> {
    /// The CPS body: invokes exactly one of the two callbacks.
    resume: CpsFunction<A, E, R>,
}

// The boxed callbacks are not Send, pinning continuations to one thread.
assert_not_impl_any!(Continuation<(), ()>: Send, Sync);

impl<R, A, E> Continuation<R, A, E>
where
    R: 'static,
    A: 'static,
    E: 'static,
{
    /// Creates a continuation from a CPS body.
    ///
    /// The body must invoke exactly one of the two callbacks, exactly
    /// once, over the computation's lifetime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::{Continuation, Fault};
    ///
    /// let computation: Continuation<i32, i32> =
    ///     Continuation::new(|success, _failure| success(42));
    /// assert_eq!(computation.run(|x| x, |_fault: Fault| -1), 42);
    /// ```
    pub fn new<F>(body: F) -> Self
    where
        F: FnOnce(Box<dyn FnOnce(A) -> R>, Box<dyn FnOnce(E) -> R>) -> R + 'static,
    {
        Self {
            resume: Box::new(body),
        }
    }

    /// Lifts a value: invokes the success callback with it.
    pub fn pure(value: A) -> Self {
        Self::new(move |success, _failure| success(value))
    }

    /// Raises a failure: invokes the failure callback with it.
    ///
    /// The success callback is never reachable downstream of a `throw`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::{Continuation, Fault};
    ///
    /// let computation: Continuation<String, i32> = Continuation::throw(Fault::new("denied"));
    /// let result = computation.run(|x| x.to_string(), |fault| format!("failed: {fault}"));
    /// assert_eq!(result, "failed: denied");
    /// ```
    pub fn throw(error: E) -> Self {
        Self::new(move |_success, failure| failure(error))
    }

    /// Drives the computation with the given callbacks.
    pub fn run<KS, KF>(self, on_success: KS, on_failure: KF) -> R
    where
        KS: FnOnce(A) -> R + 'static,
        KF: FnOnce(E) -> R + 'static,
    {
        (self.resume)(Box::new(on_success), Box::new(on_failure))
    }

    /// Drives the computation with already-boxed callbacks.
    pub(crate) fn run_boxed(self, on_success: Callback<A, R>, on_failure: Callback<E, R>) -> R {
        (self.resume)(on_success, on_failure)
    }

    /// Applies a function to the success value.
    ///
    /// The failure path is untouched, and the function runs unprotected;
    /// the protection point of the chain is [`flat_map`](Self::flat_map).
    pub fn fmap<B, F>(self, function: F) -> Continuation<R, B, E>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Continuation::new(move |success, failure| {
            self.run_boxed(Box::new(move |value| success(function(value))), failure)
        })
    }

    /// Sequences this computation into a function producing the next one.
    ///
    /// The step function is evaluated under a protected call: a panic
    /// inside it is captured as a [`Fault`] and routed to the failure
    /// callback instead of unwinding. An incoming failure propagates
    /// without the step function ever running.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::{Continuation, Fault};
    ///
    /// let computation: Continuation<i32, i32> =
    ///     Continuation::pure(21).flat_map(|x| Continuation::pure(x * 2));
    /// assert_eq!(computation.run(|x| x, |_fault: Fault| -1), 42);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Continuation<R, B, E>
    where
        B: 'static,
        E: From<Fault>,
        F: FnOnce(A) -> Continuation<R, B, E> + 'static,
    {
        Continuation::new(move |success, failure| {
            // The failure callback is needed by exactly one of two
            // mutually-exclusive paths: the incoming-failure path, or the
            // continuation produced by the step function.
            let failure_holder: CallbackHolder<E, R> = Rc::new(RefCell::new(Some(failure)));
            let failure_for_error = Rc::clone(&failure_holder);

            self.run_boxed(
                Box::new(move |value| {
                    let failure = failure_holder
                        .borrow_mut()
                        .take()
                        .expect("failure callback already consumed");
                    match catch_unwind(AssertUnwindSafe(move || function(value))) {
                        Ok(next) => next.run_boxed(success, failure),
                        Err(payload) => failure(E::from(Fault::from_panic(payload))),
                    }
                }),
                Box::new(move |error| {
                    let failure = failure_for_error
                        .borrow_mut()
                        .take()
                        .expect("failure callback already consumed");
                    failure(error)
                }),
            )
        })
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Continuation<R, B, E>
    where
        B: 'static,
        E: From<Fault>,
        F: FnOnce(A) -> Continuation<R, B, E> + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first success value.
    ///
    /// An incoming failure still skips `next`.
    #[inline]
    #[must_use]
    pub fn then<B>(self, next: Continuation<R, B, E>) -> Continuation<R, B, E>
    where
        B: 'static,
        E: From<Fault>,
    {
        self.flat_map(move |_| next)
    }

    /// Combines two computations with a binary function, running this one
    /// first.
    pub fn map2<B, C, F>(self, other: Continuation<R, B, E>, function: F) -> Continuation<R, C, E>
    where
        B: 'static,
        C: 'static,
        E: From<Fault>,
        F: FnOnce(A, B) -> C + 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }

    /// Intercepts the failure path with a handler producing a replacement
    /// computation.
    ///
    /// The success path is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::{Continuation, Fault};
    ///
    /// let computation: Continuation<i32, i32> = Continuation::throw(Fault::new("transient"))
    ///     .recover(|_fault| Continuation::pure(0));
    /// assert_eq!(computation.run(|x| x, |_fault: Fault| -1), 0);
    /// ```
    pub fn recover<F>(self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self + 'static,
    {
        Self::new(move |success, failure| {
            let success_holder: CallbackHolder<A, R> = Rc::new(RefCell::new(Some(success)));
            let success_for_error = Rc::clone(&success_holder);
            let failure_holder: CallbackHolder<E, R> = Rc::new(RefCell::new(Some(failure)));

            self.run_boxed(
                Box::new(move |value| {
                    let success = success_holder
                        .borrow_mut()
                        .take()
                        .expect("success callback already consumed");
                    success(value)
                }),
                Box::new(move |error| {
                    let success = success_for_error
                        .borrow_mut()
                        .take()
                        .expect("success callback already consumed");
                    let failure = failure_holder
                        .borrow_mut()
                        .take()
                        .expect("failure callback already consumed");
                    handler(error).run_boxed(success, failure)
                }),
            )
        })
    }

    /// Captures the current success continuation (call/cc, one-shot).
    ///
    /// The `escape` handed to `function` packages "the rest of the
    /// computation" as a first-class value: the continuation returned by
    /// `escape(value)` defers its own callbacks entirely and, when run,
    /// resumes the captured rest with `value`, abandoning whatever
    /// remained of `function`'s chain. If `escape` is never called, the
    /// computation proceeds normally.
    ///
    /// This deferral is the suspension mechanism the cooperative
    /// [`Scheduler`](crate::control::Scheduler) is built on: a suspended
    /// task is exactly an escape-produced continuation parked in a queue.
    ///
    /// # Panics
    ///
    /// Panics if the captured continuation is invoked more than once, or
    /// if the normal path completes after the escape already consumed the
    /// continuation.
    pub fn call_with_current_continuation_once<F>(function: F) -> Self
    where
        F: FnOnce(Box<dyn FnOnce(A) -> Self>) -> Self + 'static,
    {
        Self::new(move |success, failure| {
            // The success callback is shared between the escape path and
            // the normal path; exactly one of them may take it.
            let success_holder: CallbackHolder<A, R> = Rc::new(RefCell::new(Some(success)));
            let holder_for_escape = Rc::clone(&success_holder);

            let escape: Box<dyn FnOnce(A) -> Self> = Box::new(move |value: A| {
                Self::new(move |_unused_success, _unused_failure| {
                    let resume = holder_for_escape
                        .borrow_mut()
                        .take()
                        .expect("captured continuation already consumed");
                    resume(value)
                })
            });

            let inner = function(escape);
            inner.run_boxed(
                Box::new(move |value| {
                    let resume = success_holder
                        .borrow_mut()
                        .take()
                        .expect("captured continuation was consumed by the escape");
                    resume(value)
                }),
                failure,
            )
        })
    }
}

impl<R, A, E> fmt::Debug for Continuation<R, A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Continuation")
            .finish_non_exhaustive()
    }
}
