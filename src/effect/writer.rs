//! Writer monad - computations that accumulate output alongside a result.
//!
//! A `Writer<W, A>` is an eager pair `(A, W)`: a result plus accumulated
//! output (a log, a trace, collected metrics). The output type must be a
//! [`Monoid`] so sequential steps can combine their contributions, with
//! `W::empty()` as the log of a pure step.
//!
//! Unlike the closure-backed kinds, Writer is plain data and implements
//! the [`Functor`]/[`Applicative`]/[`Monad`] traits directly, so the whole
//! generic combinator layer applies to it. Writer never short-circuits: an
//! effectful fold over Writer visits every item and concatenates every
//! log entry.
//!
//! # Laws
//!
//! In addition to the Functor/Applicative/Monad laws:
//!
//! - Tell Monoid: `tell(w1).then(tell(w2)) == tell(w1.combine(w2))`
//! - Censor Identity: `censor(|w| w, m) == m`
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::Writer;
//! use effectual::typeclass::Monad;
//!
//! fn log(message: &str) -> Writer<Vec<String>, ()> {
//!     Writer::tell(vec![message.to_string()])
//! }
//!
//! let computation = log("step 1").then(log("step 2")).then(Writer::new(42, vec![]));
//! let (result, logs) = computation.run();
//! assert_eq!(result, 42);
//! assert_eq!(logs, vec!["step 1", "step 2"]);
//! ```

use crate::typeclass::{Applicative, Functor, Monad, Monoid, TypeConstructor};

/// A computation that produces a result and accumulated output.
///
/// `Writer<W, A>` holds the pair eagerly; composition combines the `W`
/// sides with [`Semigroup::combine`](crate::typeclass::Semigroup::combine)
/// in evaluation order.
///
/// # Examples
///
/// ```rust
/// use effectual::effect::Writer;
/// use effectual::typeclass::Monad;
///
/// let computation: Writer<Vec<String>, i32> =
///     Writer::tell(vec!["log".to_string()]).then(Writer::new(42, vec![]));
/// let (result, output) = computation.run();
/// assert_eq!(result, 42);
/// assert_eq!(output, vec!["log"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer<W, A>
where
    W: Monoid,
{
    result: A,
    output: W,
}

impl<W, A> Writer<W, A>
where
    W: Monoid,
{
    /// Creates a Writer from a result and an initial output.
    pub const fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// Unwraps the pair of result and accumulated output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::new(42, String::from("trace"));
    /// assert_eq!(writer.run(), (42, String::from("trace")));
    /// ```
    pub fn run(self) -> (A, W) {
        (self.result, self.output)
    }

    /// Borrows the result.
    pub const fn value(&self) -> &A {
        &self.result
    }

    /// Borrows the accumulated output.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Exposes the accumulated output alongside the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Writer;
    ///
    /// let writer: Writer<Vec<&str>, i32> = Writer::new(1, vec!["a"]);
    /// let ((result, seen), output) = writer.listen().run();
    /// assert_eq!(result, 1);
    /// assert_eq!(seen, vec!["a"]);
    /// assert_eq!(output, vec!["a"]);
    /// ```
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        let snapshot = self.output.clone();
        Writer::new((self.result, snapshot), self.output)
    }

    /// Transforms the accumulated output without touching the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Writer;
    ///
    /// let writer: Writer<Vec<i32>, &str> = Writer::new("done", vec![1, 2, 3]);
    /// let censored = writer.censor(|mut output| {
    ///     output.retain(|&entry| entry > 1);
    ///     output
    /// });
    /// assert_eq!(censored.run(), ("done", vec![2, 3]));
    /// ```
    pub fn censor<F>(self, transform: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self::new(self.result, transform(self.output))
    }
}

impl<W> Writer<W, ()>
where
    W: Monoid,
{
    /// Records output, producing `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Writer;
    ///
    /// let writer: Writer<Vec<&str>, ()> = Writer::tell(vec!["event"]);
    /// assert_eq!(writer.run(), ((), vec!["event"]));
    /// ```
    pub fn tell(output: W) -> Self {
        Self::new((), output)
    }
}

impl<W, A> TypeConstructor for Writer<W, A>
where
    W: Monoid,
{
    type Inner = A;
    type WithType<B> = Writer<W, B>;
}

impl<W, A> Functor for Writer<W, A>
where
    W: Monoid,
{
    fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Writer::new(function(self.result), self.output)
    }
}

impl<W, A> Applicative for Writer<W, A>
where
    W: Monoid,
{
    fn pure<B>(value: B) -> Writer<W, B> {
        Writer::new(value, W::empty())
    }

    fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Writer::new(
            function(self.result, other.result),
            self.output.combine(other.output),
        )
    }
}

impl<W, A> Monad for Writer<W, A>
where
    W: Monoid,
{
    fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = function(self.result);
        Writer::new(next.result, self.output.combine(next.output))
    }
}
