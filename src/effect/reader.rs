//! Reader monad - computations over a shared read-only environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads
//! the environment through every step implicitly, which makes the type a
//! natural fit for configuration access and dependency injection.
//!
//! # Note on Type Classes
//!
//! Reader provides its own `fmap`, `flat_map`, `map2`, etc. methods
//! directly on the type rather than implementing the
//! Functor/Applicative/Monad traits: the representation is an
//! `Rc<dyn Fn>`, which forces `'static` bounds the trait signatures do not
//! carry. The methods obey the same laws as their trait counterparts.
//!
//! # Laws
//!
//! In addition to the Functor/Applicative/Monad laws:
//!
//! - Ask Retrieval: `Reader::ask().run(r) == r`
//! - Local Identity: `Reader::local(|r| r, m) == m`
//! - Local Composition:
//!   `Reader::local(f, Reader::local(g, m)) == Reader::local(|r| g(f(r)), m)`
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! fn address() -> Reader<Config, String> {
//!     Reader::asks(|config: Config| config.host)
//!         .map2(Reader::asks(|config: Config| config.port), |host, port| {
//!             format!("{host}:{port}")
//!         })
//! }
//!
//! let config = Config { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address().run(config), "localhost:8080");
//! ```

use std::rc::Rc;

/// A computation that reads from an immutable environment.
///
/// `Reader<R, A>` represents `R -> A`; the environment is supplied once at
/// [`run`](Reader::run) and shared by every composed step.
///
/// # Examples
///
/// ```rust
/// use effectual::effect::Reader;
///
/// let computation: Reader<i32, i32> =
///     Reader::ask().flat_map(|environment| Reader::pure(environment * 2));
/// assert_eq!(computation.run(21), 42);
/// ```
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// The wrapped function. `Rc` so the computation can be cloned when a
    /// combinator needs to reuse it.
    read: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            read: Rc::clone(&self.read),
        }
    }
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Wraps a function from environment to result.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            read: Rc::new(function),
        }
    }

    /// Runs the computation against an environment.
    ///
    /// A `Reader` can be run any number of times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    /// assert_eq!(reader.run(41), 42);
    /// assert_eq!(reader.run(0), 1);
    /// ```
    pub fn run(&self, environment: R) -> A {
        (self.read)(environment)
    }

    /// Lifts a value into a computation that ignores the environment.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Maps a function over the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Reader;
    ///
    /// let reader = Reader::new(|environment: i32| environment).fmap(|value| value.to_string());
    /// assert_eq!(reader.run(42), "42");
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let previous = self.read;
        Reader::new(move |environment| function(previous(environment)))
    }

    /// Sequences this computation into a function producing the next one.
    ///
    /// Both computations see the same environment.
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let previous = self.read;
        Reader::new(move |environment: R| {
            let result = previous(environment.clone());
            function(result).run(environment)
        })
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    #[must_use]
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        B: 'static,
        R: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two computations with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Reader;
    ///
    /// let double: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let triple: Reader<i32, i32> = Reader::new(|environment| environment * 3);
    /// assert_eq!(double.map2(triple, |a, b| a + b).run(10), 50);
    /// ```
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let first = self.read;
        let second = other.read;
        Reader::new(move |environment: R| {
            let result_a = first(environment.clone());
            let result_b = second(environment);
            function(result_a, result_b)
        })
    }

    /// Pairs the results of two computations.
    #[must_use]
    pub fn product<B>(self, other: Reader<R, B>) -> Reader<R, (A, B)>
    where
        B: 'static,
        R: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Projects a value out of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Reader;
    ///
    /// let port: Reader<(String, u16), u16> = Reader::asks(|environment: (String, u16)| environment.1);
    /// assert_eq!(port.run(("localhost".to_string(), 8080)), 8080);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs a computation under a locally transformed environment.
    ///
    /// The transformation is visible only to `computation`; the
    /// surrounding pipeline still sees the original environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Reader;
    ///
    /// let doubled_view = Reader::local(|environment: i32| environment * 2, Reader::ask());
    /// assert_eq!(doubled_view.run(21), 42);
    /// ```
    pub fn local<F>(transform: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        Self::new(move |environment| computation.run(transform(environment)))
    }
}

impl<R> Reader<R, R>
where
    R: Clone + 'static,
{
    /// Returns the environment itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask();
    /// assert_eq!(reader.run(42), 42);
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment: R| environment)
    }
}
