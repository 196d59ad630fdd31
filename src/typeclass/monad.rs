//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map` (also known as `chain`):
//! sequence one computation into a function producing the next, where each
//! step can depend on the previous result. Together with
//! [`Applicative::pure`] this is the whole capability contract a
//! computation kind must satisfy; the entire generic combinator layer in
//! [`typeclass::combinator`](crate::typeclass::combinator) is derived from
//! these two primitives alone.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Sequences this computation into a function producing the next.
    ///
    /// This is monadic bind: the fundamental operation from which `fmap`,
    /// `map2`, Kleisli composition and effectful folds all derive. For
    /// kinds that can fail or stop (`Option`, `Result`, `Validation`),
    /// `flat_map` short-circuits and never calls `function`.
    ///
    /// # Arguments
    ///
    /// * `function` - Takes the inner value, returns the next computation
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// let y = x.flat_map(|n| if n > 0 { Some(n * 2) } else { None });
    /// assert_eq!(y, Some(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Monad;
    ///
    /// let y = Some(5).and_then(|n| Some(n * 2));
    /// assert_eq!(y, Some(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` represents a failure or absence, the failure propagates
    /// and `next` is never produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

impl<T> Monad for Box<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> Box<B>,
    {
        function(*self)
    }
}
