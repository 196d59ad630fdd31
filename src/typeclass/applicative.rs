//! Applicative type class - combining independent computations in order.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `pure`: lift a plain value into the computation kind, making the
//!   trivial computation that just yields it
//! - `map2`: combine two independently-built computations with a binary
//!   function, evaluating antecedent first, consequent second, never
//!   reordered
//!
//! The discard combinators [`zip_left`](Applicative::zip_left) (`x <* y`)
//! and [`zip_right`](Applicative::zip_right) (`x *> y`) are derived from
//! `map2` with a projection, so their ordering and effects are identical
//! to running both computations explicitly.
//!
//! For any kind that also implements [`Monad`], `map2` must agree with
//! `self.flat_map(|a| other.fmap(|b| f(a, b)))`, with one documented
//! exception: [`Validation`] deliberately diverges, accumulating failures
//! in `map2` while `flat_map` short-circuits.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(()).map2(v, |_, x| x) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |a, b| a + b);
//! assert_eq!(sum, Some(3));
//! ```
//!
//! [`Monad`]: crate::typeclass::Monad
//! [`Validation`]: crate::effect::Validation

use super::functor::Functor;

/// A type class for lifting values and combining computations in order.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// pure(()).map2(v, |_, x| x) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// pure(a).map2(pure(b), f) == pure(f(a, b))
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the computation kind.
    ///
    /// This is the trivial computation: it produces the value with no
    /// effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two computations with a binary function.
    ///
    /// `self` is evaluated first, `other` second; the order is fixed even
    /// though neither result depends on the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Applicative;
    ///
    /// let sum = Some(1).map2(Some(2), |a, b| a + b);
    /// assert_eq!(sum, Some(3));
    ///
    /// let missing = Some(1).map2(None::<i32>, |a, b| a + b);
    /// assert_eq!(missing, None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs up the results of two computations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("a")), Some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Runs both computations in order, keeping the first result.
    ///
    /// This is the `x <* y` combinator: `y`'s effect still happens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).zip_left(Some("ignored")), Some(1));
    /// assert_eq!(Some(1).zip_left(None::<&str>), None);
    /// ```
    #[inline]
    fn zip_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |first, _| first)
    }

    /// Runs both computations in order, keeping the second result.
    ///
    /// This is the `x *> y` combinator: `x`'s effect still happens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Applicative;
    ///
    /// assert_eq!(Some("ignored").zip_right(Some(2)), Some(2));
    /// assert_eq!(None::<&str>.zip_right(Some(2)), None);
    /// ```
    #[inline]
    fn zip_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, second| second)
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(first), Some(second)) => Some(function(first, second)),
            _ => None,
        }
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        // Antecedent failure wins: `other` is only consulted on success.
        let first = self?;
        let second = other?;
        Ok(function(first, second))
    }
}

impl<T> Applicative for Box<T> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(T, B) -> C,
    {
        Box::new(function(*self, *other))
    }
}
