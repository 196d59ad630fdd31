//! Functor type class - mapping over a computation's result.
//!
//! `Functor` is the optional `map` capability of the wrap/chain contract:
//! transform the value a computation produces without touching the
//! kind-specific effect. For any kind that also implements [`Monad`],
//! `fmap` must agree with the derived form
//! `m.flat_map(|a| pure(f(a)))`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::Functor;
//!
//! let x: Option<i32> = Some(5);
//! let y: Option<String> = x.fmap(|n| n.to_string());
//! assert_eq!(y, Some("5".to_string()));
//! ```
//!
//! [`Monad`]: crate::typeclass::Monad

use super::higher::TypeConstructor;

/// A type class for types whose inner value can be mapped over.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// let y: Option<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant.
    ///
    /// Equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("done"), Some("done"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(move |_| value)
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> B + 'static,
        B: 'static,
    {
        Box::new(function(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_fmap_transforms_some() {
        let x = Some(5);
        assert_eq!(x.fmap(|n| n * 2), Some(10));
    }

    #[rstest]
    fn option_fmap_preserves_none() {
        let x: Option<i32> = None;
        assert_eq!(x.fmap(|n| n * 2), None);
    }

    #[rstest]
    fn result_fmap_transforms_ok() {
        let x: Result<i32, &str> = Ok(5);
        assert_eq!(x.fmap(|n| n + 1), Ok(6));
    }

    #[rstest]
    fn result_fmap_preserves_err() {
        let x: Result<i32, &str> = Err("boom");
        assert_eq!(x.fmap(|n| n + 1), Err("boom"));
    }

    #[rstest]
    fn box_fmap_transforms_value() {
        let x = Box::new(21);
        assert_eq!(*x.fmap(|n| n * 2), 42);
    }

    #[rstest]
    fn replace_discards_original_value() {
        assert_eq!(Some(5).replace('a'), Some('a'));
        let none: Option<i32> = None;
        assert_eq!(none.replace('a'), None);
    }

    #[rstest]
    fn option_identity_law() {
        let x = Some(5);
        assert_eq!(x.fmap(|n| n), x);
    }

    #[rstest]
    fn option_composition_law() {
        let x = Some(5);
        let left = x.fmap(|n| n + 1).fmap(|n| n * 2);
        let right = x.fmap(|n| (n + 1) * 2);
        assert_eq!(left, right);
    }
}
