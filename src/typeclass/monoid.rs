//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element `empty` such that for
//! all `a`:
//!
//! - `empty.combine(a) == a` (left identity)
//! - `a.combine(empty) == a` (right identity)
//!
//! The identity element is what lets a sequence be folded into one value
//! without a seed: [`Monoid::combine_all`] over an empty sequence returns
//! `empty`. `Writer` starts its log at `empty`; `Validation`'s sequence
//! validator starts its failure accumulator there too.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//!
//! let vec: Vec<i32> = Vec::empty();
//! assert!(vec.is_empty());
//! ```

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};
use std::ops::Add;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// ```text
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Folds all elements of an iterator into one value, starting from
    /// the identity element.
    ///
    /// An empty iterator yields `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Monoid;
    ///
    /// let parts = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::combine_all(parts), "abc");
    ///
    /// let none: Vec<String> = vec![];
    /// assert_eq!(String::combine_all(none), String::empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulated, element| {
                accumulated.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Monoid;
    ///
    /// assert!(String::empty().is_empty_value());
    /// assert!(!String::from("hello").is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// Option forms a monoid when its inner type is a semigroup; `None` is
/// the identity.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// The unit type forms a trivial monoid.
impl Monoid for () {
    fn empty() -> Self {}
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum forms a monoid under addition with 0 as the identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

// Product cannot use `Default` (that would be 0), so the integer
// instances are spelled out per type.
macro_rules! impl_product_monoid {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$ty> {
                fn empty() -> Self {
                    Self(1)
                }
            }
        )*
    };
}

impl_product_monoid!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_empty_is_identity() {
        let value = String::from("hello");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn vec_empty_is_identity() {
        let value = vec![1, 2, 3];
        assert_eq!(Vec::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(Vec::empty()), value);
    }

    #[rstest]
    fn option_empty_is_none() {
        let empty: Option<String> = Option::empty();
        assert_eq!(empty, None);
    }

    #[rstest]
    fn combine_all_folds_left_to_right() {
        let parts = vec![
            String::from("a"),
            String::from("b"),
            String::from("c"),
        ];
        assert_eq!(String::combine_all(parts), "abc");
    }

    #[rstest]
    fn combine_all_of_empty_sequence_is_identity() {
        let none: Vec<Vec<i32>> = vec![];
        assert_eq!(Vec::<i32>::combine_all(none), Vec::<i32>::empty());
    }

    #[rstest]
    fn sum_monoid_adds() {
        let total = Sum::combine_all(vec![Sum::new(1), Sum::new(2), Sum::new(3)]);
        assert_eq!(total, Sum::new(6));
        assert_eq!(Sum::<i32>::empty(), Sum::new(0));
    }

    #[rstest]
    fn product_monoid_multiplies() {
        let total = Product::combine_all(vec![Product::new(2), Product::new(3), Product::new(4)]);
        assert_eq!(total, Product::new(24));
        assert_eq!(Product::<i32>::empty(), Product::new(1));
    }

    #[rstest]
    fn is_empty_value_detects_identity() {
        assert!(String::empty().is_empty_value());
        assert!(!String::from("x").is_empty_value());
    }
}
