//! Numeric wrapper types selecting a monoid operation.
//!
//! A number supports several lawful monoids (addition, multiplication),
//! so plain numeric types cannot pick one. These wrappers make the
//! choice explicit: [`Sum`] combines by addition, [`Product`] by
//! multiplication.
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Monoid, Product, Sum};
//!
//! assert_eq!(Sum::combine_all(vec![Sum::new(1), Sum::new(2)]), Sum::new(3));
//! assert_eq!(
//!     Product::combine_all(vec![Product::new(2), Product::new(5)]),
//!     Product::new(10)
//! );
//! ```

use super::semigroup::Semigroup;
use std::ops::{Add, Mul};

/// A numeric wrapper whose semigroup operation is addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps a value.
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// A numeric wrapper whose semigroup operation is multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps a value.
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_combines_by_addition() {
        assert_eq!(Sum::new(2).combine(Sum::new(3)), Sum::new(5));
    }

    #[rstest]
    fn product_combines_by_multiplication() {
        assert_eq!(Product::new(2).combine(Product::new(3)), Product::new(6));
    }

    #[rstest]
    fn into_inner_unwraps() {
        assert_eq!(Sum::new(7).into_inner(), 7);
        assert_eq!(Product::new(7).into_inner(), 7);
    }
}
