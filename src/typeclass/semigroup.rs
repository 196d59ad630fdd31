//! Semigroup type class - associative combining.
//!
//! A type `T` is a semigroup if it has an associative binary operation
//! `combine: (T, T) -> T`. Accumulation-based computation kinds are
//! parameterized by this operation: `Writer` combines its log entries with
//! it, `Validation` combines independent failures with it.
//!
//! # Laws
//!
//! ## Associativity
//!
//! For all `a`, `b`, `c`:
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::Semigroup;
//!
//! let a = String::from("foo");
//! let b = String::from("bar");
//! assert_eq!(a.combine(b), "foobar");
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Semigroup;
    ///
    /// let result = vec![1, 2].combine(vec![3]);
    /// assert_eq!(result, vec![1, 2, 3]);
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Semigroup;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// assert_eq!(a.combine_ref(&b), "Hello, World!");
    /// assert_eq!(a, "Hello, ");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `Option` combines by preferring present values and combining two
/// present values with the inner semigroup.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(first), Some(second)) => Some(first.combine(second)),
            (value, None) | (None, value) => value,
        }
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}
