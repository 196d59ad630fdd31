//! Validation - a two-armed result whose applicative accumulates failures.
//!
//! `Validation<E, A>` is either `Valid(A)` or `Invalid(E)`. As a monad it
//! behaves exactly like `Result`: `flat_map` short-circuits at the first
//! failure and never calls its continuation. As an applicative it
//! deliberately diverges: [`map2`](crate::typeclass::Applicative::map2)
//! over two `Invalid` values combines both failures with
//! [`Semigroup::combine`] instead of dropping the second one. That makes
//! the applicative the right tool for form-style validation, where every
//! independent problem should be reported at once.
//!
//! The accumulation flows through everything built on `map2`:
//! [`lift2`](crate::typeclass::combinator::lift2),
//! [`apply_in_order`](crate::typeclass::combinator::apply_in_order), the
//! zip combinators and [`validate_all`] all report every failure. Only
//! `flat_map` and what derives from it short-circuit.
//!
//! The conventional failure accumulator is `Vec<String>` (any
//! [`Semigroup`] works): one message per failed check, combined in
//! evaluation order.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::Validation;
//! use effectual::typeclass::Applicative;
//!
//! fn check_name(name: &str) -> Validation<Vec<String>, String> {
//!     if name.is_empty() {
//!         Validation::invalid(vec!["name must not be empty".to_string()])
//!     } else {
//!         Validation::valid(name.to_string())
//!     }
//! }
//!
//! fn check_age(age: i32) -> Validation<Vec<String>, i32> {
//!     if age < 0 {
//!         Validation::invalid(vec!["age must not be negative".to_string()])
//!     } else {
//!         Validation::valid(age)
//!     }
//! }
//!
//! let report = check_name("").map2(check_age(-1), |name, age| (name, age));
//! assert_eq!(
//!     report,
//!     Validation::invalid(vec![
//!         "name must not be empty".to_string(),
//!         "age must not be negative".to_string(),
//!     ])
//! );
//! ```

use crate::typeclass::{Applicative, Functor, Monad, Semigroup, TypeConstructor};

/// A value that is either valid or carries accumulated failures.
///
/// See the [module documentation](self) for the applicative/monad
/// divergence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<E, A> {
    /// A successful value.
    Valid(A),
    /// One or more failures.
    Invalid(E),
}

impl<E, A> Validation<E, A> {
    /// Wraps a successful value.
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Wraps a failure.
    pub const fn invalid(failure: E) -> Self {
        Self::Invalid(failure)
    }

    /// Returns whether this is `Valid`.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns whether this is `Invalid`.
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Converts a `Result`, mapping `Ok` to `Valid` and `Err` to
    /// `Invalid`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Validation;
    ///
    /// let valid: Validation<String, i32> = Validation::from_result(Ok(1));
    /// assert_eq!(valid, Validation::valid(1));
    /// ```
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(failure) => Self::Invalid(failure),
        }
    }

    /// Converts into a `Result`, discarding the accumulation capability.
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(failure) => Err(failure),
        }
    }

    /// Maps a function over the failure side, leaving `Valid` untouched.
    pub fn map_invalid<E2, F>(self, function: F) -> Validation<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(failure) => Validation::Invalid(function(failure)),
        }
    }
}

impl<E, A> TypeConstructor for Validation<E, A>
where
    E: Semigroup,
{
    type Inner = A;
    type WithType<B> = Validation<E, B>;
}

impl<E, A> Functor for Validation<E, A>
where
    E: Semigroup,
{
    fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(failure) => Validation::Invalid(failure),
        }
    }
}

impl<E, A> Applicative for Validation<E, A>
where
    E: Semigroup,
{
    fn pure<B>(value: B) -> Validation<E, B> {
        Validation::Valid(value)
    }

    /// Combines both sides, accumulating failures.
    ///
    /// Two `Invalid` values combine their failures left-to-right; a single
    /// `Invalid` propagates alone; two `Valid` values apply the function.
    fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Valid(first), Validation::Valid(second)) => {
                Validation::Valid(function(first, second))
            }
            (Self::Invalid(first), Validation::Invalid(second)) => {
                Validation::Invalid(first.combine(second))
            }
            (Self::Invalid(failure), Validation::Valid(_))
            | (Self::Valid(_), Validation::Invalid(failure)) => Validation::Invalid(failure),
        }
    }
}

impl<E, A> Monad for Validation<E, A>
where
    E: Semigroup,
{
    /// Short-circuits at the first failure, like `Result`.
    fn flat_map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(failure) => Validation::Invalid(failure),
        }
    }
}

/// Validates every item with a fallible function, accumulating failures.
///
/// Applies `function` to each item in order and folds the results with the
/// accumulating applicative: the result is either every transformed value
/// in input order, or every failure combined in input order. Every item is
/// checked even after a failure.
///
/// # Examples
///
/// ```rust
/// use effectual::effect::{validate_all, Validation};
///
/// fn check(n: i32) -> Validation<Vec<String>, i32> {
///     if n >= 0 {
///         Validation::valid(n)
///     } else {
///         Validation::invalid(vec![format!("negative: {n}")])
///     }
/// }
///
/// assert_eq!(validate_all(vec![1, 2], check), Validation::valid(vec![1, 2]));
/// assert_eq!(
///     validate_all(vec![-1, 2, -3], check),
///     Validation::invalid(vec!["negative: -1".to_string(), "negative: -3".to_string()])
/// );
/// ```
pub fn validate_all<E, A, B, I, F>(items: I, function: F) -> Validation<E, Vec<B>>
where
    E: Semigroup,
    I: IntoIterator<Item = A>,
    F: Fn(A) -> Validation<E, B>,
{
    let mut accumulated: Validation<E, Vec<B>> = Validation::Valid(Vec::new());
    for item in items {
        accumulated = accumulated.map2(function(item), |mut values, value| {
            values.push(value);
            values
        });
    }
    accumulated
}
