//! The generic combinator layer, written once against the contract.
//!
//! Every function here is derived from the capability contract alone
//! ([`Applicative::pure`], [`Applicative::map2`] and [`Monad::flat_map`])
//! and therefore works for any computation kind that implements it:
//! plugging in a new kind requires only those operations, and the whole
//! combinator surface is inherited without reimplementation.
//!
//! - [`apply_in_order`]: sequential applicative application
//! - [`lift2`]: combine two computations with a binary function
//! - [`compose_kleisli`] / [`compose_kleisli_reverse`]: composition of
//!   functions returning computations (`>=>` and `<=<`)
//! - [`fold_effectful`]: thread an accumulator through a sequence with an
//!   effect at each step
//!
//! The discard combinators live on [`Applicative`] itself as the
//! `map2`-derived defaults [`zip_left`](Applicative::zip_left) and
//! [`zip_right`](Applicative::zip_right).
//!
//! # Evaluation order
//!
//! All combinators evaluate antecedent first, consequent second, never
//! reordered. [`lift2`] and [`apply_in_order`] go through the kind's
//! `map2`, so on an accumulating applicative like
//! [`Validation`](crate::effect::Validation) both sides run and both
//! failures are collected. [`fold_effectful`] goes through `flat_map`
//! and short-circuits exactly as it does: for kinds that can fail or
//! stop (`Option`, `Result`, `Validation`) the step function stops being
//! called at the first failure; for non-short-circuiting kinds
//! (`Writer`) every item is visited.
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::combinator::{compose_kleisli, fold_effectful};
//!
//! let parse = |s: &str| s.parse::<i32>().ok();
//! let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
//!
//! let parse_then_halve = compose_kleisli(parse, halve);
//! assert_eq!(parse_then_halve("42"), Some(21));
//!
//! let total: Option<i32> = fold_effectful(|acc, n| Some(acc + n), 0, vec![1, 2, 3]);
//! assert_eq!(total, Some(6));
//! ```

use super::applicative::Applicative;
use super::higher::TypeConstructor;
use super::monad::Monad;

/// Applies a wrapped function to a wrapped value, in order.
///
/// The computation carrying the function is evaluated first, the
/// computation carrying the argument second. Defined as
/// `function.map2(value, |f, a| f(a))`, so the kind's applicative
/// decides what happens when either side fails.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::combinator::apply_in_order;
///
/// let doubled: Option<i32> = apply_in_order(Some(|n: i32| n * 2), Some(21));
/// assert_eq!(doubled, Some(42));
///
/// let missing: Option<i32> = apply_in_order(None::<fn(i32) -> i32>, Some(21));
/// assert_eq!(missing, None);
/// ```
pub fn apply_in_order<MF, A, B>(function: MF, value: MF::WithType<A>) -> MF::WithType<B>
where
    MF: Applicative,
    MF::Inner: FnOnce(A) -> B,
{
    function.map2(value, |apply, argument| apply(argument))
}

/// Combines the results of two computations with a binary function.
///
/// Defined as `first.map2(second, function)`, so the derived behavior is
/// the kind's applicative behavior. For
/// [`Validation`](crate::effect::Validation) this means both sides are
/// evaluated and two failures are accumulated, never dropped.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::combinator::lift2;
///
/// let sum: Option<i32> = lift2(|a, b| a + b, Some(1), Some(2));
/// assert_eq!(sum, Some(3));
/// ```
pub fn lift2<MA, B, C, F>(function: F, first: MA, second: MA::WithType<B>) -> MA::WithType<C>
where
    MA: Applicative,
    F: FnOnce(MA::Inner, B) -> C,
{
    first.map2(second, function)
}

/// Left-to-right Kleisli composition (`f >=> g`).
///
/// Composes two functions that each return a computation: the result runs
/// `first`, then feeds its produced value into `second`.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::combinator::compose_kleisli;
///
/// let parse = |s: &str| s.parse::<i32>().ok();
/// let positive = |n: i32| if n > 0 { Some(n) } else { None };
///
/// let parse_positive = compose_kleisli(parse, positive);
/// assert_eq!(parse_positive("5"), Some(5));
///
/// let rejected = compose_kleisli(parse, positive);
/// assert_eq!(rejected("-5"), None);
/// ```
pub fn compose_kleisli<A, C, MB, F, G>(first: F, second: G) -> impl FnOnce(A) -> MB::WithType<C>
where
    MB: Monad,
    F: FnOnce(A) -> MB,
    G: FnOnce(MB::Inner) -> MB::WithType<C>,
{
    move |input| first(input).flat_map(second)
}

/// Right-to-left Kleisli composition (`g <=< f`).
///
/// The mirror of [`compose_kleisli`]: `second` names the function applied
/// last, matching mathematical composition order.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::combinator::compose_kleisli_reverse;
///
/// let parse = |s: &str| s.parse::<i32>().ok();
/// let double = |n: i32| Some(n * 2);
///
/// let double_after_parse = compose_kleisli_reverse(double, parse);
/// assert_eq!(double_after_parse("21"), Some(42));
/// ```
pub fn compose_kleisli_reverse<A, C, MB, F, G>(
    second: G,
    first: F,
) -> impl FnOnce(A) -> MB::WithType<C>
where
    MB: Monad,
    F: FnOnce(A) -> MB,
    G: FnOnce(MB::Inner) -> MB::WithType<C>,
{
    compose_kleisli(first, second)
}

/// Threads an accumulator through a sequence, with an effect at each step.
///
/// Starting from `pure(seed)`, each item is folded in left-to-right with
/// `accumulated.flat_map(|value| function(value, item))`. The fold
/// short-circuits exactly as the kind's `flat_map` does: once an `Option`
/// accumulator is `None` or a `Result` accumulator is `Err`, the step
/// function is never called again.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::combinator::fold_effectful;
///
/// // Sums until an odd item stops the fold.
/// let step = |acc: i32, n: i32| if n % 2 == 0 { Some(acc + n) } else { None };
///
/// let even_total: Option<i32> = fold_effectful(step, 0, vec![2, 4, 6]);
/// assert_eq!(even_total, Some(12));
///
/// let stopped: Option<i32> = fold_effectful(step, 0, vec![2, 3, 6]);
/// assert_eq!(stopped, None);
/// ```
pub fn fold_effectful<M, A, B, I, F>(function: F, seed: B, items: I) -> M
where
    M: Monad + TypeConstructor<Inner = B, WithType<B> = M>,
    F: Fn(B, A) -> M,
    I: IntoIterator<Item = A>,
{
    let mut accumulated = M::pure(seed);
    for item in items {
        // The explicit `B` pins the `WithType` projection to `M`.
        accumulated = accumulated.flat_map::<B, _>(|value| function(value, item));
    }
    accumulated
}
