//! Property-based tests for the type class laws.
//!
//! ## Functor Laws
//! - Identity: fa.fmap(|x| x) == fa
//! - Composition: fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//!
//! ## Monad Laws
//! - Left Identity: pure(a).flat_map(f) == f(a)
//! - Right Identity: m.flat_map(pure) == m
//! - Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//!
//! ## Monoid Laws
//! - Left/Right Identity: empty.combine(a) == a == a.combine(empty)
//! - Associativity (from Semigroup)

use effectual::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, Sum};
use proptest::prelude::*;

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_option_functor_identity(value in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_option_functor_composition(value in proptest::option::of(-1000i32..1000)) {
        let left = value.fmap(|x| x + 1).fmap(|x| x * 2);
        let right = value.fmap(|x| (x + 1) * 2);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_functor_identity(value in any::<i32>(), failed in any::<bool>()) {
        let result: Result<i32, String> = if failed { Err("failure".to_string()) } else { Ok(value) };
        prop_assert_eq!(result.clone().fmap(|x| x), result);
    }

    #[test]
    fn prop_result_functor_composition(value in -1000i32..1000) {
        let result: Result<i32, String> = Ok(value);
        let left = result.clone().fmap(|x| x - 3).fmap(|x| x * x);
        let right = result.fmap(|x| (x - 3) * (x - 3));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_option_left_identity(value in -1000i32..1000) {
        let step = |x: i32| if x % 2 == 0 { Some(x / 2) } else { None };
        prop_assert_eq!(<Option<()>>::pure(value).flat_map(step), step(value));
    }

    #[test]
    fn prop_option_right_identity(value in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(value.flat_map(|x| <Option<()>>::pure(x)), value);
    }

    #[test]
    fn prop_option_associativity(value in proptest::option::of(-1000i32..1000)) {
        let add = |x: i32| Some(x + 1);
        let halve = |x: i32| if x % 2 == 0 { Some(x / 2) } else { None };

        let left = value.flat_map(add).flat_map(halve);
        let right = value.flat_map(|x| add(x).flat_map(halve));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_associativity(value in -1000i32..1000) {
        let start: Result<i32, String> = Ok(value);
        let add = |x: i32| -> Result<i32, String> { Ok(x + 1) };
        let check = |x: i32| -> Result<i32, String> {
            if x > 0 { Ok(x) } else { Err(format!("non-positive: {x}")) }
        };

        let left = start.clone().flat_map(add).flat_map(check);
        let right = start.flat_map(|x| add(x).flat_map(check));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_option_applicative_identity(value in proptest::option::of(any::<i32>())) {
        let left = <Option<()>>::pure(()).map2(value, |(), x| x);
        prop_assert_eq!(left, value);
    }

    #[test]
    fn prop_option_homomorphism(first in any::<i32>(), second in any::<i32>()) {
        let left = <Option<()>>::pure(first)
            .map2(<Option<()>>::pure(second), |a: i32, b: i32| a.wrapping_add(b));
        prop_assert_eq!(left, Some(first.wrapping_add(second)));
    }
}

// =============================================================================
// Monoid Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_string_monoid_identity(value in ".*") {
        prop_assert_eq!(String::empty().combine(value.clone()), value.clone());
        prop_assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[test]
    fn prop_vec_monoid_identity(value in prop::collection::vec(any::<i32>(), 0..16)) {
        prop_assert_eq!(Vec::empty().combine(value.clone()), value.clone());
        prop_assert_eq!(value.clone().combine(Vec::empty()), value);
    }

    #[test]
    fn prop_sum_monoid_associativity(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let (a, b, c) = (Sum::new(a.wrapping_rem(1 << 20)), Sum::new(b.wrapping_rem(1 << 20)), Sum::new(c.wrapping_rem(1 << 20)));
        let left = a.combine(b).combine(c);
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_combine_all_equals_sequential_combine(
        parts in prop::collection::vec(".{0,8}", 0..8),
    ) {
        let sequential = parts.iter().fold(String::new(), |acc, part| acc.combine(part.clone()));
        prop_assert_eq!(String::combine_all(parts), sequential);
    }
}
