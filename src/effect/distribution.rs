//! Distribution - a weighted-outcome monad with exact probabilities.
//!
//! A `Distribution<A>` is a finite list of [`Outcome`]s, each pairing a
//! value with an exact rational probability (`BigRational`, never floating
//! point, so no drift accumulates under composition). The order of
//! outcomes carries no meaning and duplicate values are allowed.
//!
//! `flat_map` is the joint-probability law: every antecedent outcome
//! `(v1, p1)` expands through the consequent distribution's `(v2, p2)`
//! into `(v2, p1 * p2)`. Since each expansion's probabilities sum to
//! `p1`, a normalized distribution stays normalized under `pure`,
//! `flat_map` and `uniform`.
//!
//! # Note on Type Classes
//!
//! Distribution provides its own `fmap`, `flat_map`, `map2`, etc. methods
//! directly on the type rather than implementing the
//! Functor/Applicative/Monad traits: applying a step function once per
//! outcome needs `FnMut`, which the trait signatures do not allow. The
//! methods obey the same laws as their trait counterparts.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::Distribution;
//! use num_rational::BigRational;
//! use num_bigint::BigInt;
//!
//! let ratio = |n: i64, d: i64| BigRational::new(BigInt::from(n), BigInt::from(d));
//!
//! // Two fair coins; count the heads.
//! let coin = || Distribution::uniform(vec![true, false]);
//! let heads = coin().flat_map(|first| {
//!     coin().fmap(move |second| u8::from(first) + u8::from(second))
//! });
//!
//! assert_eq!(heads.probability_of(|&count| count == 1), ratio(1, 2));
//! assert_eq!(heads.probability_of(|&count| count == 2), ratio(1, 4));
//! ```

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// One possible result of a [`Distribution`], with its probability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<A> {
    /// The value this outcome produces.
    pub value: A,
    /// The exact probability of this outcome.
    pub probability: BigRational,
}

impl<A> Outcome<A> {
    /// Pairs a value with a probability.
    pub const fn new(value: A, probability: BigRational) -> Self {
        Self { value, probability }
    }
}

/// A finite weighted collection of possible values.
///
/// See the [module documentation](self) for composition semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution<A> {
    outcomes: Vec<Outcome<A>>,
}

impl<A> Distribution<A> {
    /// Builds a distribution directly from outcomes.
    ///
    /// No normalization is performed; [`probability`](Self::probability)
    /// reports whatever the weights sum to.
    pub const fn from_outcomes(outcomes: Vec<Outcome<A>>) -> Self {
        Self { outcomes }
    }

    /// The certain distribution: one outcome with probability 1.
    pub fn pure(value: A) -> Self {
        Self {
            outcomes: vec![Outcome::new(value, BigRational::one())],
        }
    }

    /// Equal weights over the given values.
    ///
    /// Each of `n` values gets probability `1/n`, exactly. An empty
    /// sequence yields the empty distribution (total probability 0).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Distribution;
    /// use num_rational::BigRational;
    /// use num_bigint::BigInt;
    ///
    /// let die = Distribution::uniform(1..=6);
    /// assert_eq!(
    ///     die.probability_of(|&face| face == 3),
    ///     BigRational::new(BigInt::from(1), BigInt::from(6))
    /// );
    /// ```
    pub fn uniform<I>(values: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        let values: Vec<A> = values.into_iter().collect();
        if values.is_empty() {
            return Self {
                outcomes: Vec::new(),
            };
        }
        let weight = BigRational::new(BigInt::one(), BigInt::from(values.len()));
        Self {
            outcomes: values
                .into_iter()
                .map(|value| Outcome::new(value, weight.clone()))
                .collect(),
        }
    }

    /// The outcomes, in internal order.
    pub fn outcomes(&self) -> &[Outcome<A>] {
        &self.outcomes
    }

    /// The number of outcomes (counting duplicates separately).
    pub const fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the distribution has no outcomes at all.
    pub const fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// The total probability mass: the exact sum of every weight.
    ///
    /// 1 for anything built from `pure`, `uniform` and composition.
    pub fn probability(&self) -> BigRational {
        self.outcomes
            .iter()
            .fold(BigRational::zero(), |total, outcome| {
                total + &outcome.probability
            })
    }

    /// The exact probability that the produced value satisfies a
    /// predicate.
    pub fn probability_of<P>(&self, predicate: P) -> BigRational
    where
        P: Fn(&A) -> bool,
    {
        self.outcomes
            .iter()
            .filter(|outcome| predicate(&outcome.value))
            .fold(BigRational::zero(), |total, outcome| {
                total + &outcome.probability
            })
    }

    /// Maps a function over every outcome value, keeping the weights.
    pub fn fmap<B, F>(self, mut function: F) -> Distribution<B>
    where
        F: FnMut(A) -> B,
    {
        Distribution {
            outcomes: self
                .outcomes
                .into_iter()
                .map(|outcome| Outcome::new(function(outcome.value), outcome.probability))
                .collect(),
        }
    }

    /// Sequences this distribution into a function producing the next.
    ///
    /// Each antecedent outcome `(v1, p1)` contributes `(v2, p1 * p2)` for
    /// every consequent outcome `(v2, p2)`.
    pub fn flat_map<B, F>(self, mut function: F) -> Distribution<B>
    where
        F: FnMut(A) -> Distribution<B>,
    {
        let mut outcomes = Vec::new();
        for antecedent in self.outcomes {
            for consequent in function(antecedent.value).outcomes {
                outcomes.push(Outcome::new(
                    consequent.value,
                    &antecedent.probability * consequent.probability,
                ));
            }
        }
        Distribution { outcomes }
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Distribution<B>
    where
        F: FnMut(A) -> Distribution<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two distributions, discarding the first value.
    ///
    /// The weights of the first still shape the result.
    #[must_use]
    pub fn then<B>(self, next: Distribution<B>) -> Distribution<B>
    where
        B: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two independent distributions with a binary function.
    pub fn map2<B, C, F>(self, other: Distribution<B>, function: F) -> Distribution<C>
    where
        A: Clone,
        B: Clone,
        F: Fn(A, B) -> C,
    {
        let mut outcomes = Vec::new();
        for first in self.outcomes {
            for second in &other.outcomes {
                outcomes.push(Outcome::new(
                    function(first.value.clone(), second.value.clone()),
                    &first.probability * &second.probability,
                ));
            }
        }
        Distribution { outcomes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ratio(numerator: i64, denominator: i64) -> BigRational {
        BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
    }

    #[rstest]
    fn pure_is_certain() {
        let certain = Distribution::pure("value");
        assert_eq!(certain.len(), 1);
        assert_eq!(certain.probability(), ratio(1, 1));
        assert_eq!(certain.probability_of(|&v| v == "value"), ratio(1, 1));
    }

    #[rstest]
    fn uniform_weights_each_value_equally() {
        let die = Distribution::uniform(1..=6);
        assert_eq!(die.len(), 6);
        for face in 1..=6 {
            assert_eq!(die.probability_of(|&v| v == face), ratio(1, 6));
        }
        assert_eq!(die.probability(), ratio(1, 1));
    }

    #[rstest]
    fn uniform_of_nothing_is_empty() {
        let empty: Distribution<i32> = Distribution::uniform(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.probability(), BigRational::zero());
    }

    #[rstest]
    fn fmap_keeps_weights() {
        let doubled = Distribution::uniform(vec![1, 2]).fmap(|n| n * 2);
        assert_eq!(doubled.probability_of(|&n| n == 2), ratio(1, 2));
        assert_eq!(doubled.probability_of(|&n| n == 4), ratio(1, 2));
    }

    #[rstest]
    fn flat_map_multiplies_probabilities() {
        let coin = || Distribution::uniform(vec![true, false]);
        let both = coin().flat_map(|first| coin().fmap(move |second| (first, second)));

        assert_eq!(both.len(), 4);
        assert_eq!(
            both.probability_of(|&(first, second)| first && second),
            ratio(1, 4)
        );
        assert_eq!(both.probability(), ratio(1, 1));
    }

    #[rstest]
    fn flat_map_over_a_constant_function_preserves_total_probability() {
        let skewed = Distribution::from_outcomes(vec![
            Outcome::new('a', ratio(1, 3)),
            Outcome::new('b', ratio(2, 3)),
        ]);
        let collapsed = skewed.flat_map(|_| Distribution::pure(()));
        assert_eq!(collapsed.probability(), ratio(1, 1));
    }

    #[rstest]
    fn map2_combines_independent_distributions() {
        let die = || Distribution::uniform(1..=6);
        let total = die().map2(die(), |a, b| a + b);

        assert_eq!(total.probability_of(|&sum| sum == 2), ratio(1, 36));
        assert_eq!(total.probability_of(|&sum| sum == 7), ratio(1, 6));
        assert_eq!(total.probability(), ratio(1, 1));
    }

    #[rstest]
    fn duplicate_values_keep_separate_outcomes() {
        let loaded = Distribution::uniform(vec![1, 1, 2]);
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.probability_of(|&v| v == 1), ratio(2, 3));
    }

    #[rstest]
    fn exactness_survives_long_chains() {
        // 1/3 has no exact binary floating representation; rationals keep it.
        let mut distribution = Distribution::uniform(vec![0, 1, 2]);
        for _ in 0..10 {
            distribution = distribution.flat_map(|n| Distribution::uniform(vec![n, n, n]));
        }
        assert_eq!(distribution.probability(), ratio(1, 1));
    }
}
