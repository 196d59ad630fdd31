//! Integration tests for the distribution monad, with the classic coin
//! and dice models built from `uniform`.

use effectual::effect::Distribution;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use rstest::rstest;

fn ratio(numerator: i64, denominator: i64) -> BigRational {
    BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coin {
    Heads,
    Tails,
}

fn fair_coin() -> Distribution<Coin> {
    Distribution::uniform(vec![Coin::Heads, Coin::Tails])
}

fn fair_die() -> Distribution<u8> {
    Distribution::uniform(1..=6)
}

#[rstest]
fn a_fair_coin_lands_heads_half_the_time() {
    assert_eq!(fair_coin().probability_of(|&c| c == Coin::Heads), ratio(1, 2));
    assert_eq!(fair_coin().probability(), BigRational::one());
}

#[rstest]
fn each_die_face_has_probability_one_sixth() {
    let die = fair_die();
    for face in 1..=6u8 {
        assert_eq!(die.probability_of(|&f| f == face), ratio(1, 6));
    }
}

#[rstest]
fn two_dice_sum_follows_the_triangle_distribution() {
    let total = fair_die().flat_map(|first| fair_die().fmap(move |second| first + second));

    assert_eq!(total.probability_of(|&sum| sum == 2), ratio(1, 36));
    assert_eq!(total.probability_of(|&sum| sum == 7), ratio(6, 36));
    assert_eq!(total.probability_of(|&sum| sum == 12), ratio(1, 36));
    assert_eq!(total.probability_of(|&sum| sum >= 10), ratio(6, 36));
    assert_eq!(total.probability(), BigRational::one());
}

#[rstest]
fn coin_then_conditional_die_weights_the_branches() {
    // Flip a coin; on heads roll a d6, on tails take a constant 0.
    let game = fair_coin().flat_map(|coin| match coin {
        Coin::Heads => fair_die(),
        Coin::Tails => Distribution::pure(0),
    });

    assert_eq!(game.probability_of(|&v| v == 0), ratio(1, 2));
    assert_eq!(game.probability_of(|&v| v == 3), ratio(1, 12));
    assert_eq!(game.probability(), BigRational::one());
}

#[rstest]
fn three_coin_flips_count_heads_exactly() {
    let flip = |count: u8| fair_coin().fmap(move |c| count + u8::from(c == Coin::Heads));
    let heads = fair_coin()
        .fmap(|c| u8::from(c == Coin::Heads))
        .flat_map(flip)
        .flat_map(flip);

    assert_eq!(heads.probability_of(|&n| n == 0), ratio(1, 8));
    assert_eq!(heads.probability_of(|&n| n == 1), ratio(3, 8));
    assert_eq!(heads.probability_of(|&n| n == 2), ratio(3, 8));
    assert_eq!(heads.probability_of(|&n| n == 3), ratio(1, 8));
}

#[rstest]
fn normalization_is_exact_not_approximate() {
    // 6 * (1/6) must be exactly 1; floats would accumulate error in the
    // equivalent chain of additions.
    let die = fair_die();
    let mass: BigRational = (1..=6u8)
        .map(|face| die.probability_of(|&f| f == face))
        .fold(BigRational::new(BigInt::from(0), BigInt::from(1)), |a, b| {
            a + b
        });
    assert_eq!(mass, BigRational::one());
}

#[rstest]
fn map2_equals_flat_map_then_fmap() {
    let via_map2 = fair_die().map2(fair_die(), |a, b| a + b);
    let via_chain = fair_die().flat_map(|a| fair_die().fmap(move |b| a + b));

    for sum in 2..=12u8 {
        assert_eq!(
            via_map2.probability_of(|&v| v == sum),
            via_chain.probability_of(|&v| v == sum)
        );
    }
}
