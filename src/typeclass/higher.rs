//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over type constructors like `Option<_>` or
//! `Result<_, E>` directly, which is exactly what a shared wrap/chain
//! contract needs: one set of combinators, many computation kinds. This
//! module works around the limitation with a Generic Associated Type:
//! a type names its current `Inner` parameter and how to re-apply its
//! own constructor to a different parameter (`WithType<B>`).
//!
//! Every computation kind that participates in the generic combinator
//! layer implements [`TypeConstructor`] first; the `Functor`,
//! `Applicative` and `Monad` traits all build on it.
//!
//! # Example
//!
//! ```rust
//! use effectual::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = reset(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// Implementors are a type constructor applied to some parameter `A`
/// (for example `Option<A>` or `Validation<E, A>`); the trait exposes
/// that parameter and the ability to swap it.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` must be the same
/// type as `F` (re-applying the constructor to the current parameter is
/// the identity).
pub trait TypeConstructor {
    /// The type parameter this constructor is currently applied to.
    ///
    /// For `Option<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different parameter `B`.
    ///
    /// For `Option<i32>`, `WithType<String>` is `Option<String>`. The
    /// `TypeConstructor<Inner = B>` constraint keeps the result usable
    /// for further transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn result_with_type_preserves_error_type() {
        fn assert_result_with_type<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_result_with_type::<i32, String, bool>();
        assert_result_with_type::<Vec<u8>, std::io::Error, String>();
    }

    #[test]
    fn box_with_type_produces_correct_type() {
        fn assert_inner<T: TypeConstructor<Inner = f64>>() {}
        assert_inner::<<Box<i32> as TypeConstructor>::WithType<f64>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_option_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_option_bool::<Step2>();
    }
}
