//! Type class traits forming the capability contract.
//!
//! This module provides the trait hierarchy that every computation kind in
//! the library is written against:
//!
//! - [`Functor`]: mapping over the carried value
//! - [`Applicative`]: lifting values and combining independent computations
//! - [`Monad`]: sequencing dependent computations
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroup with identity element
//!
//! The [`combinator`] submodule derives the generic layer - application in
//! order, binary lifting, Kleisli composition, effectful folds - from
//! `pure` and `flat_map` alone.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing traits like Functor and Monad to be defined
//! generically over the container shape. [`TypeConstructor`] is the
//! foundation: it names the carried type and how to re-instantiate the
//! container at a different type.
//!
//! ## Note on Type Classes
//!
//! Kinds represented as owned closures (`State`, `Reader`, `Continuation`,
//! `Distribution`) cannot implement these traits without boxing costs that
//! would distort their API, so they carry inherent methods with the same
//! names and laws instead. Data-shaped kinds (`Option`, `Result`, `Writer`,
//! `Validation`) implement the traits directly.
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use effectual::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use effectual::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

mod applicative;
pub mod combinator;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use combinator::{
    apply_in_order, compose_kleisli, compose_kleisli_reverse, fold_effectful, lift2,
};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
