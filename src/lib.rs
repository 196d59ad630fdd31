//! # effectual
//!
//! Composable effectful computation kinds for Rust.
//!
//! ## Overview
//!
//! This library provides a single combinator algebra (sequencing, mapping,
//! applicative composition, Kleisli composition, effectful folds) that works
//! identically across many distinct computation kinds:
//!
//! - **Type Classes**: the wrap/chain capability contract (`Functor`,
//!   `Applicative`, `Monad`) plus `Semigroup`/`Monoid` for accumulation
//! - **Effect Kinds**: `State`, `Reader`, `Writer`, `Validation` (an
//!   accumulating applicative), `History` (an undo/redo log composed from
//!   `State`), and `Distribution` (a weighted-outcome monad with exact
//!   rational probabilities)
//! - **Control**: a `Continuation` monad with a success/failure callback
//!   pair and fault propagation, and a cooperative coroutine `Scheduler`
//!   built on top of it
//!
//! A computation kind only has to supply `pure` and `flat_map`; everything
//! else in the combinator layer is inherited.
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and the generic combinator layer
//! - `effect`: concrete computation kinds (State, Reader, Writer,
//!   Validation, History, Distribution)
//! - `control`: continuation monad and cooperative scheduler
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use effectual::typeclass::{Applicative, Monad};
//!
//! let result = Some(2)
//!     .flat_map(|x| Some(x + 1))
//!     .map2(Some(10), |x, y| x * y);
//! assert_eq!(result, Some(30));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use effectual::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "control")]
pub mod control;
