//! Concrete computation kinds built over the capability contract.
//!
//! Each kind wraps one effect behind the same `pure`/`fmap`/`flat_map`
//! surface:
//!
//! - [`State`]: thread a mutable-looking state through a pure pipeline
//! - [`Reader`]: computations over a shared read-only environment
//! - [`Writer`]: accumulate monoidal output alongside a result
//! - [`Validation`]: a two-armed result whose applicative accumulates
//!   failures instead of stopping at the first
//! - [`History`]: an undo/redo log, with [`State`]-composed transitions
//!   in the [`history`] module
//! - [`Distribution`]: weighted outcomes with exact rational
//!   probabilities
//!
//! `Writer` and `Validation` are plain data and implement the
//! [`Functor`](crate::typeclass::Functor)/
//! [`Applicative`](crate::typeclass::Applicative)/
//! [`Monad`](crate::typeclass::Monad) traits; the closure-backed kinds
//! carry inherent methods with the same names and laws.

mod distribution;
pub mod history;
mod reader;
mod state;
mod validation;
mod writer;

pub use distribution::{Distribution, Outcome};
pub use history::History;
pub use reader::Reader;
pub use state::State;
pub use validation::{validate_all, Validation};
pub use writer::Writer;
