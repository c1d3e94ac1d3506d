//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the interface for candidates that the breeding
//! strategies know how to recombine and mutate. [`Layout`] is the candidate this
//! crate evolves; the trait keeps breeding strategies independent of it so they
//! can be exercised with simpler stand-ins.
//!
//! ## Example
//!
//! ```rust
//! use transit_ga::phenotype::Phenotype;
//! use transit_ga::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Counter {
//!     value: i64,
//! }
//!
//! impl Phenotype for Counter {
//!     fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator) {
//!         if rng.coin_flip() {
//!             self.value = other.value;
//!         }
//!     }
//!
//!     fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {
//!         self.value += 1;
//!     }
//! }
//! ```
//!
//! [`Layout`]: crate::layout::Layout

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in an evolutionary algorithm.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `Send`, and `Sync`.
pub trait Phenotype: Clone + Debug + Send + Sync {
    /// Folds genetic material from `other` into `self`.
    ///
    /// `self` is expected to start out as a copy of the first parent, so the
    /// child of two parents is produced by cloning one and crossing it with the other.
    fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator);

    /// Introduces a random change into the individual.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator);
}
