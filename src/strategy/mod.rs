//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! a new generation from a set of selected parents and evolution options.
pub mod carry_over;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Breeds the next generation from the selected parents.
pub trait BreedStrategy<Pheno: Phenotype>
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds a full generation from `parents`.
    ///
    /// ## Returns
    ///
    /// A Result containing exactly `evol_options.get_population_size()` individuals,
    /// or a GeneticError if breeding fails.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The parents slice is empty
    /// - There are more parents than the generation can hold
    fn breed(
        &self,
        parents: &[Pheno],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>>;
}

pub use carry_over::CarryOverStrategy;
