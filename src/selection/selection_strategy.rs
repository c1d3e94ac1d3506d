use std::fmt::Debug;

use crate::error::Result;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// Selection strategies are responsible for choosing the parents of the next
/// generation from scored individuals.
///
/// # Examples
///
/// ```
/// use transit_ga::layout::Layout;
/// use transit_ga::rng::RandomNumberGenerator;
/// use transit_ga::selection::{ExploitExploreSelection, SelectionStrategy};
///
/// let population = vec![
///     Layout::from_ids(&[&[1, 2], &[3]]),
///     Layout::from_ids(&[&[2, 1], &[3]]),
///     Layout::from_ids(&[&[1], &[2, 3]]),
/// ];
/// let fitness = vec![0.5, 0.8, 0.3];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let selection = ExploitExploreSelection::new(0.9).unwrap();
/// let selected = selection.select(&population, &fitness, 2, &mut rng).unwrap();
///
/// assert_eq!(selected.len(), 2);
/// assert_eq!(selected[0], population[1]);
/// ```
pub trait SelectionStrategy<P>: Debug + Send + Sync
where
    P: Phenotype,
{
    /// Selects individuals from the population based on their fitness scores.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>>;
}
