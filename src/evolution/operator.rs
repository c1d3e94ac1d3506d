use tracing::info;

use super::options::EvolutionOptions;
use crate::error::{GeneticError, Result};
use crate::layout::Layout;
use crate::population::PopulationStore;
use crate::rng::RandomNumberGenerator;
use crate::selection::{ExploitExploreSelection, SelectionStrategy};
use crate::strategy::{BreedStrategy, CarryOverStrategy};

/// Produces the next generation from the scored history.
///
/// Parents are selected from every layout ever recorded, not only the
/// generation that just finished, and then bred into a full generation.
#[derive(Debug, Clone)]
pub struct GeneticOperator<S = ExploitExploreSelection, B = CarryOverStrategy> {
    selection: S,
    breeding: B,
}

impl GeneticOperator {
    /// The operator described by `options`.
    pub fn from_options(options: &EvolutionOptions) -> Result<Self> {
        let selection = ExploitExploreSelection::new(options.get_exploit_fraction())?
            .with_parallel_threshold(options.get_parallel_threshold());
        Ok(Self::new(selection, CarryOverStrategy))
    }
}

impl<S, B> GeneticOperator<S, B>
where
    S: SelectionStrategy<Layout>,
    B: BreedStrategy<Layout>,
{
    pub fn new(selection: S, breeding: B) -> Self {
        Self {
            selection,
            breeding,
        }
    }

    /// Picks `options.get_parent_slots()` parents out of the whole history.
    pub fn select_parents(
        &self,
        store: &PopulationStore,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Layout>> {
        if store.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let (population, fitness): (Vec<Layout>, Vec<f64>) = store
            .iter()
            .map(|(key, score)| (key.to_layout(), score))
            .unzip();

        self.selection
            .select(&population, &fitness, options.get_parent_slots(), rng)
    }

    /// Selects parents and breeds exactly `options.get_population_size()` layouts.
    pub fn next_generation(
        &self,
        store: &PopulationStore,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Layout>> {
        let parents = self.select_parents(store, options, rng)?;

        let parent_scores: Vec<f64> = parents
            .iter()
            .filter_map(|parent| store.get(&parent.key()))
            .collect();
        if !parent_scores.is_empty() {
            info!(
                parents = parents.len(),
                history = store.len(),
                avg_score = parent_scores.iter().sum::<f64>() / parent_scores.len() as f64,
                "Parents selected"
            );
        }

        let children = self.breeding.breed(&parents, options, rng)?;
        if children.len() != options.get_population_size() {
            return Err(GeneticError::Breeding(format!(
                "Bred {} layouts, expected {}",
                children.len(),
                options.get_population_size()
            )));
        }

        Ok(children)
    }
}
