use std::cmp::Ordering;

use rayon::prelude::*;

use crate::error::{GeneticError, Result};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Splits the parent slots between top scorers and random picks.
///
/// `floor(exploit_fraction * num_to_select)` slots go to the best individuals,
/// verbatim and in rank order. The remaining slots are filled by sampling the
/// rest of the ranking uniformly without replacement, which keeps low scorers
/// in play and the population diverse. Fewer parents come back when the
/// population is too small to fill every slot.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct ExploitExploreSelection {
    exploit_fraction: f64,
    /// Population size from which ranking uses a parallel sort.
    parallel_threshold: usize,
}

impl ExploitExploreSelection {
    /// Creates a new selection with the given exploit share.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `exploit_fraction` is not in `[0, 1]`.
    pub fn new(exploit_fraction: f64) -> Result<Self> {
        if !exploit_fraction.is_finite() || !(0.0..=1.0).contains(&exploit_fraction) {
            return Err(GeneticError::Configuration(format!(
                "Exploit fraction must be within [0, 1], got {}",
                exploit_fraction
            )));
        }

        Ok(Self {
            exploit_fraction,
            parallel_threshold: 1000,
        })
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn exploit_fraction(&self) -> f64 {
        self.exploit_fraction
    }

    /// Number of slots filled from the top of the ranking.
    pub fn exploit_count(&self, num_to_select: usize) -> usize {
        (self.exploit_fraction * num_to_select as f64).floor() as usize
    }

    /// Indices of `fitness` ordered from best to worst.
    ///
    /// The sort is stable, so equal scores keep their population order. NaN
    /// ranks below every number.
    pub fn rank(&self, fitness: &[f64]) -> Vec<usize> {
        let mut indexed: Vec<(usize, f64)> = fitness.iter().copied().enumerate().collect();
        let by_score_descending = |a: &(usize, f64), b: &(usize, f64)| {
            b.1.partial_cmp(&a.1).unwrap_or_else(|| {
                if a.1.is_nan() && b.1.is_nan() {
                    Ordering::Equal
                } else if a.1.is_nan() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
        };

        if indexed.len() >= self.parallel_threshold {
            indexed.par_sort_by(by_score_descending);
        } else {
            indexed.sort_by(by_score_descending);
        }

        indexed.into_iter().map(|(idx, _)| idx).collect()
    }
}

impl Default for ExploitExploreSelection {
    fn default() -> Self {
        Self {
            exploit_fraction: 0.9,
            parallel_threshold: 1000,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ExploitExploreSelection {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            exploit_fraction: f64,
            parallel_threshold: Option<usize>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let selection =
            ExploitExploreSelection::new(raw.exploit_fraction).map_err(serde::de::Error::custom)?;
        Ok(match raw.parallel_threshold {
            Some(threshold) => selection.with_parallel_threshold(threshold),
            None => selection,
        })
    }
}

impl<P> SelectionStrategy<P> for ExploitExploreSelection
where
    P: Phenotype,
{
    fn select(
        &self,
        population: &[P],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if fitness.len() != population.len() {
            return Err(GeneticError::Configuration(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }

        let ranked = self.rank(fitness);
        let exploit = self.exploit_count(num_to_select).min(ranked.len());
        let (best, rest) = ranked.split_at(exploit);

        let mut selected = Vec::with_capacity(num_to_select);
        selected.extend(best.iter().map(|&idx| population[idx].clone()));

        let explore = num_to_select.saturating_sub(exploit);
        selected.extend(
            rng.sample_indices(rest.len(), explore)
                .into_iter()
                .map(|pick| population[rest[pick]].clone()),
        );

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phenotype::Phenotype;

    #[derive(Clone, Debug, PartialEq)]
    struct TestPhenotype {
        value: usize,
    }

    impl Phenotype for TestPhenotype {
        fn crossover(&mut self, other: &Self, _rng: &mut RandomNumberGenerator) {
            self.value = (self.value + other.value) / 2;
        }

        fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {
            self.value += 1;
        }
    }

    fn population(size: usize) -> Vec<TestPhenotype> {
        (0..size).map(|value| TestPhenotype { value }).collect()
    }

    #[test]
    fn test_top_scorers_always_selected() {
        let population = population(10);
        // Scores rise with value, so the best four are 9, 8, 7, 6
        let fitness: Vec<f64> = (0..10).map(|v| v as f64 * 1.5).collect();
        let selection = ExploitExploreSelection::new(0.9).unwrap();

        for seed in 0..50 {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let selected = selection.select(&population, &fitness, 5, &mut rng).unwrap();

            assert_eq!(selected.len(), 5);
            let values: Vec<_> = selected.iter().map(|p| p.value).collect();
            assert_eq!(&values[..4], &[9, 8, 7, 6]);
            // Exactly one explore parent, drawn from the remaining six
            assert!(values[4] < 6);
        }
    }

    #[test]
    fn test_explore_parents_are_distinct() {
        let population = population(20);
        let fitness: Vec<f64> = (0..20).map(|v| v as f64).collect();
        let selection = ExploitExploreSelection::new(0.5).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(3);

        let selected = selection.select(&population, &fitness, 10, &mut rng).unwrap();
        let mut values: Vec<_> = selected.iter().map(|p| p.value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 10);
    }

    #[test]
    fn test_small_population_returns_fewer() {
        let population = population(3);
        let fitness = vec![1.0, 2.0, 3.0];
        let selection = ExploitExploreSelection::default();
        let mut rng = RandomNumberGenerator::from_seed(0);

        let selected = selection.select(&population, &fitness, 5, &mut rng).unwrap();
        assert_eq!(selected.len(), 3);
        assert_eq!(selected[0].value, 2);
        assert_eq!(selected[1].value, 1);
        assert_eq!(selected[2].value, 0);
    }

    #[test]
    fn test_rank_handles_nan_and_ties() {
        let selection = ExploitExploreSelection::default();
        let ranked = selection.rank(&[1.0, f64::NAN, 3.0, 1.0]);
        assert_eq!(ranked, vec![2, 0, 3, 1]);
    }

    #[test]
    fn test_parallel_rank_matches_sequential() {
        let fitness: Vec<f64> = (0..2000).map(|v| ((v * 37) % 101) as f64).collect();
        let sequential = ExploitExploreSelection::default().with_parallel_threshold(usize::MAX);
        let parallel = ExploitExploreSelection::default().with_parallel_threshold(1);
        assert_eq!(sequential.rank(&fitness), parallel.rank(&fitness));
    }

    #[test]
    fn test_empty_population() {
        let selection = ExploitExploreSelection::default();
        let mut rng = RandomNumberGenerator::from_seed(0);
        let result = selection.select(&Vec::<TestPhenotype>::new(), &[], 2, &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_mismatched_lengths() {
        let selection = ExploitExploreSelection::default();
        let mut rng = RandomNumberGenerator::from_seed(0);
        let result = selection.select(&population(3), &[1.0], 2, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_invalid_fraction() {
        assert!(ExploitExploreSelection::new(1.5).is_err());
        assert!(ExploitExploreSelection::new(f64::NAN).is_err());
        assert!(ExploitExploreSelection::new(0.0).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_fraction() {
        let selection: ExploitExploreSelection =
            serde_json::from_str(r#"{ "exploit_fraction": 0.75, "parallel_threshold": 64 }"#)
                .unwrap();
        assert_eq!(selection.exploit_fraction(), 0.75);
        assert_eq!(selection.parallel_threshold, 64);

        let defaulted: ExploitExploreSelection =
            serde_json::from_str(r#"{ "exploit_fraction": 0.5 }"#).unwrap();
        assert_eq!(defaulted.parallel_threshold, 1000);

        let out_of_range =
            serde_json::from_str::<ExploitExploreSelection>(r#"{ "exploit_fraction": 1.5 }"#);
        let err = out_of_range.unwrap_err().to_string();
        assert!(err.contains("Exploit fraction must be within [0, 1]"), "{}", err);
    }
}
