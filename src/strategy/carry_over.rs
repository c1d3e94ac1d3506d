use tracing::warn;

use super::BreedStrategy;
use crate::error::{GeneticError, Result};
use crate::evolution::options::EvolutionOptions;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// # CarryOverStrategy
///
/// Parents are copied unchanged into the next generation and compete again.
/// The remaining slots are filled with children: each child is a copy of one
/// random parent crossed with a different random parent. Finally, with
/// `mutation_probability`, one random member of the new generation is mutated.
#[derive(Debug, Clone, Default)]
pub struct CarryOverStrategy;

impl<Pheno> BreedStrategy<Pheno> for CarryOverStrategy
where
    Pheno: Phenotype,
{
    fn breed(
        &self,
        parents: &[Pheno],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>> {
        if parents.is_empty() {
            return Err(GeneticError::Breeding(
                "Cannot breed from an empty set of parents".to_string(),
            ));
        }

        let population_size = evol_options.get_population_size();
        if parents.len() > population_size {
            return Err(GeneticError::Breeding(format!(
                "{} parents do not fit a generation of {}",
                parents.len(),
                population_size
            )));
        }

        if parents.len() < 2 {
            warn!("Only one distinct parent available, children will cross it with itself");
        }

        let mut children: Vec<Pheno> = Vec::with_capacity(population_size);
        children.extend_from_slice(parents);

        while children.len() < population_size {
            let (first, second) = rng.distinct_pair(parents.len()).unwrap_or((0, 0));
            let mut child = parents[first].clone();
            child.crossover(&parents[second], rng);
            children.push(child);
        }

        if rng.gen_bool(evol_options.get_mutation_probability()) {
            if let Some(idx) = rng.gen_index(children.len()) {
                children[idx].mutate(rng);
            }
        }

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        crossed_with: Vec<usize>,
        id: usize,
        mutations: usize,
    }

    impl Tally {
        fn new(id: usize) -> Self {
            Self {
                crossed_with: Vec::new(),
                id,
                mutations: 0,
            }
        }
    }

    impl Phenotype for Tally {
        fn crossover(&mut self, other: &Self, _rng: &mut RandomNumberGenerator) {
            self.crossed_with.push(other.id);
        }

        fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {
            self.mutations += 1;
        }
    }

    fn options(population_size: usize, mutation_probability: f64) -> EvolutionOptions {
        EvolutionOptions::builder()
            .population_size(population_size)
            .mutation_probability(mutation_probability)
            .build()
    }

    #[test]
    fn test_generation_size_is_exact() {
        let parents: Vec<_> = (0..3).map(Tally::new).collect();
        let strategy = CarryOverStrategy;

        for size in [4, 5, 7, 20] {
            let mut rng = RandomNumberGenerator::from_seed(size as u64);
            let children = strategy.breed(&parents, &options(size, 0.1), &mut rng).unwrap();
            assert_eq!(children.len(), size);
        }
    }

    #[test]
    fn test_parents_carried_over_unchanged() {
        let parents: Vec<_> = (0..3).map(Tally::new).collect();
        let mut rng = RandomNumberGenerator::from_seed(5);
        let children = CarryOverStrategy
            .breed(&parents, &options(8, 0.0), &mut rng)
            .unwrap();

        assert_eq!(&children[..3], &parents[..]);
    }

    #[test]
    fn test_children_cross_distinct_parents() {
        let parents: Vec<_> = (0..4).map(Tally::new).collect();
        let mut rng = RandomNumberGenerator::from_seed(9);
        let children = CarryOverStrategy
            .breed(&parents, &options(40, 0.0), &mut rng)
            .unwrap();

        for child in &children[4..] {
            assert_eq!(child.crossed_with.len(), 1);
            assert_ne!(child.crossed_with[0], child.id);
        }
    }

    #[test]
    fn test_mutation_applied_at_most_once() {
        let parents: Vec<_> = (0..2).map(Tally::new).collect();
        let strategy = CarryOverStrategy;

        let mut rng = RandomNumberGenerator::from_seed(1);
        let always = strategy.breed(&parents, &options(6, 1.0), &mut rng).unwrap();
        assert_eq!(always.iter().map(|c| c.mutations).sum::<usize>(), 1);

        let never = strategy.breed(&parents, &options(6, 0.0), &mut rng).unwrap();
        assert_eq!(never.iter().map(|c| c.mutations).sum::<usize>(), 0);
    }

    #[test]
    fn test_single_parent_still_fills_generation() {
        let parents = vec![Tally::new(0)];
        let mut rng = RandomNumberGenerator::from_seed(2);
        let children = CarryOverStrategy
            .breed(&parents, &options(4, 0.0), &mut rng)
            .unwrap();
        assert_eq!(children.len(), 4);
        assert!(children[1..].iter().all(|c| c.crossed_with == vec![0]));
    }

    #[test]
    fn test_empty_parents() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let result = CarryOverStrategy.breed(&Vec::<Tally>::new(), &options(4, 0.1), &mut rng);
        assert!(matches!(result, Err(GeneticError::Breeding(_))));
    }

    #[test]
    fn test_layouts_keep_line_count() {
        let parents = vec![
            Layout::from_ids(&[&[1, 2, 3], &[4, 5], &[6]]),
            Layout::from_ids(&[&[3, 2], &[1, 6], &[4, 5]]),
        ];
        let mut rng = RandomNumberGenerator::from_seed(17);
        let children = CarryOverStrategy
            .breed(&parents, &options(12, 1.0), &mut rng)
            .unwrap();

        assert_eq!(children.len(), 12);
        assert!(children.iter().all(|child| child.num_lines() == 3));
    }
}
