use tracing::info;

use super::{
    operator::GeneticOperator,
    options::EvolutionOptions,
    oracle::SimulationOracle,
    scheduler::{EvaluationScheduler, HostCallback, TickReport},
};
use crate::{
    error::{GeneticError, Result},
    network::StationSet,
    rng::RandomNumberGenerator,
    seeder::PathSeeder,
};

/// Assembles an [`EvaluationScheduler`] and seeds its first generation.
///
/// All configuration is checked in [`build`](SchedulerBuilder::build), so an
/// invalid setup fails before the first tick.
pub struct SchedulerBuilder<O>
where
    O: SimulationOracle,
{
    options: Option<EvolutionOptions>,
    stations: Option<StationSet>,
    oracle: Option<O>,
    rng: Option<RandomNumberGenerator>,
    host: Option<HostCallback>,
}

impl<O> SchedulerBuilder<O>
where
    O: SimulationOracle,
{
    pub fn new() -> Self {
        Self {
            options: None,
            stations: None,
            oracle: None,
            rng: None,
            host: None,
        }
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_stations(mut self, stations: StationSet) -> Self {
        self.stations = Some(stations);
        self
    }

    pub fn with_oracle(mut self, oracle: O) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(RandomNumberGenerator::from_seed(seed))
    }

    /// Registers the host integration (rendering, input) run after every tick.
    pub fn with_host_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&TickReport) + 'static,
    {
        self.host = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Result<EvaluationScheduler<O>> {
        let options = self.options.unwrap_or_default();
        options.validate()?;

        let oracle = self.oracle.ok_or_else(|| {
            GeneticError::Configuration("Simulation oracle not specified".to_string())
        })?;

        let stations = self.stations.ok_or_else(|| {
            GeneticError::Configuration("Station set not specified".to_string())
        })?;
        if stations.is_empty() {
            return Err(GeneticError::Configuration(
                "Station set is empty".to_string(),
            ));
        }

        let operator = GeneticOperator::from_options(&options)?;
        let mut rng = self.rng.unwrap_or_default();

        let seeder = PathSeeder::new(&stations, options.get_num_lines());
        let seeded = seeder.generate_many(options.get_population_size(), &mut rng);

        info!(
            stations = stations.len(),
            lines = options.get_num_lines(),
            population = options.get_population_size(),
            window_ms = options.get_window_duration_ms(),
            "Seeded first generation"
        );

        Ok(EvaluationScheduler::new(
            oracle, options, operator, seeded, rng, self.host,
        ))
    }
}

impl<O> Default for SchedulerBuilder<O>
where
    O: SimulationOracle,
{
    fn default() -> Self {
        Self::new()
    }
}
