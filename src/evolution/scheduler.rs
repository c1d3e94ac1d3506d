use tracing::{debug, info, warn};

use super::{
    generation::Generation, operator::GeneticOperator, options::EvolutionOptions,
    oracle::SimulationOracle,
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    layout::{Individual, Layout, LayoutKey},
    population::PopulationStore,
    rng::RandomNumberGenerator,
};

/// Represents the result of an evolution, containing a layout and its associated score.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The best layout found.
    pub layout: Layout,
    /// The score recorded for it.
    pub score: f64,
}

/// Where the scheduler stands in the evaluation cycle.
///
/// `Seed` assigns the next candidate, `Run` advances it, `Drain` records its
/// score and resets the oracle, `Breed` produces the next generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Seed,
    Run,
    Drain,
    Breed,
}

/// A candidate whose window closed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedEvaluation {
    pub key: LayoutKey,
    /// Best score observed during the window.
    pub score: f64,
    /// Score held by the store after recording.
    pub stored: f64,
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// State the scheduler is left in.
    pub state: SchedulerState,
    pub generation: usize,
    /// Candidates handed to the oracle so far in this generation.
    pub evaluated: usize,
    /// Raw oracle score read this tick.
    pub current_score: f64,
    /// Running maximum of the open window, never below zero.
    pub window_best: f64,
    pub completed: Option<CompletedEvaluation>,
}

/// Invoked once at the end of every tick.
pub type HostCallback = Box<dyn FnMut(&TickReport)>;

// The best score starts at zero and only rises
#[derive(Debug, Clone, Default)]
struct EvaluationWindow {
    elapsed_ms: u64,
    best: f64,
}

impl EvaluationWindow {
    fn observe(&mut self, score: f64) {
        self.best = self.best.max(score);
    }
}

/// Evaluates candidates one at a time against a [`SimulationOracle`] and breeds
/// a new generation whenever the current one has been fully evaluated.
///
/// The scheduler is driven by [`tick`](EvaluationScheduler::tick): each call
/// advances the oracle by the elapsed time and, once the fixed window of the
/// current candidate has passed, records its best score and moves on.
pub struct EvaluationScheduler<O>
where
    O: SimulationOracle,
{
    oracle: O,
    options: EvolutionOptions,
    operator: GeneticOperator,
    store: PopulationStore,
    generation: Generation,
    state: SchedulerState,
    current: Option<Individual>,
    window: EvaluationWindow,
    evaluated: usize,
    total_evaluated: usize,
    rng: RandomNumberGenerator,
    host: Option<HostCallback>,
}

impl<O> EvaluationScheduler<O>
where
    O: SimulationOracle,
{
    pub(crate) fn new(
        oracle: O,
        options: EvolutionOptions,
        operator: GeneticOperator,
        seeded: Vec<Layout>,
        rng: RandomNumberGenerator,
        host: Option<HostCallback>,
    ) -> Self {
        let store = PopulationStore::new(options.get_score_retention());
        Self {
            oracle,
            options,
            operator,
            store,
            generation: Generation::new(0, seeded),
            state: SchedulerState::Seed,
            current: None,
            window: EvaluationWindow::default(),
            evaluated: 0,
            total_evaluated: 0,
            rng,
            host,
        }
    }

    /// Advances the evaluation by `delta_ms` milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if breeding fails at a generation boundary.
    pub fn tick(&mut self, delta_ms: u64) -> Result<TickReport> {
        if self.state == SchedulerState::Seed {
            self.seed_next()?;
        }

        let current_score = self.advance(delta_ms);

        let mut completed = None;
        if self.window.elapsed_ms >= self.options.get_window_duration_ms() {
            self.state = SchedulerState::Drain;
            completed = Some(self.drain()?);

            if self.state == SchedulerState::Breed {
                self.breed()?;
            }
        }

        let report = TickReport {
            state: self.state,
            generation: self.generation.index(),
            evaluated: self.evaluated,
            current_score,
            window_best: self.window.best,
            completed,
        };

        if let Some(host) = self.host.as_mut() {
            host(&report);
        }

        Ok(report)
    }

    /// Ticks until `generations` more generations have been bred.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `delta_ms` is zero, since the window
    /// would never close.
    pub fn run_generations(&mut self, generations: usize, delta_ms: u64) -> Result<()> {
        if delta_ms == 0 {
            return Err(GeneticError::Configuration(
                "Tick delta must be positive to advance the evaluation window".to_string(),
            ));
        }

        let target = self.generation.index() + generations;
        while self.generation.index() < target {
            self.tick(delta_ms)?;
        }
        Ok(())
    }

    /// The best layout of the whole history.
    pub fn best(&self) -> Option<EvolutionResult> {
        self.store.best().map(|(key, score)| EvolutionResult {
            layout: key.to_layout(),
            score,
        })
    }

    /// Stops the run and reports the best layout of the whole history.
    ///
    /// A candidate still inside its window is discarded without being
    /// recorded and the oracle is reset.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if no window ever completed.
    pub fn terminate(mut self) -> Result<EvolutionResult> {
        if let Some(candidate) = self.current.take() {
            self.oracle.reset();
            debug!(key = %candidate.key(), "Discarded candidate with an open window");
        }

        let best = self
            .best()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        info!(
            score = best.score,
            layout = %best.layout,
            generation = self.generation.index(),
            evaluated = self.total_evaluated,
            history = self.store.len(),
            "Best layout found"
        );

        Ok(best)
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn store(&self) -> &PopulationStore {
        &self.store
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// The candidate currently installed in the oracle.
    pub fn current_candidate(&self) -> Option<&Individual> {
        self.current.as_ref()
    }

    /// Candidates handed to the oracle over the whole run.
    pub fn total_evaluated(&self) -> usize {
        self.total_evaluated
    }

    fn seed_next(&mut self) -> Result<()> {
        let candidate = self.generation.next_candidate().ok_or_else_genetic(|| {
            GeneticError::Evaluation(format!(
                "No candidate left to evaluate in generation {}",
                self.generation.index()
            ))
        })?;

        self.oracle.assign(candidate.layout());
        self.window = EvaluationWindow::default();
        self.evaluated += 1;
        self.total_evaluated += 1;

        debug!(
            generation = self.generation.index(),
            evaluated = self.evaluated,
            key = %candidate.key(),
            "Candidate assigned"
        );

        self.current = Some(candidate);
        self.state = SchedulerState::Run;
        Ok(())
    }

    fn advance(&mut self, delta_ms: u64) -> f64 {
        self.oracle.tick(delta_ms);
        self.window.elapsed_ms = self.window.elapsed_ms.saturating_add(delta_ms);

        let score = self.oracle.current_score();
        if score.is_finite() {
            self.window.observe(score);
        } else {
            warn!(score, "Ignoring non-finite score from the simulation");
        }
        score
    }

    fn drain(&mut self) -> Result<CompletedEvaluation> {
        let candidate = self.current.take().ok_or_else_genetic(|| {
            GeneticError::Evaluation("Window closed without an assigned candidate".to_string())
        })?;

        let score = self.window.best;
        let key = candidate.key().clone();
        let stored = self.store.record(key.clone(), score);
        self.oracle.reset();
        self.window = EvaluationWindow::default();

        debug!(
            generation = self.generation.index(),
            key = %key,
            score,
            stored,
            "Candidate evaluated"
        );

        self.state = if self.generation.is_exhausted() {
            SchedulerState::Breed
        } else {
            SchedulerState::Seed
        };

        Ok(CompletedEvaluation { key, score, stored })
    }

    fn breed(&mut self) -> Result<()> {
        let layouts = self
            .operator
            .next_generation(&self.store, &self.options, &mut self.rng)?;

        let finished = self.generation.index();
        self.generation = Generation::new(finished + 1, layouts);
        self.evaluated = 0;
        self.state = SchedulerState::Seed;

        if let Some((_, best_score)) = self.store.best() {
            info!(
                generation = finished,
                history = self.store.len(),
                best_score,
                "Generation complete"
            );
        }
        Ok(())
    }
}
