//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the run parameters: how many lines a
//! layout has, how many layouts a generation holds, how long each layout is
//! simulated, and the knobs of the genetic operators.
//!
//! ## Example
//!
//! ```rust
//! use transit_ga::evolution::options::EvolutionOptions;
//!
//! let options = EvolutionOptions::builder()
//!     .num_lines(3)
//!     .population_size(8)
//!     .window_duration_ms(2_000)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! assert_eq!(options.get_parent_slots(), 4);
//! ```
//!
//! ## Fields
//!
//! - `num_lines`: lines per layout.
//! - `population_size`: layouts evaluated per generation.
//! - `window_duration_ms`: how long each layout runs inside the simulation.
//! - `exploit_fraction`: share of parent slots taken from the top historical scorers.
//! - `mutation_probability`: chance per generation of one loop-closing mutation.
//! - `score_retention`: what the store keeps when a known layout is re-scored.
//! - `parallel_threshold`: history size from which ranking sorts in parallel.

use crate::error::{GeneticError, Result};
use crate::population::ScoreRetention;

const DEFAULT_NUM_LINES: usize = 3;
const DEFAULT_POPULATION_SIZE: usize = 5;
const DEFAULT_WINDOW_DURATION_MS: u64 = 5_000;
const DEFAULT_EXPLOIT_FRACTION: f64 = 0.9;
const DEFAULT_MUTATION_PROBABILITY: f64 = 0.1;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Crossover samples two distinct parents out of `population_size / 2` slots.
pub const MIN_POPULATION_SIZE: usize = 4;
/// Relocating a stop needs a second line to move it to.
pub const MIN_NUM_LINES: usize = 2;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_lines: usize,
    population_size: usize,
    window_duration_ms: u64,
    exploit_fraction: f64,
    mutation_probability: f64,
    score_retention: ScoreRetention,
    /// Minimum number of recorded layouts to rank in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(num_lines: usize, population_size: usize, window_duration_ms: u64) -> Self {
        Self {
            num_lines,
            population_size,
            window_duration_ms,
            ..Self::default()
        }
    }

    /// Checks the structural preconditions the operators rely on.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(GeneticError::Configuration(format!(
                "Population size must be at least {}, got {}",
                MIN_POPULATION_SIZE, self.population_size
            )));
        }

        if self.num_lines < MIN_NUM_LINES {
            return Err(GeneticError::Configuration(format!(
                "Number of lines must be at least {}, got {}",
                MIN_NUM_LINES, self.num_lines
            )));
        }

        if self.window_duration_ms == 0 {
            return Err(GeneticError::Configuration(
                "Evaluation window duration cannot be zero".to_string(),
            ));
        }

        check_probability("Exploit fraction", self.exploit_fraction)?;
        check_probability("Mutation probability", self.mutation_probability)?;

        Ok(())
    }

    pub fn get_num_lines(&self) -> usize {
        self.num_lines
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    /// Parents chosen at every generation boundary.
    pub fn get_parent_slots(&self) -> usize {
        self.population_size / 2
    }

    pub fn get_window_duration_ms(&self) -> u64 {
        self.window_duration_ms
    }

    pub fn get_exploit_fraction(&self) -> f64 {
        self.exploit_fraction
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_score_retention(&self) -> ScoreRetention {
        self.score_retention
    }

    /// Returns the minimum number of recorded layouts to rank in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_num_lines(&mut self, num_lines: usize) {
        self.num_lines = num_lines;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_window_duration_ms(&mut self, window_duration_ms: u64) {
        self.window_duration_ms = window_duration_ms;
    }

    pub fn set_exploit_fraction(&mut self, exploit_fraction: f64) {
        self.exploit_fraction = exploit_fraction;
    }

    pub fn set_mutation_probability(&mut self, mutation_probability: f64) {
        self.mutation_probability = mutation_probability;
    }

    pub fn set_score_retention(&mut self, score_retention: ScoreRetention) {
        self.score_retention = score_retention;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(GeneticError::Configuration(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_lines: DEFAULT_NUM_LINES,
            population_size: DEFAULT_POPULATION_SIZE,
            window_duration_ms: DEFAULT_WINDOW_DURATION_MS,
            exploit_fraction: DEFAULT_EXPLOIT_FRACTION,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            score_retention: ScoreRetention::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the defaults of [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_lines: Option<usize>,
    population_size: Option<usize>,
    window_duration_ms: Option<u64>,
    exploit_fraction: Option<f64>,
    mutation_probability: Option<f64>,
    score_retention: Option<ScoreRetention>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn num_lines(mut self, value: usize) -> Self {
        self.num_lines = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn window_duration_ms(mut self, value: u64) -> Self {
        self.window_duration_ms = Some(value);
        self
    }

    pub fn exploit_fraction(mut self, value: f64) -> Self {
        self.exploit_fraction = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn score_retention(mut self, value: ScoreRetention) -> Self {
        self.score_retention = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    ///
    /// Values are not checked here; the scheduler validates them at startup.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            num_lines: self.num_lines.unwrap_or(default.num_lines),
            population_size: self.population_size.unwrap_or(default.population_size),
            window_duration_ms: self.window_duration_ms.unwrap_or(default.window_duration_ms),
            exploit_fraction: self.exploit_fraction.unwrap_or(default.exploit_fraction),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(default.mutation_probability),
            score_retention: self.score_retention.unwrap_or(default.score_retention),
            parallel_threshold: self.parallel_threshold.unwrap_or(default.parallel_threshold),
        }
    }
}
