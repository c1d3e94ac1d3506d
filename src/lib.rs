pub mod error;
pub mod evolution;
pub mod layout;
pub mod network;
pub mod phenotype;
pub mod population;
pub mod rng;
pub mod seeder;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvaluationScheduler, EvolutionOptions, SchedulerBuilder, SimulationOracle};
pub use layout::{Layout, LayoutKey, Line};
pub use network::{ShapeCategory, Station, StationId, StationSet};
