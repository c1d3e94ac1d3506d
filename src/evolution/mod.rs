pub mod builder;
pub mod generation;
pub mod operator;
pub mod options;
pub mod oracle;
pub mod scheduler;

pub use builder::SchedulerBuilder;
pub use generation::Generation;
pub use operator::GeneticOperator;
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
pub use oracle::SimulationOracle;
pub use scheduler::{
    CompletedEvaluation, EvaluationScheduler, EvolutionResult, HostCallback, SchedulerState,
    TickReport,
};
