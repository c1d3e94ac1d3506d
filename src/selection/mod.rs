pub mod exploit_explore;
pub mod selection_strategy;

pub use exploit_explore::ExploitExploreSelection;
pub use selection_strategy::SelectionStrategy;
