//! # Error Types
//!
//! This module defines the error type shared by the whole crate. Degenerate
//! inputs met during a run (too few stations, duplicate insertions, short
//! lines) are absorbed by the operators themselves; the variants below cover
//! what is left: invalid startup configuration and broken internal contracts.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use transit_ga::error::{GeneticError, Result};
//!
//! fn check_lines(num_lines: usize) -> Result<()> {
//!     if num_lines < 2 {
//!         return Err(GeneticError::Configuration(format!(
//!             "Number of lines must be at least 2, got {}",
//!             num_lines
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_lines(3).is_ok());
//! assert!(check_lines(1).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use transit_ga::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[u32]) -> transit_ga::error::Result<u32> {
//!     scores.iter().max().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//!
//! assert_eq!(best_score(&[3, 9, 4]).unwrap(), 9);
//! assert!(best_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while evolving transit layouts.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an operation needs at least one recorded individual.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when the evaluation harness is driven out of order.
    #[error("Evaluation error: {0}")]
    Evaluation(String),
}

/// A specialized Result type for layout evolution operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message() {
        let err = GeneticError::Configuration("Population size must be at least 4".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Population size must be at least 4"
        );
    }

    #[test]
    fn test_ok_or_else_genetic() {
        let missing: Option<u8> = None;
        match missing.ok_or_else_genetic(|| GeneticError::EmptyPopulation) {
            Err(GeneticError::EmptyPopulation) => {}
            other => panic!("Expected EmptyPopulation, got {:?}", other),
        }
        assert_eq!(Some(7).ok_or_else_genetic(|| GeneticError::EmptyPopulation).unwrap(), 7);
    }

    #[test]
    fn test_variant_messages() {
        let errors = [
            GeneticError::Configuration("bad".to_string()),
            GeneticError::EmptyPopulation,
            GeneticError::Breeding("bad".to_string()),
            GeneticError::Evaluation("bad".to_string()),
        ];
        for err in errors {
            let prefix = match &err {
                GeneticError::Configuration(_) => "Configuration error",
                GeneticError::EmptyPopulation => "Empty population error",
                GeneticError::Breeding(_) => "Breeding error",
                GeneticError::Evaluation(_) => "Evaluation error",
            };
            assert!(err.to_string().starts_with(prefix));
        }
    }
}
