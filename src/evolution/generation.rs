use std::collections::VecDeque;
use std::sync::Arc;

use crate::layout::{Individual, Layout};

/// One population cycle: the fixed member set and the queue of members still
/// waiting for evaluation.
///
/// The queue is an independent copy of the members, so draining it never
/// touches the member set.
#[derive(Debug, Clone)]
pub struct Generation {
    index: usize,
    members: Arc<[Individual]>,
    remaining: VecDeque<Individual>,
}

impl Generation {
    pub fn new(index: usize, layouts: Vec<Layout>) -> Self {
        let members: Arc<[Individual]> = layouts.into_iter().map(Individual::new).collect();
        let remaining = members.iter().cloned().collect();
        Self {
            index,
            members,
            remaining,
        }
    }

    /// Zero for the seeded generation, incremented at every breeding step.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members not yet handed out for evaluation.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Takes the next member to evaluate.
    pub fn next_candidate(&mut self) -> Option<Individual> {
        self.remaining.pop_front()
    }
}
