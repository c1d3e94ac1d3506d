//! # Layouts
//!
//! A [`Layout`] is one candidate transit network: a fixed number of [`Line`]s.
//! Layouts are the mutable working form the genetic operators edit; a
//! [`LayoutKey`] is the immutable canonical form used to look scores up, and an
//! [`Individual`] pairs the two so the key is computed once per candidate.
//!
//! The number of lines in a layout is fixed when it is built. Crossover and
//! mutation move stops between lines and extend lines, but never add or
//! remove a line.

pub mod key;
pub mod line;

use std::fmt;

use tracing::debug;

use crate::network::StationId;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

pub use key::LayoutKey;
pub use line::Line;

/// A candidate network: an ordered collection of lines.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Layout {
    lines: Vec<Line>,
}

impl Layout {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Builds a layout from raw station id sequences.
    pub fn from_ids(lines: &[&[u32]]) -> Self {
        Self::new(
            lines
                .iter()
                .map(|ids| Line::new(ids.iter().map(|&id| StationId(id)).collect()))
                .collect(),
        )
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn key(&self) -> LayoutKey {
        LayoutKey::from(self)
    }

    /// Index of the first line equal to the line at `idx`.
    fn first_match(&self, idx: usize) -> usize {
        self.lines
            .iter()
            .position(|line| *line == self.lines[idx])
            .unwrap_or(idx)
    }

    /// Extends the line at `target` with a random stop of `donor`.
    ///
    /// A stop the line already visits is skipped, not retried.
    fn graft_stop(&mut self, target: usize, donor: &Line, rng: &mut RandomNumberGenerator) {
        if let Some(&station) = rng.choose(donor.stations()) {
            self.lines[target].push_unique(station);
        }
    }

    /// Moves the last stop of the line at `target` onto a different line.
    ///
    /// Lines with a single stop are left alone. The moved stop is dropped when
    /// the chosen line already visits it or no different line exists.
    fn relocate_tail(&mut self, target: usize, rng: &mut RandomNumberGenerator) {
        if self.lines[target].len() <= 1 {
            return;
        }
        let Some(orphan) = self.lines[target].pop() else {
            return;
        };

        let modified = &self.lines[target];
        let available: Vec<usize> = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| *line != modified)
            .map(|(idx, _)| idx)
            .collect();

        match rng.choose(&available) {
            Some(&idx) => {
                if !self.lines[idx].push_unique(orphan) {
                    debug!(station = %orphan, line = idx, "Orphaned stop already on receiving line, dropped");
                }
            }
            None => debug!(station = %orphan, "No other line to receive orphaned stop, dropped"),
        }
    }
}

impl Phenotype for Layout {
    /// Recombines one line of `self` with one line of `other`.
    ///
    /// A line `l1` of `self` and a line `l2` of `other` are picked at random.
    /// On heads a random stop of `l2` is appended to `l1`; on tails the last
    /// stop of `l1` is moved onto another line of `self`.
    fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator) {
        let Some(picked) = rng.gen_index(self.lines.len()) else {
            return;
        };
        let Some(donor) = rng.choose(&other.lines) else {
            return;
        };
        let target = self.first_match(picked);

        if rng.coin_flip() {
            self.graft_stop(target, donor, rng);
        } else {
            self.relocate_tail(target, rng);
        }
    }

    /// Closes one random line into a loop.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
        if let Some(idx) = rng.gen_index(self.lines.len()) {
            self.lines[idx].close_loop();
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, line) in self.lines.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", line)?;
        }
        write!(f, "]")
    }
}

/// A layout together with its canonical key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    layout: Layout,
    key: LayoutKey,
}

impl Individual {
    pub fn new(layout: Layout) -> Self {
        let key = layout.key();
        Self { layout, key }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn key(&self) -> &LayoutKey {
        &self.key
    }

    pub fn into_layout(self) -> Layout {
        self.layout
    }
}

impl From<Layout> for Individual {
    fn from(layout: Layout) -> Self {
        Individual::new(layout)
    }
}

impl From<&LayoutKey> for Individual {
    fn from(key: &LayoutKey) -> Self {
        Individual {
            layout: key.to_layout(),
            key: key.clone(),
        }
    }
}
