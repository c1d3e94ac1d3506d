use std::fmt;

use crate::network::StationId;

/// One route: an ordered sequence of station ids.
///
/// A line may visit a station more than once; a line whose first and last
/// stations coincide is a loop.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Line(Vec<StationId>);

impl Line {
    pub fn new(stations: Vec<StationId>) -> Self {
        Self(stations)
    }

    pub fn stations(&self) -> &[StationId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.0.contains(&station)
    }

    pub fn first(&self) -> Option<StationId> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<StationId> {
        self.0.last().copied()
    }

    pub fn push(&mut self, station: StationId) {
        self.0.push(station);
    }

    /// Appends `station` unless the line already visits it.
    ///
    /// Returns whether the station was appended.
    pub fn push_unique(&mut self, station: StationId) -> bool {
        if self.contains(station) {
            false
        } else {
            self.0.push(station);
            true
        }
    }

    pub fn pop(&mut self) -> Option<StationId> {
        self.0.pop()
    }

    /// `true` when the line has at least two stops and ends where it starts.
    pub fn is_loop(&self) -> bool {
        self.0.len() > 1 && self.first() == self.last()
    }

    /// Closes the line into a loop by appending its first station.
    ///
    /// Lines that are empty or already end on their first station are left unchanged.
    pub fn close_loop(&mut self) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) if first != last => {
                self.0.push(first);
                true
            }
            _ => false,
        }
    }

}

impl From<Vec<StationId>> for Line {
    fn from(stations: Vec<StationId>) -> Self {
        Self(stations)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, station) in self.0.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", station)?;
        }
        write!(f, "]")
    }
}
