use std::fmt;

use super::{Layout, Line};
use crate::network::StationId;

/// The canonical, immutable form of a [`Layout`], used as a lookup key.
///
/// Two layouts produce equal keys exactly when they hold the same lines, with
/// the same stops in the same order, at the same positions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayoutKey(Box<[Box<[StationId]>]>);

impl LayoutKey {
    pub fn lines(&self) -> impl Iterator<Item = &[StationId]> {
        self.0.iter().map(|line| &line[..])
    }

    pub fn num_lines(&self) -> usize {
        self.0.len()
    }

    /// Rebuilds the mutable working form of the layout.
    pub fn to_layout(&self) -> Layout {
        Layout::new(
            self.0
                .iter()
                .map(|line| Line::new(line.to_vec()))
                .collect(),
        )
    }
}

impl From<&Layout> for LayoutKey {
    fn from(layout: &Layout) -> Self {
        LayoutKey(
            layout
                .lines()
                .iter()
                .map(|line| line.stations().to_vec().into_boxed_slice())
                .collect(),
        )
    }
}

impl fmt::Display for LayoutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, line) in self.0.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (stop, station) in line.iter().enumerate() {
                if stop > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", station)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
