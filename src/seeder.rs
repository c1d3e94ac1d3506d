//! # PathSeeder
//!
//! Builds the layouts of the first generation with a nearest-neighbour
//! heuristic:
//!
//! 1. Each line starts from a random unassigned station and greedily extends to
//!    the nearest unassigned station until it holds `stations / lines` stops.
//! 2. Every category missing from the line is then covered by appending the
//!    nearest station of that category, even when that station already sits on
//!    another line.
//! 3. Stations nobody picked are attached to the line holding the nearest
//!    placed station.
//!
//! Lines keep the order they were built in, so each one starts at its seed
//! station. With fewer stations than lines the seeder runs out of starting points and returns a
//! layout with fewer lines.
//!
//! ## Example
//!
//! ```rust
//! use transit_ga::network::{ShapeCategory, Station, StationSet};
//! use transit_ga::rng::RandomNumberGenerator;
//! use transit_ga::seeder::PathSeeder;
//!
//! let stations = StationSet::new(vec![
//!     Station::new(1, ShapeCategory::Rect, 0.0, 0.0),
//!     Station::new(2, ShapeCategory::Circle, 1.0, 0.0),
//!     Station::new(3, ShapeCategory::Triangle, 2.0, 0.0),
//!     Station::new(4, ShapeCategory::Rect, 3.0, 0.0),
//! ])
//! .unwrap();
//!
//! let seeder = PathSeeder::new(&stations, 2);
//! let layout = seeder.generate(&mut RandomNumberGenerator::from_seed(4));
//!
//! assert_eq!(layout.num_lines(), 2);
//! ```

use std::collections::BTreeSet;

use tracing::debug;

use crate::layout::{Layout, Line};
use crate::network::{StationId, StationSet};
use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone)]
pub struct PathSeeder<'a> {
    stations: &'a StationSet,
    num_lines: usize,
}

impl<'a> PathSeeder<'a> {
    pub fn new(stations: &'a StationSet, num_lines: usize) -> Self {
        Self {
            stations,
            num_lines,
        }
    }

    /// Target number of stops per line before category repair.
    pub fn stations_per_line(&self) -> usize {
        if self.num_lines == 0 {
            0
        } else {
            self.stations.len() / self.num_lines
        }
    }

    /// Builds one layout.
    pub fn generate(&self, rng: &mut RandomNumberGenerator) -> Layout {
        let mut unassigned: Vec<StationId> = self.stations.ids().collect();
        let mut lines = Vec::with_capacity(self.num_lines);

        for _ in 0..self.num_lines {
            let Some(start) = rng.gen_index(unassigned.len()) else {
                break;
            };
            let start = unassigned.remove(start);
            lines.push(self.build_line(start, &mut unassigned));
        }

        if lines.len() < self.num_lines {
            debug!(
                requested = self.num_lines,
                built = lines.len(),
                "Ran out of stations before building every line"
            );
        }

        self.attach_leftovers(&mut lines, unassigned);

        Layout::new(lines)
    }

    /// Builds `count` layouts.
    pub fn generate_many(&self, count: usize, rng: &mut RandomNumberGenerator) -> Vec<Layout> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Grows a line from `start`, consuming stations from `unassigned`.
    pub(crate) fn build_line(&self, start: StationId, unassigned: &mut Vec<StationId>) -> Line {
        let target = self.stations_per_line();
        let mut line = Line::new(vec![start]);
        let mut covered: BTreeSet<_> = self.stations.category_of(start).into_iter().collect();
        let mut current = start;

        while line.len() < target {
            let Some(position) = self.stations.nearest_position(current, unassigned) else {
                break;
            };
            let next = unassigned.remove(position);
            line.push(next);
            covered.extend(self.stations.category_of(next));
            current = next;
        }

        let missing: Vec<_> = self
            .stations
            .categories()
            .filter(|category| !covered.contains(category))
            .collect();

        for category in missing {
            let Some(next) = self
                .stations
                .nearest(current, self.stations.of_category(category))
            else {
                continue;
            };
            line.push(next);
            if let Some(position) = unassigned.iter().position(|&id| id == next) {
                unassigned.remove(position);
            }
        }

        line
    }

    /// Appends every unpicked station to the line holding the nearest placed station.
    fn attach_leftovers(&self, lines: &mut [Line], leftovers: Vec<StationId>) {
        for station in leftovers {
            let placed: Vec<StationId> = lines
                .iter()
                .flat_map(|line| line.stations().iter().copied())
                .collect();
            let Some(closest) = self.stations.nearest(station, &placed) else {
                continue;
            };
            if let Some(line) = lines.iter_mut().find(|line| line.contains(closest)) {
                line.push(station);
            }
        }
    }
}
