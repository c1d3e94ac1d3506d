//! # Station Network
//!
//! The fixed set of stations a layout connects. Each station carries an
//! explicit [`ShapeCategory`]; nothing is ever derived from identifiers.

pub mod station;

use std::collections::{BTreeMap, HashMap};

use crate::error::{GeneticError, Result};

pub use station::{Point, ShapeCategory, Station, StationId};

/// The full station set, indexed by id and partitioned by category.
///
/// Stations keep their input order, which is the iteration order used by the
/// seeder and by nearest-station tie breaking.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct StationSet {
    stations: Vec<Station>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<StationId, usize>,
    #[cfg_attr(feature = "serde", serde(skip))]
    by_category: BTreeMap<ShapeCategory, Vec<StationId>>,
}

impl StationSet {
    /// Builds a station set, rejecting duplicate ids.
    pub fn new(stations: Vec<Station>) -> Result<Self> {
        let mut index = HashMap::with_capacity(stations.len());
        let mut by_category: BTreeMap<ShapeCategory, Vec<StationId>> = BTreeMap::new();

        for (position, station) in stations.iter().enumerate() {
            if index.insert(station.id, position).is_some() {
                return Err(GeneticError::Configuration(format!(
                    "Duplicate station id {}",
                    station.id
                )));
            }
            by_category
                .entry(station.category)
                .or_default()
                .push(station.id);
        }

        Ok(Self {
            stations,
            index,
            by_category,
        })
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.index.get(&id).map(|&position| &self.stations[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = StationId> + '_ {
        self.stations.iter().map(|station| station.id)
    }

    pub fn category_of(&self, id: StationId) -> Option<ShapeCategory> {
        self.get(id).map(|station| station.category)
    }

    /// Categories present in the set, in category order.
    pub fn categories(&self) -> impl Iterator<Item = ShapeCategory> + '_ {
        self.by_category.keys().copied()
    }

    /// Stations of one category, in input order.
    pub fn of_category(&self, category: ShapeCategory) -> &[StationId] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the position within `candidates` of the station nearest to `from`.
    ///
    /// Ties resolve to the earliest candidate. Unknown ids are skipped.
    pub fn nearest_position(&self, from: StationId, candidates: &[StationId]) -> Option<usize> {
        let origin = self.get(from)?.position;
        candidates
            .iter()
            .enumerate()
            .filter_map(|(position, id)| {
                self.get(*id)
                    .map(|station| (position, origin.distance(&station.position)))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(position, _)| position)
    }

    /// Returns the station among `candidates` nearest to `from`.
    pub fn nearest(&self, from: StationId, candidates: &[StationId]) -> Option<StationId> {
        self.nearest_position(from, candidates)
            .map(|position| candidates[position])
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StationSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            stations: Vec<Station>,
        }

        let raw = Raw::deserialize(deserializer)?;
        StationSet::new(raw.stations).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of_four() -> StationSet {
        StationSet::new(vec![
            Station::new(1, ShapeCategory::Rect, 0.0, 0.0),
            Station::new(2, ShapeCategory::Circle, 1.0, 0.0),
            Station::new(3, ShapeCategory::Triangle, 2.0, 0.0),
            Station::new(4, ShapeCategory::Rect, 3.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = StationSet::new(vec![
            Station::new(1, ShapeCategory::Rect, 0.0, 0.0),
            Station::new(1, ShapeCategory::Circle, 1.0, 0.0),
        ]);
        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Duplicate station id")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_partition_by_category() {
        let set = line_of_four();
        assert_eq!(set.len(), 4);
        assert_eq!(
            set.categories().collect::<Vec<_>>(),
            vec![
                ShapeCategory::Rect,
                ShapeCategory::Circle,
                ShapeCategory::Triangle
            ]
        );
        assert_eq!(
            set.of_category(ShapeCategory::Rect),
            &[StationId(1), StationId(4)]
        );
        assert!(set.of_category(ShapeCategory::Cross).is_empty());
    }

    #[test]
    fn test_nearest() {
        let set = line_of_four();
        let candidates = [StationId(3), StationId(2), StationId(4)];
        assert_eq!(set.nearest(StationId(1), &candidates), Some(StationId(2)));
        assert_eq!(set.nearest_position(StationId(1), &candidates), Some(1));
        assert_eq!(set.nearest(StationId(1), &[]), None);
    }

    #[test]
    fn test_nearest_tie_prefers_first_candidate() {
        let set = line_of_four();
        // Stations 1 and 3 are both one unit away from station 2
        let candidates = [StationId(3), StationId(1)];
        assert_eq!(set.nearest(StationId(2), &candidates), Some(StationId(3)));
    }
}
