use std::fmt;

/// Unique identifier of a station.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// The closed set of station categories.
///
/// Passengers travel towards a category rather than a specific station, so a
/// line that touches every category can serve any passenger boarding on it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeCategory {
    Rect,
    Circle,
    Triangle,
    Cross,
}

impl ShapeCategory {
    pub const ALL: [ShapeCategory; 4] = [
        ShapeCategory::Rect,
        ShapeCategory::Circle,
        ShapeCategory::Triangle,
        ShapeCategory::Cross,
    ];
}

/// A position on the map.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A station on the map. Immutable for the duration of a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub category: ShapeCategory,
    pub position: Point,
}

impl Station {
    pub fn new(id: u32, category: ShapeCategory, x: f64, y: f64) -> Self {
        Self {
            id: StationId(id),
            category,
            position: Point::new(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < f64::EPSILON);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_category_order_is_declaration_order() {
        let mut shuffled = vec![
            ShapeCategory::Cross,
            ShapeCategory::Rect,
            ShapeCategory::Triangle,
            ShapeCategory::Circle,
        ];
        shuffled.sort();
        assert_eq!(shuffled, ShapeCategory::ALL.to_vec());
    }
}
