//! Fixed relative-offset stamp patterns.

use std::str::FromStr;

use super::error::EngineError;

/// Stampable live-cell patterns. Each shape is a fixed table of `(dx, dy)`
/// offsets set alive around the stamp point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    GliderSouthEast,
    GliderSouthWest,
    GliderNorthEast,
    GliderNorthWest,
    Block,
    RPentomino,
    Acorn,
    Diehard,
    Dot,
}

impl Shape {
    pub const ALL: [Shape; 9] = [
        Shape::GliderSouthEast,
        Shape::GliderSouthWest,
        Shape::GliderNorthEast,
        Shape::GliderNorthWest,
        Shape::Block,
        Shape::RPentomino,
        Shape::Acorn,
        Shape::Diehard,
        Shape::Dot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Shape::GliderSouthEast => "glider-se",
            Shape::GliderSouthWest => "glider-sw",
            Shape::GliderNorthEast => "glider-ne",
            Shape::GliderNorthWest => "glider-nw",
            Shape::Block => "block",
            Shape::RPentomino => "r-pentomino",
            Shape::Acorn => "acorn",
            Shape::Diehard => "diehard",
            Shape::Dot => "dot",
        }
    }

    /// Relative offsets set alive, centered on the stamp point. Positive
    /// dy points toward higher y (the major axis).
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            Shape::GliderSouthEast => &[(0, -1), (1, 0), (-1, 1), (0, 1), (1, 1)],
            Shape::GliderSouthWest => &[(0, -1), (-1, 0), (1, 1), (0, 1), (-1, 1)],
            Shape::GliderNorthEast => &[(0, 1), (1, 0), (-1, -1), (0, -1), (1, -1)],
            Shape::GliderNorthWest => &[(0, 1), (-1, 0), (1, -1), (0, -1), (-1, -1)],
            Shape::Block => &[
                (-1, -1),
                (0, -1),
                (1, -1),
                (-1, 0),
                (0, 0),
                (1, 0),
                (-1, 1),
                (0, 1),
                (1, 1),
            ],
            Shape::RPentomino => &[(0, -1), (1, -1), (-1, 0), (0, 0), (0, 1)],
            Shape::Acorn => &[(-2, -1), (0, 0), (-3, 1), (-2, 1), (1, 1), (2, 1), (3, 1)],
            Shape::Diehard => &[(3, -1), (-3, 0), (-2, 0), (-2, 1), (2, 1), (3, 1), (4, 1)],
            Shape::Dot => &[(0, 0)],
        }
    }
}

impl FromStr for Shape {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Shape::ALL
            .iter()
            .copied()
            .find(|shape| shape.name() == lowered)
            .ok_or_else(|| EngineError::UnknownShape {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Shape;

    #[test]
    fn offset_tables_have_expected_sizes() {
        assert_eq!(Shape::GliderSouthEast.offsets().len(), 5);
        assert_eq!(Shape::GliderSouthWest.offsets().len(), 5);
        assert_eq!(Shape::GliderNorthEast.offsets().len(), 5);
        assert_eq!(Shape::GliderNorthWest.offsets().len(), 5);
        assert_eq!(Shape::Block.offsets().len(), 9);
        assert_eq!(Shape::RPentomino.offsets().len(), 5);
        assert_eq!(Shape::Acorn.offsets().len(), 7);
        assert_eq!(Shape::Diehard.offsets().len(), 7);
        assert_eq!(Shape::Dot.offsets().len(), 1);
    }

    #[test]
    fn offsets_are_distinct_within_each_shape() {
        for shape in Shape::ALL {
            let unique: HashSet<_> = shape.offsets().iter().collect();
            assert_eq!(unique.len(), shape.offsets().len(), "{}", shape.name());
        }
    }

    #[test]
    fn names_parse_back() {
        for shape in Shape::ALL {
            let parsed: Shape = shape.name().parse().unwrap();
            assert_eq!(parsed, shape);
        }
    }
}
