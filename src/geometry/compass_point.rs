use super::{Direction, Vector2};
use crate::Error;
use std::convert::TryFrom;

/// One of the eight primary headings, each with a fixed drawing vector.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum CompassPoint {
    #[display("N")]
    North,
    #[display("NE")]
    NorthEast,
    #[display("E")]
    East,
    #[display("SE")]
    SouthEast,
    #[display("S")]
    South,
    #[display("SW")]
    SouthWest,
    #[display("W")]
    West,
    #[display("NW")]
    NorthWest,
}

impl CompassPoint {
    /// Iterate through all `CompassPoint`s, clockwise from `North`.
    pub fn iter() -> impl Iterator<Item = CompassPoint> {
        std::iter::successors(Some(CompassPoint::North), |point| {
            use CompassPoint::*;

            match point {
                North => Some(NorthEast),
                NorthEast => Some(East),
                East => Some(SouthEast),
                SouthEast => Some(South),
                South => Some(SouthWest),
                SouthWest => Some(West),
                West => Some(NorthWest),
                NorthWest => None,
            }
        })
    }

    /// Parse a compass-point token such as `"SW"`.
    pub fn from_token(token: &str) -> Result<CompassPoint, Error> {
        token
            .parse()
            .map_err(|_| Error::InvalidDirection(token.to_owned()))
    }

    /// Displacement of a bond of length `bond_length` drawn this way, before rounding.
    ///
    /// The horizontal component of every non-vertical point is `bond_length * √3 / 2`, and the
    /// diagonals rise or fall by half a bond. `bond_length` must already be validated; see
    /// [`Geometry`](super::Geometry).
    pub(crate) fn components(self, bond_length: f64) -> Vector2 {
        let run = bond_length * 3_f64.sqrt() / 2.0;
        let rise = bond_length / 2.0;

        let (x, y) = match self {
            CompassPoint::North => (0.0, -bond_length),
            CompassPoint::NorthEast => (run, -rise),
            CompassPoint::East => (run, 0.0),
            CompassPoint::SouthEast => (run, rise),
            CompassPoint::South => (0.0, bond_length),
            CompassPoint::SouthWest => (-run, rise),
            CompassPoint::West => (-run, 0.0),
            CompassPoint::NorthWest => (-run, -rise),
        };
        Vector2::new(x, y)
    }

    /// Displacement of a bond drawn this way, rounded to two decimals so that repeated
    /// additions stay visually stable.
    pub(crate) fn vector(self, bond_length: f64) -> Vector2 {
        self.components(bond_length).round_to(2)
    }

    /// The 12-point direction with the same bearing, if there is one.
    ///
    /// The diagonal points sit 60° from north or south, so `NE` is `NE2` and `SE` is `SE1`.
    pub fn direction(self) -> Option<Direction> {
        match self {
            CompassPoint::North => Some(Direction::North),
            CompassPoint::NorthEast => Some(Direction::NorthEast2),
            CompassPoint::East => Some(Direction::East),
            CompassPoint::SouthEast => Some(Direction::SouthEast1),
            CompassPoint::South => Some(Direction::South),
            CompassPoint::SouthWest => Some(Direction::SouthWest2),
            CompassPoint::West => Some(Direction::West),
            CompassPoint::NorthWest => Some(Direction::NorthWest1),
        }
    }
}

/// Directions which share a bearing with a compass point convert; the four in between
/// (`NE1`, `SE2`, `SW1`, `NW2`) are rejected.
impl TryFrom<Direction> for CompassPoint {
    type Error = Error;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction {
            Direction::North => Ok(CompassPoint::North),
            Direction::NorthEast2 => Ok(CompassPoint::NorthEast),
            Direction::East => Ok(CompassPoint::East),
            Direction::SouthEast1 => Ok(CompassPoint::SouthEast),
            Direction::South => Ok(CompassPoint::South),
            Direction::SouthWest2 => Ok(CompassPoint::SouthWest),
            Direction::West => Ok(CompassPoint::West),
            Direction::NorthWest1 => Ok(CompassPoint::NorthWest),
            _ => Err(Error::InvalidDirection(direction.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_length_vectors() {
        assert_eq!(CompassPoint::East.vector(20.0), Vector2::new(17.32, 0.0));
        assert_eq!(CompassPoint::North.vector(20.0), Vector2::new(0.0, -20.0));
        assert_eq!(CompassPoint::South.vector(20.0), Vector2::new(0.0, 20.0));
        assert_eq!(CompassPoint::West.vector(20.0), Vector2::new(-17.32, 0.0));
        assert_eq!(CompassPoint::NorthEast.vector(20.0), Vector2::new(17.32, -10.0));
        assert_eq!(CompassPoint::NorthWest.vector(20.0), Vector2::new(-17.32, -10.0));
        assert_eq!(CompassPoint::SouthEast.vector(20.0), Vector2::new(17.32, 10.0));
        assert_eq!(CompassPoint::SouthWest.vector(20.0), Vector2::new(-17.32, 10.0));
    }

    #[test]
    fn test_opposite_points_cancel() {
        let pairs = [
            (CompassPoint::North, CompassPoint::South),
            (CompassPoint::East, CompassPoint::West),
            (CompassPoint::NorthEast, CompassPoint::SouthWest),
            (CompassPoint::NorthWest, CompassPoint::SouthEast),
        ];
        for &(a, b) in pairs.iter() {
            assert_eq!(a.vector(33.0) + b.vector(33.0), Vector2::default());
        }
    }

    #[test]
    fn test_from_token() {
        let tokens: Vec<_> = CompassPoint::iter().map(|p| p.to_string()).collect();
        assert_eq!(tokens, ["N", "NE", "E", "SE", "S", "SW", "W", "NW"]);
        assert_eq!(CompassPoint::from_token("SW"), Ok(CompassPoint::SouthWest));
        assert_eq!(
            CompassPoint::from_token("SW1"),
            Err(Error::InvalidDirection("SW1".into()))
        );
    }

    #[test]
    fn test_try_from_direction() {
        assert_eq!(
            CompassPoint::try_from(Direction::West),
            Ok(CompassPoint::West)
        );
        assert_eq!(
            CompassPoint::try_from(Direction::NorthEast1),
            Err(Error::InvalidDirection("NE1".into()))
        );
        for point in CompassPoint::iter() {
            if let Some(direction) = point.direction() {
                assert_eq!(CompassPoint::try_from(direction), Ok(point));
            }
        }
    }

    #[test]
    fn test_diagonals_share_bearings() {
        for point in CompassPoint::iter() {
            let direction = point.direction().unwrap();
            assert_eq!(CompassPoint::try_from(direction), Ok(point));
            let v = point.components(20.0);
            let bearing = v.x.atan2(-v.y).to_degrees().rem_euclid(360.0).round();
            assert_eq!(bearing, f64::from(direction.degrees()));
        }
        for &direction in [
            Direction::NorthEast1,
            Direction::SouthEast2,
            Direction::SouthWest1,
            Direction::NorthWest2,
        ]
        .iter()
        {
            assert!(CompassPoint::try_from(direction).is_err());
        }
    }
}
