use crate::Error;

/// Number of slots on the bond compass.
pub const SLOTS: usize = 12;

/// One of the twelve headings a bond may take around an atom.
///
/// Headings are 30° apart, clockwise from north. The `1`/`2` suffixes subdivide each
/// diagonal quadrant: `NE1` is 30° east of north, `NE2` is 60°.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("N")]
    North,
    #[display("NE1")]
    NorthEast1,
    #[display("NE2")]
    NorthEast2,
    #[display("E")]
    East,
    #[display("SE1")]
    SouthEast1,
    #[display("SE2")]
    SouthEast2,
    #[display("S")]
    South,
    #[display("SW1")]
    SouthWest1,
    #[display("SW2")]
    SouthWest2,
    #[display("W")]
    West,
    #[display("NW1")]
    NorthWest1,
    #[display("NW2")]
    NorthWest2,
}

/// Every `Direction`, clockwise from `North`.
///
/// This is the priority order used when looking for a free slot.
pub const CANONICAL_ORDER: [Direction; SLOTS] = [
    Direction::North,
    Direction::NorthEast1,
    Direction::NorthEast2,
    Direction::East,
    Direction::SouthEast1,
    Direction::SouthEast2,
    Direction::South,
    Direction::SouthWest1,
    Direction::SouthWest2,
    Direction::West,
    Direction::NorthWest1,
    Direction::NorthWest2,
];

/// Every `Direction`, clockwise from `North`.
pub fn canonical_order() -> [Direction; SLOTS] {
    CANONICAL_ORDER
}

/// The direction pointing exactly the other way.
pub fn opposite(direction: Direction) -> Direction {
    direction.opposite()
}

impl Direction {
    /// Iterate through all `Direction`s, clockwise from `North`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        IntoIterator::into_iter(CANONICAL_ORDER)
    }

    /// Parse a direction token such as `"NE1"`.
    ///
    /// Legal inputs (case sensitive): `N`, `NE1`, `NE2`, `E`, `SE1`, `SE2`, `S`, `SW1`, `SW2`,
    /// `W`, `NW1`, `NW2`.
    pub fn from_token(token: &str) -> Result<Direction, Error> {
        token
            .parse()
            .map_err(|_| Error::InvalidDirection(token.to_owned()))
    }

    /// The direction pointing exactly the other way.
    pub fn opposite(self) -> Direction {
        use Direction::*;

        match self {
            North => South,
            NorthEast1 => SouthWest1,
            NorthEast2 => SouthWest2,
            East => West,
            SouthEast1 => NorthWest1,
            SouthEast2 => NorthWest2,
            South => North,
            SouthWest1 => NorthEast1,
            SouthWest2 => NorthEast2,
            West => East,
            NorthWest1 => SouthEast1,
            NorthWest2 => SouthEast2,
        }
    }

    /// Position of this direction in [`CANONICAL_ORDER`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Compass bearing in degrees, clockwise from north.
    #[inline]
    pub fn degrees(self) -> u16 {
        self.index() as u16 * 30
    }

    /// Turn by `steps` increments of 30°; positive is clockwise.
    pub fn rotate(self, steps: i32) -> Direction {
        let index = (self.index() as i32 + steps).rem_euclid(SLOTS as i32);
        CANONICAL_ORDER[index as usize]
    }
}
