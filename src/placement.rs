//! Choosing the direction of the next bond around an atom.
//!
//! The policy depends only on how many bonds a group holds and which way they point:
//!
//! - no bonds: no recommendation; the caller picks freely
//! - one bond: a fixed turn of 120° clockwise
//! - two bonds 120° apart: the direction which completes the trigonal arrangement
//! - otherwise: the first free slot, clockwise from north
//! - twelve or more bonds: saturated

use crate::{
    geometry::{Direction, SLOTS},
    Error,
};
use bitvec::array::BitArray;
use itertools::Itertools;
use lazy_static::lazy_static;
use std::{collections::HashMap, fmt};

/// A type implementing `Directed` can be attached to an atom as a bond.
///
/// Bonds are owned by the surrounding diagram; atoms only read their direction.
pub trait Directed {
    fn direction(&self) -> Direction;
}

impl Directed for Direction {
    fn direction(&self) -> Direction {
        *self
    }
}

impl<T: Directed + ?Sized> Directed for &T {
    fn direction(&self) -> Direction {
        (**self).direction()
    }
}

impl<T: Directed + ?Sized> Directed for std::rc::Rc<T> {
    fn direction(&self) -> Direction {
        (**self).direction()
    }
}

impl<T: Directed + ?Sized> Directed for std::sync::Arc<T> {
    fn direction(&self) -> Direction {
        (**self).direction()
    }
}

/// The recommended direction for the next bond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Next {
    /// No bonds yet: any direction will do.
    #[default]
    Unset,
    Direction(Direction),
    /// Every compass slot is taken.
    Max,
}

impl Next {
    /// The recommended direction, if there is one.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Next::Direction(direction) => Some(direction),
            _ => None,
        }
    }

    #[inline]
    pub fn is_unset(self) -> bool {
        self == Next::Unset
    }

    #[inline]
    pub fn is_saturated(self) -> bool {
        self == Next::Max
    }
}

impl From<Direction> for Next {
    fn from(direction: Direction) -> Self {
        Next::Direction(direction)
    }
}

/// Renders as the direction token, `""` when unset, or `"max"` when saturated.
impl fmt::Display for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Next::Unset => Ok(()),
            Next::Direction(direction) => write!(f, "{}", direction),
            Next::Max => f.write_str("max"),
        }
    }
}

/// Pairs of directions 120° apart, and the direction which trisects the rest of the compass.
pub const CANONICAL_PAIRS: [(Direction, Direction, Direction); SLOTS] = {
    use crate::geometry::Direction::*;
    [
        (North, SouthEast1, SouthWest2),
        (NorthEast1, SouthEast2, West),
        (NorthEast2, South, NorthWest1),
        (East, SouthWest1, NorthWest2),
        (SouthEast1, SouthWest2, North),
        (SouthEast2, West, NorthEast1),
        (South, NorthWest1, NorthEast2),
        (SouthWest1, NorthWest2, East),
        (SouthWest2, North, SouthEast1),
        (West, NorthEast1, SouthEast2),
        (NorthWest1, NorthEast2, South),
        (NorthWest2, East, SouthWest1),
    ]
};

lazy_static! {
    static ref PAIR_COMPLETIONS: HashMap<(Direction, Direction), Direction> = CANONICAL_PAIRS
        .iter()
        .flat_map(|&(a, b, third)| vec![((a, b), third), ((b, a), third)])
        .collect();
}

/// Direction for the second bond, given the first.
pub fn after_single(direction: Direction) -> Direction {
    use crate::geometry::Direction::*;

    match direction {
        North => SouthEast1,
        NorthEast1 => SouthEast2,
        NorthEast2 => South,
        East => SouthWest1,
        SouthEast1 => SouthWest2,
        SouthEast2 => West,
        South => NorthWest1,
        SouthWest1 => NorthWest2,
        SouthWest2 => North,
        West => NorthEast1,
        NorthWest1 => NorthEast2,
        NorthWest2 => East,
    }
}

/// Direction for the third bond, when the first two form a canonical pair.
///
/// Order of the pair does not matter.
pub fn complete_pair(first: Direction, second: Direction) -> Option<Direction> {
    PAIR_COMPLETIONS.get(&(first, second)).copied()
}

/// The first direction in canonical order which no bond in `directions` occupies.
pub fn first_free<I>(directions: I) -> Result<Direction, Error>
where
    I: IntoIterator<Item = Direction>,
{
    let mut occupied: BitArray<[u16; 1]> = BitArray::ZERO;
    for direction in directions {
        occupied.set(direction.index(), true);
    }
    occupied[..SLOTS]
        .first_zero()
        .map(|index| Direction::North.rotate(index as i32))
        .ok_or(Error::ExhaustedDirections)
}

/// Recommend the direction of the next bond for a group of `bonds`.
pub fn recommend<B: Directed>(bonds: &[B]) -> Result<Next, Error> {
    let next: Next = match bonds {
        [] => {
            log::trace!("no bonds; leaving recommendation unset");
            Next::Unset
        }
        [only] => {
            log::trace!("single bond; turning from {}", only.direction());
            after_single(only.direction()).into()
        }
        [first, second] => match complete_pair(first.direction(), second.direction()) {
            Some(third) => {
                log::trace!("canonical pair; completing with {}", third);
                third.into()
            }
            None => {
                log::warn!(
                    "bonds {} and {} are not 120° apart; falling back to first free slot",
                    first.direction(),
                    second.direction()
                );
                first_free(bonds.iter().map(Directed::direction))?.into()
            }
        },
        _ if bonds.len() >= SLOTS => {
            log::warn!("{} bonds occupy every compass slot", bonds.len());
            Next::Max
        }
        _ => {
            log::trace!(
                "scanning for a free slot among [{}]",
                bonds.iter().map(Directed::direction).join(", ")
            );
            first_free(bonds.iter().map(Directed::direction))?.into()
        }
    };
    Ok(next)
}
