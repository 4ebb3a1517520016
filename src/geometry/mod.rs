//! Bond-compass geometry.
//!
//! Pure lookup data: the twelve [`Direction`]s a bond may take, their opposites and canonical
//! order, the eight [`CompassPoint`]s with fixed drawing vectors, and a [`Geometry`] which binds
//! those vectors to a configured bond length.

pub mod compass_point;
pub mod direction;
pub mod vector2;

pub use compass_point::CompassPoint;
pub use direction::{canonical_order, opposite, Direction, CANONICAL_ORDER, SLOTS};
pub use vector2::{Axis, Vector2};

use crate::Error;
use vector2::round_to;

/// Default bond length, in diagram units.
pub const BOND_LENGTH: f64 = 20.0;

/// Default ratio of bond stroke width to bond length.
///
/// 0.04 matches the ACS drawing settings.
pub const WIDTH_TO_LENGTH: f64 = 0.04;

/// Bond dimensions used to turn compass points into displacements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    bond_length: f64,
    width_to_length: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            bond_length: BOND_LENGTH,
            width_to_length: WIDTH_TO_LENGTH,
        }
    }
}

impl Geometry {
    /// Create a geometry, rejecting lengths and ratios which are not finite and positive.
    pub fn new(bond_length: f64, width_to_length: f64) -> Result<Geometry, Error> {
        if !(bond_length.is_finite() && bond_length > 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "bond length must be finite and positive; got {}",
                bond_length
            )));
        }
        if !(width_to_length.is_finite() && width_to_length > 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "width to length ratio must be finite and positive; got {}",
                width_to_length
            )));
        }
        Ok(Geometry {
            bond_length,
            width_to_length,
        })
    }

    #[inline]
    pub fn bond_length(&self) -> f64 {
        self.bond_length
    }

    #[inline]
    pub fn width_to_length(&self) -> f64 {
        self.width_to_length
    }

    /// Stroke width of a bond, rounded to two decimals.
    pub fn bond_width(&self) -> f64 {
        round_to(self.bond_length * self.width_to_length, 2)
    }

    /// Displacement of a bond drawn toward `point`.
    pub fn vector_for(&self, point: CompassPoint) -> Vector2 {
        point.vector(self.bond_length)
    }

    /// Displacement of a bond drawn toward the compass point named by `token`.
    pub fn vector_for_token(&self, token: &str) -> Result<Vector2, Error> {
        CompassPoint::from_token(token).map(|point| self.vector_for(point))
    }

    /// Displacement of a bond drawn toward `direction`.
    ///
    /// Directions which share a bearing with a compass point use its vector unchanged, so `E`
    /// is the same `(17.32, 0)` as [`CompassPoint::East`]. The four directions in between take
    /// the midpoint of their two neighbouring compass points, stretched back out to a full
    /// bond length.
    pub fn direction_vector(&self, direction: Direction) -> Vector2 {
        use std::convert::TryFrom;

        if let Ok(point) = CompassPoint::try_from(direction) {
            return self.vector_for(point);
        }
        let (before, after) = match direction {
            Direction::NorthEast1 => (CompassPoint::North, CompassPoint::NorthEast),
            Direction::SouthEast2 => (CompassPoint::SouthEast, CompassPoint::South),
            Direction::SouthWest1 => (CompassPoint::South, CompassPoint::SouthWest),
            _ => (CompassPoint::NorthWest, CompassPoint::North),
        };
        let midpoint = before.components(self.bond_length) + after.components(self.bond_length);
        let scale = self.bond_length / midpoint.length();
        Vector2::new(midpoint.x * scale, midpoint.y * scale).round_to(2)
    }
}

/// Displacement of a bond of length `bond_length` drawn toward `point`.
///
/// Fails with [`Error::InvalidConfiguration`] unless `bond_length` is finite and positive.
pub fn vector_for(point: CompassPoint, bond_length: f64) -> Result<Vector2, Error> {
    Geometry::new(bond_length, WIDTH_TO_LENGTH).map(|geometry| geometry.vector_for(point))
}
