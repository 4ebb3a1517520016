//! Bond-direction placement for 2-D structure diagrams.
//!
//! Bonds around an atom are drawn along a 12-point compass, 30° per step. Each [`AtomNode`]
//! keeps the bonds attached to it and recommends which way the next one should point so that
//! bonds fan out in the conventional arrangement instead of overlapping.

pub mod atom;
pub mod config;
mod error;
pub mod geometry;
pub mod label;
pub mod placement;

pub use atom::{AtomNode, AttachedBonds};
pub use error::Error;
pub use geometry::{CompassPoint, Direction, Geometry, Vector2};
pub use label::Label;
pub use placement::{Directed, Next};
