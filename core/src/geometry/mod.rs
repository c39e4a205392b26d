//! Points, problems, and the geometric atoms of the AR domains
//!
//! A [`Point`] is only an index; coordinates and names live in the owning
//! [`Problem`], which is passed explicitly wherever numerics are needed.
//! Point order is insertion order and serves as the canonical total order
//! used by every normalization in the crate.

mod angle;
mod dist;
mod problem;
mod sin_or_dist;
mod slope_angle;
mod triangle;

pub use angle::Angle;
pub use dist::{Dist, SquaredDist};
pub use problem::{NamedPoint, Point, Problem};
pub use sin_or_dist::SinOrDist;
pub use slope_angle::SlopeAngle;
pub use triangle::Triangle;
