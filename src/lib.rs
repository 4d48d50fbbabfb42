//! Provides sampling functionality for star fields and other point clouds, for instance:
//! * Uniformly sampling a direction on the [`UnitSphere`](struct.UnitSphere.html) or a point inside a
//!   [`SolidSphere`](struct.SolidSphere.html) with the [`Uniform`](trait.Uniform.html) trait,
//! * sequences of sampled points, e.g. [`Starfield`](sequence/struct.Starfield.html) or
//!   [`PoissonBall`](sequence/struct.PoissonBall.html) for points with a minimum separation,
//! * collecting points into a flat [`PointCloud`](struct.PointCloud.html) vertex buffer, driven by a
//!   [`StarfieldConfig`](struct.StarfieldConfig.html).

#[cfg(test)]
#[macro_use]
extern crate approx;

mod ball;
mod cloud;
mod config;
mod error;
pub mod geom;
mod normal;
mod uniform;
mod unit;
pub mod sequence;

pub use self::ball::{sample, SolidSphere};
pub use self::cloud::PointCloud;
pub use self::config::StarfieldConfig;
pub use self::error::{Result, SamplingError};
pub use self::geom::{Point3, Vec3};
pub use self::normal::standard_normal;
pub use self::uniform::Uniform;
pub use self::unit::UnitSphere;
pub use self::sequence::{PoissonBall, Starfield};
