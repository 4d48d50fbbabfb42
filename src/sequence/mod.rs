//! Sequences of sampled points, e.g. for building a star field.

mod poisson;
mod starfield;

pub use self::poisson::PoissonBall;
pub use self::starfield::Starfield;
