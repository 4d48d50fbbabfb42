use super::normal::standard_normal;
use super::uniform::Uniform;
use crate::geom::prelude::*;
use crate::geom::Vec3;
use log::trace;
use rand::Rng;

/// The surface of a sphere of radius 1 centered at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnitSphere;

impl Uniform for UnitSphere {
    type Sample = Vec3;

    /// Uniformly samples a direction by normalizing a vector of three
    /// independent standard normals. The resulting distribution is isotropic,
    /// unlike normalizing a point drawn from a cube.
    fn uniform_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        loop {
            let dir = Vec3::new(
                standard_normal(rng),
                standard_normal(rng),
                standard_normal(rng),
            );

            let magnitude = dir.magnitude();
            if magnitude > 0.0 && magnitude.is_finite() {
                return dir / magnitude;
            }

            // If, by pure chance got a zero vector, try again so we can normalize it
            trace!("Degenerate direction {:?}, resampling", dir);
        }
    }
}
