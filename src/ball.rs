use super::error::{check_non_negative, Result};
use super::uniform::Uniform;
use super::unit::UnitSphere;
use crate::geom::prelude::*;
use crate::geom::Point3;
use rand::Rng;

/// A solid sphere centered at the origin, i.e. the filled ball and not only its surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidSphere {
    radius: f32,
}

impl SolidSphere {
    /// Creates a solid sphere with the given radius.
    ///
    /// A radius of zero is accepted and degenerates to the origin. Negative,
    /// infinite or NaN radii are rejected with `SamplingError::InvalidArgument`.
    pub fn new(radius: f32) -> Result<Self> {
        let radius = check_non_negative("radius", radius)?;
        Ok(SolidSphere { radius })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn contains(&self, point: Point3) -> bool {
        point.to_vec().magnitude2() <= self.radius * self.radius
    }
}

impl Uniform for SolidSphere {
    type Sample = Point3;

    /// Samples a point with uniform density over the volume of the sphere.
    ///
    /// The fraction of points within relative distance `c` of the center has
    /// to grow with `c³`, so the radial scale is the cube root of a uniform
    /// variate.
    fn uniform_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Point3 {
        let direction = UnitSphere.uniform_with(rng);
        let scale = rng.gen::<f32>().cbrt();

        Point3::from_vec(direction * (self.radius * scale))
    }
}

/// Samples one point uniformly inside the solid sphere of the given radius.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Result<Point3> {
    Ok(SolidSphere::new(radius)?.uniform_with(rng))
}

impl Default for SolidSphere {
    fn default() -> Self {
        SolidSphere { radius: 1.0 }
    }
}
