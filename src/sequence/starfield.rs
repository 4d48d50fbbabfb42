use crate::ball::SolidSphere;
use crate::geom::Point3;
use crate::uniform::Uniform;

use rand::Rng;

/// A fixed amount of points sampled uniformly inside a solid sphere.
///
/// The sequence owns its random source, so seeding the source makes the
/// yielded points reproducible.
pub struct Starfield<R> {
    sphere: SolidSphere,
    remaining: usize,
    rng: R,
}

impl<R: Rng> Starfield<R> {
    pub fn new(sphere: SolidSphere, count: usize, rng: R) -> Self {
        Starfield {
            sphere,
            remaining: count,
            rng,
        }
    }

    pub fn sphere(&self) -> SolidSphere {
        self.sphere
    }
}

impl<R: Rng> Iterator for Starfield<R> {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.sphere.uniform_with(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Starfield<R> {}
