use crate::ball::SolidSphere;
use crate::error::{check_positive, Result, SamplingError};
use crate::geom::Point3;
use crate::uniform::Uniform;

use kdtree::distance::squared_euclidean;
use kdtree::KdTree;

use log::{debug, warn};
use rand::Rng;

/// Represents a poisson disk set inside a solid sphere, obtained by dart throwing.
///
/// Candidates are sampled uniformly inside the sphere and only accepted if no
/// previously yielded point lies within `min_distance`. The sequence ends after
/// `max_attempts` consecutive candidates have been rejected.
pub struct PoissonBall<R> {
    sphere: SolidSphere,
    min_distance: f32,
    max_attempts: usize,
    rng: R,
    /// Remembers samples already generated as f64 arrays
    previous_samples: KdTree<f64, Point3, [f64; 3]>,
    saturated: bool,
}

impl<R: Rng> PoissonBall<R> {
    pub fn new(sphere: SolidSphere, min_distance: f32, max_attempts: usize, rng: R) -> Result<Self> {
        let min_distance = check_positive("min_distance", min_distance)?;
        if max_attempts == 0 {
            return Err(SamplingError::invalid("max_attempts", 0.0, "must be at least one"));
        }

        Ok(PoissonBall {
            sphere,
            min_distance,
            max_attempts,
            rng,
            previous_samples: KdTree::new(3),
            saturated: false,
        })
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Amount of points yielded so far.
    pub fn accepted(&self) -> usize {
        self.previous_samples.size()
    }

    /// True once `max_attempts` candidates in a row were rejected, i.e. the
    /// set has become approximately maximal and the sequence has ended.
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    fn point_to_arr(point: Point3) -> [f64; 3] {
        [point.x as f64, point.y as f64, point.z as f64]
    }

    fn meets_minimum_distance_requirement(&self, candidate: Point3) -> bool {
        let position = Self::point_to_arr(candidate);
        let dist_sqr = (self.min_distance as f64) * (self.min_distance as f64);

        match self
            .previous_samples
            .within(&position, dist_sqr, &squared_euclidean)
        {
            Ok(within_points) => within_points.is_empty(),
            Err(err) => {
                warn!("Rejecting candidate {:?} that cannot be queried: {}", candidate, err);
                false
            }
        }
    }

    fn add_sample(&mut self, sample: Point3) -> bool {
        match self.previous_samples.add(Self::point_to_arr(sample), sample) {
            Ok(()) => true,
            Err(err) => {
                warn!("Failed to remember sample {:?}, dropping it: {}", sample, err);
                false
            }
        }
    }
}

impl<R: Rng> Iterator for PoissonBall<R> {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.saturated {
            return None;
        }

        for _ in 0..self.max_attempts {
            let candidate = self.sphere.uniform_with(&mut self.rng);

            if self.meets_minimum_distance_requirement(candidate) && self.add_sample(candidate) {
                return Some(candidate);
            }
        }

        debug!(
            "Poisson ball of radius {} saturated after {} points with min distance {}",
            self.sphere.radius(),
            self.accepted(),
            self.min_distance
        );
        self.saturated = true;
        None
    }
}
