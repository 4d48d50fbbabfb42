use crate::ball::SolidSphere;
use crate::cloud::PointCloud;
use crate::error::{check_positive, Result, SamplingError};
use crate::sequence::{PoissonBall, Starfield};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Describes a star field to generate: how many points and inside which sphere.
///
/// ```
/// use starfield_sampling::StarfieldConfig;
///
/// let cloud = StarfieldConfig::default()
///     .with_count(1_000)
///     .with_radius(10.0)
///     .with_seed(42)
///     .generate()
///     .unwrap();
///
/// assert_eq!(3_000, cloud.as_slice().len());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    pub radius: f32,
    /// Seeds the random source for reproducible fields, uses entropy if `None`.
    pub seed: Option<u64>,
    /// If set, no two stars are closer than this.
    pub min_separation: Option<f32>,
    /// Consecutive rejected candidates before a separated field counts as full.
    pub max_attempts: usize,
}

impl StarfieldConfig {
    /// 50,000 stars, as in the reference scene.
    pub const DEFAULT_COUNT: usize = 50_000;
    /// Cube root of 10^11, the extent of the reference scene's star field.
    pub const DEFAULT_RADIUS: f32 = 4641.589;
    pub const DEFAULT_MAX_ATTEMPTS: usize = 30;

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_min_separation(mut self, min_separation: f32) -> Self {
        self.min_separation = Some(min_separation);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Checks all parameters without sampling anything.
    pub fn validate(&self) -> Result<SolidSphere> {
        let sphere = SolidSphere::new(self.radius)?;
        if let Some(min_separation) = self.min_separation {
            check_positive("min_separation", min_separation)?;
        }
        if self.max_attempts == 0 {
            return Err(SamplingError::invalid("max_attempts", 0.0, "must be at least one"));
        }
        Ok(sphere)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Samples the configured star field into a flat vertex buffer.
    ///
    /// Without a minimum separation the buffer holds exactly `count` points.
    /// With one, it may hold fewer if the sphere fills up first.
    pub fn generate(&self) -> Result<PointCloud> {
        let sphere = self.validate()?;
        let rng = self.rng();

        let cloud: PointCloud = match self.min_separation {
            None => Starfield::new(sphere, self.count, rng).collect(),
            Some(min_separation) => {
                PoissonBall::new(sphere, min_separation, self.max_attempts, rng)?
                    .take(self.count)
                    .collect()
            }
        };

        if cloud.len() < self.count {
            warn!(
                "Star field saturated at {} of {} requested stars, min separation {:?} too large for radius {}",
                cloud.len(),
                self.count,
                self.min_separation,
                self.radius
            );
        }
        info!("Generated {} stars within radius {}", cloud.len(), self.radius);

        Ok(cloud)
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        StarfieldConfig {
            count: Self::DEFAULT_COUNT,
            radius: Self::DEFAULT_RADIUS,
            seed: None,
            min_separation: None,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}
