//! Vector types shared by all samplers.

pub mod prelude {
    pub use cgmath::prelude::*;
}

/// A direction or offset in 3D space.
pub type Vec3 = cgmath::Vector3<f32>;

/// A position in 3D space, e.g. a single star.
pub type Point3 = cgmath::Point3<f32>;
