use log::trace;
use rand::Rng;
use std::f32::consts::PI;

/// Draws a standard normal variate with the Box–Muller transform.
///
/// Both uniform draws are redrawn until they are strictly positive so the
/// logarithm never sees a zero.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let u = positive_unit(rng);
    let v = positive_unit(rng);

    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

/// Uniform on `(0, 1)`.
fn positive_unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    loop {
        let u: f32 = rng.gen();
        if u > 0.0 {
            return u;
        }
        trace!("Drew exactly zero for Box-Muller input, redrawing");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Smallest positive `f32` the standard distribution can yield.
    const STEP: f32 = 1.0 / 16_777_216.0;

    #[test]
    fn test_normal_is_finite() {
        let mut rng = StdRng::seed_from_u64(7);
        (0..10_000).for_each(|_| assert!(standard_normal(&mut rng).is_finite()));
    }

    #[test]
    fn test_normal_moments() {
        let mut rng = StdRng::seed_from_u64(1234);
        let n = 100_000;
        let samples: Vec<f64> = (0..n).map(|_| standard_normal(&mut rng) as f64).collect();

        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.02, "mean too far from zero: {}", mean);
        assert!((variance - 1.0).abs() < 0.03, "variance too far from one: {}", variance);
    }

    #[test]
    fn test_normal_symmetric() {
        let mut rng = StdRng::seed_from_u64(99);
        let n = 100_000;
        let positive = (0..n).filter(|_| standard_normal(&mut rng) > 0.0).count();
        let fraction = positive as f64 / n as f64;

        assert!((fraction - 0.5).abs() < 0.01, "fraction positive: {}", fraction);
    }

    #[test]
    fn test_positive_unit_in_open_interval() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let u = positive_unit(&mut rng);
            assert!(u > 0.0 && u < 1.0);
        }
    }

    #[test]
    fn test_zero_draw_is_redrawn() {
        // Low 32 bits of 0, 256, 512, ... map to 0, 2^-24, 2*2^-24, ...
        let mut rng = StepRng::new(0, 256);

        let u = positive_unit(&mut rng);
        assert!(u > 0.0);
        assert_eq!(STEP, u);
        assert_eq!(2 * 256, rng.next_u64(), "expected the zero draw and its redraw to be consumed");
    }

    #[test]
    fn test_normal_from_zero_draws_is_finite() {
        let mut rng = StepRng::new(0, 256);

        let n = standard_normal(&mut rng);
        assert!(n.is_finite());
        assert!(n > 0.0, "u = 2^-24 and v = 2^-23 give a large positive normal, got {}", n);
        assert_eq!(3 * 256, rng.next_u64(), "expected three uniform draws to be consumed");
    }
}
