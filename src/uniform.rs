use rand::Rng;

/// Samples any point of the implementer.
/// All possible points have approximately equal probability.
pub trait Uniform {
    type Sample;

    /// Draws one sample, consuming entropy from the given random source.
    fn uniform_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Sample;

    /// Draws one sample from the thread-local random source.
    fn uniform(&self) -> Self::Sample {
        self.uniform_with(&mut rand::thread_rng())
    }
}
