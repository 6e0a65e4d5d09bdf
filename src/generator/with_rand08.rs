//! Integration with `rand` (v0.8) crate.

use super::{Generator, RandSource};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// A failure reported by [`RngCore::try_fill_bytes()`] is treated as fatal and turns into a panic.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = self.0.try_fill_bytes(dest) {
            panic!("hashuuid: random number generator failed: {err}");
        }
    }
}

impl<T: RngCore> Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// The generator should be cryptographically secure, e.g. [`rand::rngs::OsRng`] or
    /// `rand::rngs::ThreadRng`.
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}
