//! Random and time-ordered UUID generator and related types.

use std::time::SystemTime;

use crate::{timestamp::MAX_UNIX_TS_MS, unix_ts_ms, Uuid};

pub mod with_rand08;

/// A trait that defines the random number generator interface for [`Generator`].
///
/// The source must be cryptographically strong. There is no fallback to a weaker source, so an
/// implementation that cannot deliver random bytes must panic rather than return.
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Represents a generator of random (version 4) and time-ordered UUIDs.
///
/// Generation holds no state besides the random number generator, so each UUID is independent of
/// the previous ones.
///
/// # Examples
///
/// ```rust
/// use hashuuid::Generator;
/// use rand::rngs::OsRng;
///
/// let mut g = Generator::with_rand08(OsRng);
/// println!("{}", g.generate_v4());
/// println!("{}", g.generate_time(std::time::SystemTime::now()));
/// ```
///
/// # Time-ordered UUIDs
///
/// A time-ordered UUID packs the Unix timestamp in milliseconds into its first six bytes and fills
/// the remaining ten bytes with random data, then stamps version `4` and the RFC 4122 variant over
/// bytes 6 and 8. The version field does not distinguish it from a random UUID. Because the stamped
/// fields overwrite six bits, only 74 random bits remain per millisecond, so time-ordered UUIDs are
/// less collision-resistant than random ones.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Uuid::from_bytes_v4(bytes)
    }

    /// Generates a new time-ordered UUID object embedding `t`.
    ///
    /// See the [`Generator`] type documentation for the layout.
    ///
    /// # Panics
    ///
    /// Panics if `t` precedes the Unix epoch or lies beyond [`MAX_UNIX_TS_MS`](crate::MAX_UNIX_TS_MS).
    pub fn generate_time(&mut self, t: SystemTime) -> Uuid {
        self.generate_time_core(unix_ts_ms(t))
    }

    /// Generates a new time-ordered UUID object from the `unix_ts_ms` passed.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is greater than [`MAX_UNIX_TS_MS`](crate::MAX_UNIX_TS_MS).
    pub fn generate_time_core(&mut self, unix_ts_ms: u64) -> Uuid {
        assert!(
            unix_ts_ms <= MAX_UNIX_TS_MS,
            "`unix_ts_ms` must be a 48-bit integer"
        );

        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes[6..]);
        bytes[..6].copy_from_slice(&unix_ts_ms.to_be_bytes()[2..]);
        Uuid::from_bytes_v4(bytes)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use hashuuid::Generator;
///
/// Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{i}] {e}"));
/// ```
impl<R: RandSource> Iterator for Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_v4())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> std::iter::FusedIterator for Generator<R> {}
