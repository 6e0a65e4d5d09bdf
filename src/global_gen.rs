//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::{cell::RefCell, time::SystemTime};

use crate::{Generator, Uuid};
use inner::{DefaultGenInner, DefaultGenRng};

thread_local! {
    static DEFAULT_GENERATOR: RefCell<DefaultGenInner> = RefCell::new(DefaultGenInner::default());
}

/// Runs `f` with the thread-local default generator, creating one if none exists.
fn with_default_gen<T>(f: impl FnOnce(&mut Generator<DefaultGenRng>) -> T) -> T {
    DEFAULT_GENERATOR.with(|g| f(g.borrow_mut().get_mut()))
}

/// Generates a UUIDv4 object.
///
/// This function employs a thread-local generator seeded from the operating system. On Unix, the
/// generator is reseeded when the process ID changes (i.e., upon process forks) to prevent
/// collisions across processes.
///
/// # Panics
///
/// Panics if the operating system random source is unavailable.
///
/// # Examples
///
/// ```rust
/// let uuid = hashuuid::new_v4();
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// assert_eq!(uuid.version(), Some(4));
/// ```
pub fn new_v4() -> Uuid {
    with_default_gen(|g| g.generate_v4())
}

/// Generates a time-ordered UUID object embedding `t` at millisecond resolution.
///
/// See [`Generator`] for the layout and its trade-offs.
///
/// # Panics
///
/// Panics if the operating system random source is unavailable, or if `t` precedes the Unix epoch
/// or lies beyond [`MAX_UNIX_TS_MS`](crate::MAX_UNIX_TS_MS).
///
/// # Examples
///
/// ```rust
/// use std::time::SystemTime;
///
/// let now = SystemTime::now();
/// let uuid = hashuuid::new_time(now);
/// assert_eq!(
///     hashuuid::unix_ts_ms(uuid.time_uuid_to_time()),
///     hashuuid::unix_ts_ms(now)
/// );
/// ```
pub fn new_time(t: SystemTime) -> Uuid {
    with_default_gen(|g| g.generate_time(t))
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{with_rand08, Generator};

    /// Number of bytes generated before the default generator reseeds itself from the OS.
    const RESEED_THRESHOLD: u64 = 1024 * 64;

    /// The random number generator type of the default generator.
    ///
    /// It employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to emulate the strategy used by
    /// `rand::rngs::ThreadRng`.
    pub type DefaultGenRng = with_rand08::Adapter<ReseedingRng<ChaCha12Core, OsRng>>;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    pub struct DefaultGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: Generator<DefaultGenRng>,
    }

    impl Default for DefaultGenInner {
        fn default() -> Self {
            let core = ChaCha12Core::from_rng(OsRng).unwrap_or_else(|err| {
                panic!("hashuuid: could not seed default generator from OS: {err}")
            });
            tracing::debug!("seeded default UUID generator from OS random source");
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: Generator::with_rand08(ReseedingRng::new(
                    core,
                    RESEED_THRESHOLD,
                    OsRng,
                )),
            }
        }
    }

    impl DefaultGenInner {
        /// Returns a mutable reference to the inner [`Generator`] instance, reseeding the
        /// generator on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut Generator<DefaultGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!(
                    previous_pid = self.pid,
                    "process ID changed; reseeding default UUID generator"
                );
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}

#[cfg(test)]
mod tests_v4 {
    use super::new_v4;

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| new_v4().into()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
                assert!(crate::is_valid(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {i}: {p}");
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid::Uuid::from_bytes(*new_v4().as_bytes());
            assert_eq!(e.get_variant(), uuid::Variant::RFC4122);
            assert_eq!(e.get_version_num(), 4);
        }
    }
}

#[cfg(test)]
mod tests_time {
    use super::new_time;
    use crate::{from_unix_ts_ms, unix_ts_ms};
    use std::time::SystemTime;

    /// Embeds given timestamps
    #[test]
    fn embeds_given_timestamps() {
        for ts in [
            0,
            100,
            1_569_479_272,
            9_999_999_999,
            99_999_999_999_999,
            281_474_976_710_655,
        ] {
            let e = new_time(from_unix_ts_ms(ts));
            assert_eq!(unix_ts_ms(e.time_uuid_to_time()), ts);

            let other = uuid::Uuid::from_bytes(*e.as_bytes());
            assert_eq!(other.get_variant(), uuid::Variant::RFC4122);
            assert_eq!(other.get_version_num(), 4);
        }
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        for _ in 0..10_000 {
            let now = SystemTime::now();
            let e = new_time(now);
            assert_eq!(e.time_uuid_unix_ts_ms(), unix_ts_ms(now));
        }
    }

    /// Generates distinct identifiers within same millisecond
    #[test]
    fn generates_distinct_identifiers_within_same_millisecond() {
        use std::collections::HashSet;
        let t = from_unix_ts_ms(1_569_479_272_000);
        let s: HashSet<_> = (0..10_000).map(|_| new_time(t)).collect();
        assert_eq!(s.len(), 10_000);
    }

    /// Panics on timestamp beyond 48 bits
    #[test]
    #[should_panic(expected = "must be a 48-bit integer")]
    fn panics_on_timestamp_beyond_48_bits() {
        new_time(from_unix_ts_ms(1 << 48));
    }

    /// Keeps working after a panic on the same thread
    #[test]
    fn keeps_working_after_a_panic_on_the_same_thread() {
        let result = std::panic::catch_unwind(|| new_time(from_unix_ts_ms(u64::MAX >> 8)));
        assert!(result.is_err());
        assert_eq!(new_time(from_unix_ts_ms(100)).time_uuid_unix_ts_ms(), 100);
    }
}
