//! Millisecond timestamps embedded in time-ordered UUIDs
//!
//! A time-ordered UUID stores the Unix timestamp in milliseconds in its first 48 bits, big-endian,
//! followed by the version field set at `0100` and the RFC 4122 variant. The version number is
//! shared with random UUIDs, so nothing in the value tells the two kinds apart.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::Uuid;

/// The time-ordered UUID with the greatest timestamp.
const MAX_TIME_UUID: Uuid = Uuid::from_bytes_unchecked([
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x10, 0x00, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

/// The greatest Unix timestamp in milliseconds that a time-ordered UUID can hold.
pub const MAX_UNIX_TS_MS: u64 = MAX_TIME_UUID.time_uuid_unix_ts_ms();

/// Returns the number of milliseconds elapsed from the Unix epoch to `t`, truncating
/// sub-millisecond precision.
///
/// Instants too far in the future to fit in `u64` saturate at `u64::MAX`.
///
/// # Panics
///
/// Panics if `t` precedes the Unix epoch.
pub fn unix_ts_ms(t: SystemTime) -> u64 {
    let elapsed = t
        .duration_since(UNIX_EPOCH)
        .expect("instant must not precede the Unix epoch");
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Returns the instant `unix_ts_ms` milliseconds after the Unix epoch. This is the inverse of
/// [`unix_ts_ms()`].
pub fn from_unix_ts_ms(unix_ts_ms: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_millis(unix_ts_ms)
}

impl Uuid {
    /// Reads the 48-bit millisecond timestamp from the first six bytes.
    ///
    /// The result is meaningful only for a UUID produced by a time-ordered generator. Applied to
    /// any other UUID, e.g. a random one, it returns the leading random bits reinterpreted as a
    /// timestamp without any indication of error. The nil UUID yields `0`.
    pub const fn time_uuid_unix_ts_ms(&self) -> u64 {
        let b = self.as_bytes();
        u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
    }

    /// Converts a time-ordered UUID into the instant it embeds, at millisecond resolution.
    ///
    /// The same caveat as [`Uuid::time_uuid_unix_ts_ms()`] applies: callers must know the UUID
    /// is time-ordered, since a random UUID yields a plausible but meaningless instant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashuuid::{from_unix_ts_ms, unix_ts_ms, Uuid};
    ///
    /// let uuid = "017f22e2-79b0-4cc3-98c4-dc0c0c07398f".parse::<Uuid>()?;
    /// assert_eq!(unix_ts_ms(uuid.time_uuid_to_time()), 0x017f_22e2_79b0);
    /// assert_eq!(uuid.time_uuid_to_time(), from_unix_ts_ms(0x017f_22e2_79b0));
    /// # Ok::<(), hashuuid::Error>(())
    /// ```
    pub fn time_uuid_to_time(&self) -> SystemTime {
        from_unix_ts_ms(self.time_uuid_unix_ts_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::{from_unix_ts_ms, unix_ts_ms, MAX_UNIX_TS_MS};
    use crate::Uuid;
    use std::time::{Duration, UNIX_EPOCH};

    /// Derives maximum timestamp from 48-bit field
    #[test]
    fn derives_maximum_timestamp_from_48_bit_field() {
        assert_eq!(MAX_UNIX_TS_MS, (1 << 48) - 1);
        assert_eq!(MAX_UNIX_TS_MS, 281_474_976_710_655);
    }

    /// Converts between instants and timestamps
    #[test]
    fn converts_between_instants_and_timestamps() {
        for ts in [0, 100, 1_569_479_272, 9_999_999_999, 99_999_999_999_999, MAX_UNIX_TS_MS] {
            assert_eq!(unix_ts_ms(from_unix_ts_ms(ts)), ts);
        }

        let t = UNIX_EPOCH + Duration::new(1_569_479_272, 123_456_789);
        assert_eq!(unix_ts_ms(t), 1_569_479_272_123);
        assert_eq!(from_unix_ts_ms(unix_ts_ms(t)), t - Duration::from_nanos(456_789));
    }

    /// Panics on instant before Unix epoch
    #[test]
    #[should_panic(expected = "must not precede the Unix epoch")]
    fn panics_on_instant_before_unix_epoch() {
        unix_ts_ms(UNIX_EPOCH - Duration::from_millis(1));
    }

    /// Reads timestamp from leading bytes
    #[test]
    fn reads_timestamp_from_leading_bytes() {
        let e = "017f22e2-79b0-4cc3-98c4-dc0c0c07398f".parse::<Uuid>().unwrap();
        assert_eq!(e.time_uuid_unix_ts_ms(), 0x017f_22e2_79b0);
        assert_eq!(e.time_uuid_to_time(), from_unix_ts_ms(0x017f_22e2_79b0));
        assert_eq!(Uuid::NIL.time_uuid_to_time(), UNIX_EPOCH);
    }
}
