//! A UUID value type with a hash-like form, time-ordered generation, and deterministic derivation
//!
//! ```rust
//! use hashuuid::Uuid;
//!
//! let uuid = "AFE40693-8F63-4766-85F1-250A427F1DB5".parse::<Uuid>()?;
//! assert_eq!(uuid.to_string(), "afe40693-8f63-4766-85f1-250a427f1db5");
//! assert_eq!(uuid.hash_like(), "afe406938f63476685f1250a427f1db5");
//!
//! let random = hashuuid::new_v4();
//! println!("{random}"); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! # Ok::<(), hashuuid::Error>(())
//! ```
//!
//! # Representations
//!
//! | Form      | Length   | Example                                | Nil           |
//! | --------- | -------- | -------------------------------------- | ------------- |
//! | Canonical | 36       | `afe40693-8f63-4766-85f1-250a427f1db5` | `""`          |
//! | Hash-like | 32       | `afe406938f63476685f1250a427f1db5`     | `""`          |
//! | Packed    | 16 bytes | raw big-endian bytes                   | NULL / `None` |
//!
//! Parsing is case-insensitive and requires a version number from 1 to 5 and the RFC 4122 variant
//! (the first digit of the fourth group is one of `8`, `9`, `a`, `b`). Output is always lowercase.
//! The nil UUID is represented by an empty string in every external form, and both `""` and
//! `00000000-0000-0000-0000-000000000000` parse as nil.
//!
//! # Time-ordered UUIDs
//!
//! [`new_time()`] produces UUIDs with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |         rand          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          rand                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in milliseconds.
//! - The 4-bit `ver` field is set at `0100`, the same as random UUIDs.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 74 `rand` bits are filled with a cryptographically strong random number.
//!
//! [`Uuid::time_uuid_to_time()`] reads the timestamp back, but cannot tell a time-ordered UUID
//! from a random one.
//!
//! # Derivation
//!
//! [`Uuid::next()`] derives a reproducible successor that keeps the version and variant fields of
//! its input, and [`Uuid::xor()`] combines two UUIDs into a version 4 UUID.
//!
//! ```rust
//! use hashuuid::Uuid;
//!
//! let a = "afe40693-8f63-4766-85f1-250a427f1db5".parse::<Uuid>()?;
//! let b = "43ae2f25-802d-4aae-be57-b7acefe336ac".parse::<Uuid>()?;
//! assert_eq!(a.next(), a.next());
//! assert_eq!(a ^ b, b ^ a);
//! assert_eq!(a ^ b ^ b, a);
//! # Ok::<(), hashuuid::Error>(())
//! ```
//!
//! # Crate features
//!
//! - `global_gen` (default): thread-local default generator behind [`new_v4()`] and
//!   [`new_time()`].
//! - `serde` (default): `Serialize` and `Deserialize` implementations using the canonical string.
//! - `rusqlite`: `ToSql` and `FromSql` implementations using the packed form.
//! - `uuid`: conversions from and to `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::{is_valid, Uuid};

mod timestamp;
pub use timestamp::{from_unix_ts_ms, unix_ts_ms, MAX_UNIX_TS_MS};

mod arith;
mod serde_support;
mod sql;

pub mod generator;
pub use generator::Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{new_time, new_v4};
