use std::{fmt, str};

use fstr::FStr;

use crate::Error;

/// Represents a Universally Unique IDentifier.
///
/// The all-zero value is the nil UUID, which every external representation (text, JSON, SQL)
/// carries as an empty string or NULL rather than as `00000000-0000-0000-0000-000000000000`. Any
/// other value carries a version number from 1 to 5 and the RFC 4122 variant bits, because all
/// the constructors validate or stamp these fields.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Canonical string that parses as the nil UUID.
const NIL_STR: &str = "00000000-0000-0000-0000-000000000000";

/// Hash-like string that parses as the nil UUID.
const NIL_HASH_LIKE: &str = "00000000000000000000000000000000";

const DIGITS: &[u8; 16] = b"0123456789abcdef";

impl Uuid {
    /// Nil UUID, displayed as an empty string
    pub const NIL: Self = Self([0x00; 16]);

    /// Wraps a byte array whose version and variant fields are known to be valid.
    pub(crate) const fn from_bytes_unchecked(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Overwrites the version field with `4` and the variant field with `10` and wraps the
    /// result.
    pub(crate) fn from_bytes_v4(mut bytes: [u8; 16]) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns `true` if this is the nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns the version field, or `None` for the nil UUID.
    pub const fn version(&self) -> Option<u8> {
        if self.is_nil() {
            None
        } else {
            Some(self.0[6] >> 4)
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// Unlike [`fmt::Display`], this method does not special-case the nil UUID and always returns
    /// 36 characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashuuid::Uuid;
    ///
    /// let x = "AFE40693-8F63-4766-85F1-250A427F1DB5".parse::<Uuid>()?;
    /// assert_eq!(&x.encode() as &str, "afe40693-8f63-4766-85f1-250a427f1db5");
    /// assert_eq!(&Uuid::NIL.encode() as &str, "00000000-0000-0000-0000-000000000000");
    /// # Ok::<(), hashuuid::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: ok because buffer consists of ASCII code points
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the 32-digit hexadecimal string representation without hyphens stored in a
    /// stack-allocated string type.
    ///
    /// Like [`Uuid::encode()`], the nil UUID is encoded as 32 zeros.
    pub fn encode_hash_like(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        for (i, e) in self.0.iter().enumerate() {
            buffer[i * 2] = DIGITS[(e >> 4) as usize];
            buffer[i * 2 + 1] = DIGITS[(e & 15) as usize];
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: ok because buffer consists of ASCII code points
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the hash-like form, i.e. the canonical form with hyphens removed, or an empty
    /// string for the nil UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashuuid::Uuid;
    ///
    /// let x = "afe40693-8f63-4766-85f1-250a427f1db5".parse::<Uuid>()?;
    /// assert_eq!(x.hash_like(), "afe406938f63476685f1250a427f1db5");
    /// assert_eq!(Uuid::NIL.hash_like(), "");
    /// # Ok::<(), hashuuid::Error>(())
    /// ```
    pub fn hash_like(&self) -> String {
        if self.is_nil() {
            String::new()
        } else {
            String::from(&self.encode_hash_like() as &str)
        }
    }

    /// Creates an object from the 32-digit hash-like representation.
    ///
    /// An empty string and 32 zeros both yield the nil UUID. Hyphens are not accepted.
    pub fn from_hash_like(src: &str) -> Result<Self, Error> {
        if src.is_empty() || src == NIL_HASH_LIKE {
            return Ok(Self::NIL);
        }
        match decode_hex(src, false) {
            Some(bytes) if has_valid_fields(&bytes) => Ok(Self(bytes)),
            _ => Err(Error::InvalidFormat(src.to_owned())),
        }
    }

    /// Creates an object from the canonical string representation held in a byte slice.
    ///
    /// This is the inverse of writing the [`fmt::Display`] output as bytes; it does not accept
    /// the 16-byte packed form (see [`Uuid::from_packed()`] for that).
    pub fn try_parse_ascii(src: &[u8]) -> Result<Self, Error> {
        str::from_utf8(src)
            .map_err(|_| Error::InvalidFormat(String::from_utf8_lossy(src).into_owned()))?
            .parse()
    }
}

/// Decodes 16 pairs of hexadecimal digits, expecting a hyphen after the 4th, 6th, 8th, and 10th
/// byte if `hyphenated` is `true`.
fn decode_hex(src: &str, hyphenated: bool) -> Option<[u8; 16]> {
    let mut dst = [0u8; 16];
    let mut iter = src.chars();
    for (i, e) in dst.iter_mut().enumerate() {
        let hi = iter.next()?.to_digit(16)? as u8;
        let lo = iter.next()?.to_digit(16)? as u8;
        *e = (hi << 4) | lo;
        if hyphenated && (i == 3 || i == 5 || i == 7 || i == 9) && iter.next()? != '-' {
            return None;
        }
    }
    iter.next().is_none().then_some(dst)
}

/// Tests the version field against `1..=5` and the variant field against `10`.
const fn has_valid_fields(bytes: &[u8; 16]) -> bool {
    matches!(bytes[6] >> 4, 1..=5) && bytes[8] >> 6 == 0b10
}

/// Returns `true` if `src` is an 8-4-4-4-12 hexadecimal string (case-insensitive) with a version
/// number from 1 to 5 and the RFC 4122 variant.
///
/// This is a strict structural check: neither an empty string nor the all-zero string passes,
/// even though [`Uuid::from_str()`](str::FromStr::from_str) maps both to the nil UUID.
///
/// # Examples
///
/// ```rust
/// assert!(hashuuid::is_valid("afe40693-8f63-4766-85f1-250a427f1db5"));
/// assert!(!hashuuid::is_valid("99999999-9999-6999-9999-250a427f1db5"));
/// assert!(!hashuuid::is_valid(""));
/// ```
pub fn is_valid(src: &str) -> bool {
    decode_hex(src, true).is_some_and(|bytes| has_valid_fields(&bytes))
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation, or an empty string
    /// for the nil UUID.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            Ok(())
        } else {
            f.write_str(&self.encode())
        }
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// An empty string and `00000000-0000-0000-0000-000000000000` both yield the nil UUID.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if src.is_empty() || src == NIL_STR {
            return Ok(Self::NIL);
        }
        match decode_hex(src, true) {
            Some(bytes) if has_valid_fields(&bytes) => Ok(Self(bytes)),
            _ => Err(Error::InvalidFormat(src.to_owned())),
        }
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl TryFrom<[u8; 16]> for Uuid {
    type Error = Error;

    /// Wraps a byte array, rejecting a non-nil array without valid version and variant fields.
    fn try_from(src: [u8; 16]) -> Result<Self, Self::Error> {
        let e = Self(src);
        if e.is_nil() || has_valid_fields(&src) {
            Ok(e)
        } else {
            Err(Error::InvalidFormat(String::from(&e.encode() as &str)))
        }
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;
    use crate::Error;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl TryFrom<uuid::Uuid> for Uuid {
        type Error = Error;

        fn try_from(src: uuid::Uuid) -> Result<Self, Self::Error> {
            Self::try_from(src.into_bytes())
        }
    }
}
