//! Deterministic derivation of UUIDs from other UUIDs

use std::ops;

use crate::Uuid;

/// The odd number added to the 112-bit payload by [`Uuid::next()`]
/// (908070605040302010203040506070809 in decimal).
const ADDEND: [u8; 14] = [
    0x2c, 0xc5, 0x76, 0x5f, 0x51, 0x92, 0x18, 0x38, 0x27, 0x8e, 0xaa, 0xf6, 0x47, 0x19,
];

impl Uuid {
    /// Derives the successor of this UUID.
    ///
    /// The 14 bytes other than those holding the version (byte 6) and variant (byte 8) fields are
    /// read as a big-endian 112-bit integer, a fixed odd number is added with wraparound, and the
    /// sum is written back around the two untouched bytes. The version and variant fields are thus
    /// inherited from `self`. The function is pure: the same input always yields the same output
    /// across runs and processes. The successor of the nil UUID is the nil UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashuuid::Uuid;
    ///
    /// let x = "afe40693-8f63-4766-85f1-250a427f1db5".parse::<Uuid>()?;
    /// assert_eq!(x.next().to_string(), "dca97cf2-e0f5-477f-8529-4c98ed7564ce");
    /// assert_eq!(x.next(), x.next());
    /// # Ok::<(), hashuuid::Error>(())
    /// ```
    pub fn next(&self) -> Self {
        if self.is_nil() {
            return Self::NIL;
        }

        let src = self.as_bytes();
        let mut payload = [0u8; 14];
        payload[..6].copy_from_slice(&src[..6]);
        payload[6] = src[7];
        payload[7..].copy_from_slice(&src[9..]);

        // carry out of the most significant byte is discarded
        let mut carry = 0u16;
        for (e, a) in payload.iter_mut().zip(ADDEND).rev() {
            let sum = *e as u16 + a as u16 + carry;
            *e = sum as u8;
            carry = sum >> 8;
        }

        let mut dst = *src;
        dst[..6].copy_from_slice(&payload[..6]);
        dst[7] = payload[6];
        dst[9..].copy_from_slice(&payload[7..]);
        Self::from_bytes_unchecked(dst)
    }

    /// Combines two UUIDs by bitwise exclusive OR and stamps version `4` and the RFC 4122 variant
    /// on the result.
    ///
    /// The operation is commutative, and for two version 4 UUIDs `a` and `b`,
    /// `a.xor(&b).xor(&a) == b` holds because the stamped fields are constants. If either operand
    /// is nil, the result is nil.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashuuid::Uuid;
    ///
    /// let a = "afe40693-8f63-4766-85f1-250a427f1db5".parse::<Uuid>()?;
    /// let b = "43ae2f25-802d-4aae-be57-b7acefe336ac".parse::<Uuid>()?;
    /// assert_eq!(a.xor(&b).to_string(), "ec4a29b6-0f4e-4dc8-bba6-92a6ad9c2b19");
    /// assert_eq!(a ^ b ^ a, b);
    /// # Ok::<(), hashuuid::Error>(())
    /// ```
    pub fn xor(&self, other: &Self) -> Self {
        if self.is_nil() || other.is_nil() {
            return Self::NIL;
        }

        let mut dst = [0u8; 16];
        for (d, (a, b)) in dst
            .iter_mut()
            .zip(self.as_bytes().iter().zip(other.as_bytes()))
        {
            *d = a ^ b;
        }
        Self::from_bytes_v4(dst)
    }
}

impl ops::BitXor for Uuid {
    type Output = Self;

    /// Same as [`Uuid::xor()`].
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(&rhs)
    }
}
