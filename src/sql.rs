//! Relational-database value encoding
//!
//! A UUID is stored in a fixed-width 16-byte binary column, and the nil UUID is stored as NULL.
//! The functions here are independent of any driver; the `rusqlite` feature wires them into the
//! `rusqlite` crate.

use crate::{Error, Uuid};

impl Uuid {
    /// Returns the 16-byte packed form for a binary column, or `None` (i.e. NULL) for the nil
    /// UUID.
    pub const fn to_packed(&self) -> Option<[u8; 16]> {
        if self.is_nil() {
            None
        } else {
            Some(*self.as_bytes())
        }
    }

    /// Creates an object from a binary column value, where `None` stands for NULL.
    ///
    /// NULL and 16 zero bytes yield the nil UUID. A 16-byte value with an invalid version or
    /// variant field is rejected with [`Error::InvalidFormat`], and a value of any other length
    /// with [`Error::UnsupportedType`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashuuid::Uuid;
    ///
    /// let x = "afe40693-8f63-4766-85f1-250a427f1db5".parse::<Uuid>()?;
    /// let packed = x.to_packed();
    /// assert_eq!(Uuid::from_packed(packed.as_ref().map(|e| &e[..]))?, x);
    /// assert_eq!(Uuid::from_packed(None)?, Uuid::NIL);
    /// assert!(Uuid::from_packed(Some(&b"too short"[..])).is_err());
    /// # Ok::<(), hashuuid::Error>(())
    /// ```
    pub fn from_packed(src: Option<&[u8]>) -> Result<Self, Error> {
        let Some(src) = src else {
            return Ok(Self::NIL);
        };
        match <[u8; 16]>::try_from(src) {
            Ok(bytes) => Self::try_from(bytes),
            Err(_) => Err(Error::UnsupportedType(format!("[u8; {}]", src.len()))),
        }
    }
}

#[cfg(feature = "rusqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "rusqlite")))]
mod rusqlite_support {
    use crate::{Error, Uuid};
    use rusqlite::types::{
        FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef,
    };

    impl ToSql for Uuid {
        /// Writes a 16-byte BLOB, or NULL for the nil UUID.
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(if self.is_nil() {
                ToSqlOutput::Owned(Value::Null)
            } else {
                ToSqlOutput::Borrowed(ValueRef::Blob(self.as_bytes()))
            })
        }
    }

    impl FromSql for Uuid {
        /// Reads a 16-byte BLOB or NULL, rejecting other storage classes.
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            let src = match value {
                ValueRef::Null => None,
                ValueRef::Blob(bytes) => Some(bytes),
                _ => {
                    let err = Error::UnsupportedType(value.data_type().to_string());
                    return Err(FromSqlError::Other(Box::new(err)));
                }
            };
            Uuid::from_packed(src).map_err(|err| FromSqlError::Other(Box::new(err)))
        }
    }

}
